//! Page scaffold: top toolbar, collapsible side navigation and content slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page renders inside this scaffold. It owns the dark-theme switch and
//! binds it to the `BrowserThemeService` provided by `App`; the binding is
//! stopped when the component is cleaned up.

use std::sync::Arc;

use leptos::prelude::*;

use crate::state::scaffold::ScaffoldState;
use crate::util::theme::BrowserThemeService;

/// Outer layout hosting navigation, the theme switch and page content.
#[component]
pub fn PageScaffold(children: Children) -> impl IntoView {
    let themes = expect_context::<Arc<BrowserThemeService>>();
    let scaffold = ScaffoldState::default();

    let binding = scaffold.init(themes);
    on_cleanup(move || binding.stop());

    let sidenav_class = move || {
        if scaffold.is_sidenav_open.get() {
            "scaffold__sidenav scaffold__sidenav--open"
        } else {
            "scaffold__sidenav"
        }
    };

    view! {
        <div class="scaffold">
            <header class="scaffold__toolbar">
                <button
                    class="btn scaffold__menu"
                    title="Toggle navigation"
                    on:click=move |_| scaffold.toggle_sidenav()
                >
                    "☰"
                </button>
                <span class="scaffold__title">"Taskrs"</span>
                <span class="scaffold__spacer"></span>

                <label class="scaffold__theme-switch" title="Dark theme">
                    <input
                        type="checkbox"
                        role="switch"
                        prop:checked=move || scaffold.dark_theme_toggle.get() == Some(true)
                        on:change=move |ev| scaffold.dark_theme_toggle.set(Some(event_target_checked(&ev)))
                    />
                    <span>"Dark theme"</span>
                </label>

                <button class="btn scaffold__logout" title="Logout" on:click=move |_| scaffold.logout()>
                    "Logout"
                </button>
            </header>

            <div class="scaffold__body">
                <nav class=sidenav_class>
                    <a href="/" class="scaffold__nav-link">"Tasks"</a>
                </nav>
                <main class="scaffold__content">{children()}</main>
            </div>
        </div>
    }
}
