//! Page scaffold state: side navigation and the dark-theme switch.
//!
//! DESIGN
//! ======
//! Both controls are `RwSignal`s, so the view and the theme binding read the
//! same value. `init` seeds the switch from the resolved theme and then
//! watches it; when seeding succeeds the watch fires immediately so the body
//! class is applied on startup. The returned `WatchHandle` belongs to whoever
//! renders the scaffold and must be stopped on teardown.

#[cfg(test)]
#[path = "scaffold_test.rs"]
mod scaffold_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::state::theme::Theme;
use crate::util::local_storage::KeyValueStore;
use crate::util::theme::{ClassList, ColorSchemePreference, ThemeService};

/// Reactive state behind the page scaffold component.
#[derive(Clone, Copy, Debug)]
pub struct ScaffoldState {
    pub is_sidenav_open: RwSignal<bool>,
    /// `Some(true)` displays the dark theme; `None` is unset.
    pub dark_theme_toggle: RwSignal<Option<bool>>,
}

impl Default for ScaffoldState {
    fn default() -> Self {
        Self { is_sidenav_open: RwSignal::new(false), dark_theme_toggle: RwSignal::new(Some(false)) }
    }
}

impl ScaffoldState {
    pub fn toggle_sidenav(&self) {
        self.is_sidenav_open.update(|open| *open = !*open);
    }

    /// Set the switch from the current theme. Returns `false` and leaves the
    /// switch as it was if the theme cannot be resolved.
    pub fn seed_theme_toggle<S, C, P>(&self, themes: &ThemeService<S, C, P>) -> bool
    where
        S: KeyValueStore,
        C: ClassList,
        P: ColorSchemePreference,
    {
        match themes.current_theme() {
            Ok(theme) => {
                self.dark_theme_toggle.set(Some(theme.toggle_value()));
                true
            }
            Err(e) => {
                log::warn!("could not resolve current theme: {e}");
                false
            }
        }
    }

    /// Seed the switch, then switch the theme on every change of it.
    pub fn init<S, C, P>(&self, themes: Arc<ThemeService<S, C, P>>) -> Effect<LocalStorage>
    where
        S: KeyValueStore + Send + Sync + 'static,
        C: ClassList + Send + Sync + 'static,
        P: ColorSchemePreference + Send + Sync + 'static,
    {
        let seeded = self.seed_theme_toggle(&themes);
        let toggle = self.dark_theme_toggle;
        Effect::watch(
            move || toggle.get(),
            move |value, _, _| apply_theme_toggle(&themes, *value),
            seeded,
        )
    }

    // TODO: end the session once the auth API is reachable from the client.
    pub fn logout(&self) {
        log::info!("Logout");
    }
}

/// Switch to the theme a switch value displays. Only `Some(true)` is dark.
pub fn apply_theme_toggle<S, C, P>(themes: &ThemeService<S, C, P>, value: Option<bool>)
where
    S: KeyValueStore,
    C: ClassList,
    P: ColorSchemePreference,
{
    let theme = Theme::from_toggle(value);
    if let Err(e) = themes.switch_theme(theme) {
        log::error!("failed to switch theme to {theme}: {e}");
    }
}
