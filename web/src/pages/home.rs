//! Landing page.

use leptos::prelude::*;

use crate::components::page_scaffold::PageScaffold;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageScaffold>
            <section class="home">
                <h1>"Tasks"</h1>
                <p class="home__empty">"Nothing here yet."</p>
            </section>
        </PageScaffold>
    }
}
