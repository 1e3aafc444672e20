//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <h1 class="home__title">"ArchAIve"</h1>
            <p class="home__subtitle">"AI-assisted architecture knowledge base"</p>
            <div class="home__cards">
                <a href="/upload" class="home-card">
                    <h3>"Ingest"</h3>
                    <p>"Upload design documents and edit their diagrams."</p>
                </a>
                <a href="/library" class="home-card">
                    <h3>"Library"</h3>
                    <p>"Browse and search reusable solutions."</p>
                </a>
                <a href="/compliance" class="home-card">
                    <h3>"Compliance"</h3>
                    <p>"Check a design against your policies."</p>
                </a>
            </div>
        </div>
    }
}
