//! Left navigation rail linking the four routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <h2 class="sidebar__title">"ArchAIve"</h2>
            <ul class="sidebar__links">
                <li><A href="/">"Home"</A></li>
                <li><A href="/upload">"Ingest"</A></li>
                <li><A href="/library">"Library"</A></li>
                <li><A href="/compliance">"Compliance"</A></li>
            </ul>
        </nav>
    }
}
