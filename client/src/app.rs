//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{chat_widget::ChatWidget, sidebar::Sidebar};
use crate::net::api::HttpApi;
use crate::pages::{compliance::CompliancePage, home::HomePage, library::LibraryPage, upload::UploadPage};
use crate::state::{chat::ChatState, compliance::ComplianceState, documents::DocumentsState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API client and the state shared across views: the document
/// list (used by every selector), the latest compliance run, and the chat
/// transcript. Page-specific state stays inside each page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(HttpApi::default());
    provide_context(RwSignal::new(DocumentsState::default()));
    provide_context(RwSignal::new(ComplianceState::default()));
    provide_context(RwSignal::new(ChatState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/archaive-ui.css"/>
        <Title text="ArchAIve"/>

        <Router>
            <div class="app-container">
                <Sidebar/>
                <main class="content-container">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("upload") view=UploadPage/>
                        <Route path=StaticSegment("library") view=LibraryPage/>
                        <Route path=StaticSegment("compliance") view=CompliancePage/>
                    </Routes>
                </main>
                <ChatWidget/>
            </div>
        </Router>
    }
}

/// Re-list documents into the shared state.
pub fn refresh_documents(api: HttpApi, docs: RwSignal<DocumentsState>) {
    docs.update(DocumentsState::begin_refresh);
    leptos::task::spawn_local(async move {
        let result = crate::state::documents::refresh(&api).await;
        docs.update(|d| d.apply_refresh(result));
    });
}
