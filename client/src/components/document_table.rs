//! Table of uploaded documents with per-row actions.
//!
//! DESIGN
//! ======
//! Rows read from the shared `DocumentsState` so uploads, deletes, and the
//! chat widget's document picker all see the same list. Opening the diagram
//! editor is delegated to the host page through `on_edit`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpApi;
use crate::net::types::Document;
use crate::state::documents::{
    DocumentsState, ask_about_document, compliance_route, delete_confirmed, delete_prompt,
};
use crate::util::dialog::{alert, confirm, open_in_new_tab, prompt};
use crate::util::time::format_timestamp;

/// Document list; `on_edit` receives `(doc_id, doc_name)`.
#[component]
pub fn DocumentTable(on_edit: Callback<(String, String)>) -> impl IntoView {
    let docs = expect_context::<RwSignal<DocumentsState>>();

    view! {
        {move || docs.with(|d| d.error.clone()).map(|e| view! { <p class="error-text">{e}</p> })}
        <Show
            when=move || docs.with(|d| !d.items.is_empty())
            fallback=move || {
                view! {
                    <p class="empty-text">
                        {move || if docs.with(|d| d.loading) { "Loading documents..." } else { "No documents uploaded yet." }}
                    </p>
                }
            }
        >
            <table class="doc-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Uploaded"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || docs.get().items
                        key=|doc| doc.id.clone()
                        children=move |doc| view! { <DocumentRow doc=doc on_edit=on_edit/> }
                    />
                </tbody>
            </table>
        </Show>
    }
}

#[component]
fn DocumentRow(doc: Document, on_edit: Callback<(String, String)>) -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let docs = expect_context::<RwSignal<DocumentsState>>();
    let navigate = use_navigate();

    let Document { id, name, uploaded_at, .. } = doc;
    let uploaded = format_timestamp(uploaded_at.as_deref());

    let view_id = id.clone();
    let on_view = move |_| open_in_new_tab(&api.diagram_view_url(&view_id));

    let edit_args = (id.clone(), name.clone());
    let on_edit_click = move |_| on_edit.run(edit_args.clone());

    let check_id = id.clone();
    let on_check = move |_| navigate(&compliance_route(&check_id), NavigateOptions::default());

    let ask_id = id.clone();
    let ask_name = name.clone();
    let on_ask = move |_| {
        let question = prompt(&format!("What would you like to ask about \"{ask_name}\"?"));
        let doc_id = ask_id.clone();
        spawn_local(async move {
            match ask_about_document(&api, &doc_id, question.as_deref()).await {
                Some(Ok(answer)) => alert(&answer),
                Some(Err(e)) => {
                    leptos::logging::warn!("question about {doc_id} failed: {e}");
                    if e.is_status() {
                        alert(&e.user_message());
                    } else {
                        alert("Failed to get an answer from the AI assistant.");
                    }
                }
                None => {}
            }
        });
    };

    let delete_id = id.clone();
    let delete_name = name.clone();
    let on_delete = move |_| {
        let confirmed = confirm(&delete_prompt(&delete_name));
        let doc_id = delete_id.clone();
        spawn_local(async move {
            let outcome = delete_confirmed(&api, &doc_id, confirmed).await;
            docs.update(|d| d.apply_delete(&doc_id, &outcome));
        });
    };

    view! {
        <tr>
            <td>{name}</td>
            <td>{uploaded}</td>
            <td class="doc-table__actions">
                <button class="btn" on:click=on_view>"View Diagram"</button>
                <button class="btn" on:click=on_edit_click>"Edit Diagram"</button>
                <button class="btn" on:click=on_check>"Check Compliance"</button>
                <button class="btn" on:click=on_ask>"Ask AI"</button>
                <button class="btn btn--danger" on:click=on_delete>"Delete"</button>
            </td>
        </tr>
    }
}
