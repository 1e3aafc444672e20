//! Ingest page: file picker/dropzone, upload, document table, and the
//! diagram editor modal.
//!
//! DESIGN
//! ======
//! The staged browser `File` is `!Send`, so it is held in a local signal
//! while only its name goes into the shared `DocumentsState`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::refresh_documents;
use crate::components::diagram_editor::DiagramEditor;
use crate::components::document_table::DocumentTable;
use crate::net::api::{HttpApi, UploadFile};
use crate::state::documents::{DocumentsState, UploadOutcome, upload_selected};

#[component]
pub fn UploadPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let docs = expect_context::<RwSignal<DocumentsState>>();
    let staged = RwSignal::new_local(None::<UploadFile>);
    let dragging = RwSignal::new(false);
    let editing = RwSignal::new(None::<(String, String)>);

    docs.update(DocumentsState::reset_upload_form);
    Effect::new(move || refresh_documents(api, docs));

    let stage = move |file: Option<UploadFile>| {
        docs.update(|d| d.stage_file(file.as_ref().map(|f| f.name.clone())));
        staged.set(file);
    };

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let file = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(UploadFile::from_browser);
            stage(file);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, stage);
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        #[cfg(feature = "hydrate")]
        {
            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
                .map(UploadFile::from_browser);
            if file.is_some() {
                stage(file);
            }
        }
    };

    let on_upload = move |_| {
        let mut ready = false;
        docs.update(|d| ready = d.begin_upload());
        if !ready {
            return;
        }
        let file = staged.get_untracked();
        spawn_local(async move {
            let outcome = upload_selected(&api, file.as_ref()).await;
            if matches!(outcome, UploadOutcome::Uploaded { .. }) {
                staged.set(None);
            }
            docs.update(|d| d.apply_upload(&outcome));
        });
    };

    let on_edit = Callback::new(move |target: (String, String)| editing.set(Some(target)));
    let close_editor = Callback::new(move |()| {
        editing.set(None);
        refresh_documents(api, docs);
    });

    view! {
        <div class="page upload-page">
            <h1>"Ingest Documents"</h1>
            <div
                class="dropzone"
                class:dropzone--active=move || dragging.get()
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    dragging.set(true);
                }
                on:dragleave=move |_| dragging.set(false)
                on:drop=on_drop
            >
                <p>"Drag and drop a document here, or pick one:"</p>
                <input type="file" class="dropzone__input" on:change=on_pick/>
                <p class="dropzone__selected">
                    {move || docs.with(|d| d.selected_file.clone()).map(|name| format!("Selected: {name}"))}
                </p>
            </div>
            <button class="btn btn--primary" on:click=on_upload disabled=move || docs.with(|d| d.uploading)>
                {move || if docs.with(|d| d.uploading) { "Uploading..." } else { "Upload" }}
            </button>
            {move || docs.with(|d| d.message.clone()).map(|m| view! { <p class="status-text">{m}</p> })}

            <h2 class="section-title">"Uploaded Documents"</h2>
            <DocumentTable on_edit=on_edit/>

            {move || {
                editing
                    .get()
                    .map(|(doc_id, doc_name)| {
                        view! { <DiagramEditor doc_id=doc_id doc_name=doc_name on_close=close_editor/> }
                    })
            }}
        </div>
    }
}
