//! Modal hosting the embedded diagram editor for one document.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editor page lives in an `<iframe>` on a different origin. This
//! component fetches the stored diagram, listens for the frame's
//! `postMessage` events, and carries out the `EditorEffect` each one maps
//! to. Protocol decoding and session bookkeeping live in `state::editor`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config;
use crate::net::api::{DocumentApi, HttpApi};
use crate::state::editor::{EditorCommand, EditorEffect, EditorSession, EditorStatus};

#[component]
pub fn DiagramEditor(doc_id: String, doc_name: String, on_close: Callback<()>) -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let session = RwSignal::new(EditorSession::open(&doc_id, &doc_name));
    let frame_ref = NodeRef::<leptos::html::Iframe>::new();

    let load_id = doc_id.clone();
    Effect::new(move || {
        let load_id = load_id.clone();
        spawn_local(async move {
            let result = api.fetch_diagram_xml(&load_id).await;
            let mut effect = None;
            session.update(|s| effect = s.apply_loaded(result));
            if let Some(effect) = effect {
                carry_out(effect, api, session, frame_ref, on_close);
            }
        });
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::state::editor::parse_editor_message;

        let handle = window_event_listener(leptos::ev::message, move |ev: web_sys::MessageEvent| {
            let Some(data) = ev.data().as_string() else {
                return;
            };
            let Some(event) = parse_editor_message(&ev.origin(), config::editor_origin(), &data) else {
                return;
            };
            let mut effect = EditorEffect::Ignore;
            session.update(|s| effect = s.dispatch(event));
            carry_out(effect, api, session, frame_ref, on_close);
        });
        on_cleanup(move || handle.remove());
    }

    let status_text = move || match session.with(|s| s.status.clone()) {
        EditorStatus::Loading => "Loading diagram...".to_owned(),
        EditorStatus::Ready => String::new(),
        EditorStatus::Saving => "Saving...".to_owned(),
        EditorStatus::Saved => "Saved".to_owned(),
        EditorStatus::Failed(message) => message,
    };

    view! {
        <div class="modal-overlay">
            <div class="modal modal--editor">
                <div class="modal__header">
                    <span class="modal__title">{format!("Editing: {doc_name}")}</span>
                    <span class="modal__status">{status_text}</span>
                    <button class="btn" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
                <iframe class="diagram-frame" src=config::editor_url() node_ref=frame_ref title="Diagram editor"></iframe>
            </div>
        </div>
    }
}

fn carry_out(
    effect: EditorEffect,
    api: HttpApi,
    session: RwSignal<EditorSession>,
    frame_ref: NodeRef<leptos::html::Iframe>,
    on_close: Callback<()>,
) {
    match effect {
        EditorEffect::Ignore => {}
        EditorEffect::Send(command) => post_to_editor(frame_ref, &command),
        EditorEffect::Close => on_close.run(()),
        EditorEffect::Persist { xml, close } => {
            let doc_id = session.with_untracked(|s| s.doc_id.clone());
            spawn_local(async move {
                let result = api.save_diagram_xml(&doc_id, &xml).await;
                let saved = result.is_ok();
                let mut status = None;
                session.update(|s| status = Some(s.apply_saved(result)));
                if let Some(status) = status {
                    post_to_editor(frame_ref, &status);
                }
                if close && saved {
                    on_close.run(());
                }
            });
        }
    }
}

#[cfg(feature = "hydrate")]
fn post_to_editor(frame_ref: NodeRef<leptos::html::Iframe>, command: &EditorCommand) {
    let Some(target) = frame_ref.get_untracked().and_then(|frame| frame.content_window()) else {
        leptos::logging::warn!("editor frame not ready; dropping command");
        return;
    };
    let message = wasm_bindgen::JsValue::from_str(&command.to_message());
    if let Err(e) = target.post_message(&message, config::editor_origin()) {
        leptos::logging::warn!("postMessage to editor failed: {e:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
fn post_to_editor(frame_ref: NodeRef<leptos::html::Iframe>, command: &EditorCommand) {
    let _ = (frame_ref, command);
}
