//! Floating assistant widget bound to one uploaded document.
//!
//! SYSTEM CONTEXT
//! ==============
//! Questions go to the per-document chat endpoint. A fresh compliance result
//! (tracked by `ComplianceState::result_seq`) is summarized into the
//! transcript once, which opens the widget when issues were found.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::refresh_documents;
use crate::net::api::{DocumentApi, HttpApi};
use crate::state::chat::{BotLayout, ChatSendOutcome, ChatState, Sender};
use crate::state::compliance::ComplianceState;
use crate::state::documents::DocumentsState;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let docs = expect_context::<RwSignal<DocumentsState>>();
    let compliance = expect_context::<RwSignal<ComplianceState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let state = compliance.get();
        let (Some(doc_id), Some(result)) = (state.result_doc.as_deref(), state.result.as_ref()) else {
            return;
        };
        let doc_name = docs.with_untracked(|d| d.name_of(doc_id)).unwrap_or_else(|| doc_id.to_owned());
        let seq = state.result_seq;
        if chat.with_untracked(|c| seq > c.last_seeded_seq) {
            chat.update(|c| {
                c.seed_from_compliance(doc_id, &doc_name, result, seq);
            });
        }
    });

    // The picker may open on a route that never listed documents.
    Effect::new(move || {
        if chat.with(|c| c.open) && docs.with_untracked(DocumentsState::needs_load) {
            refresh_documents(api, docs);
        }
    });

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.open));
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let mut outcome = ChatSendOutcome::Empty;
        chat.update(|c| outcome = c.prepare_send());
        let ChatSendOutcome::Ready { doc_id, query } = outcome else {
            return;
        };
        spawn_local(async move {
            let reply = api.chat_with_document(&doc_id, &query).await;
            chat.update(|c| c.apply_reply(reply));
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chatbot">
            <button class="chatbot__toggle" on:click=move |_| chat.update(ChatState::toggle)>
                {move || if chat.with(|c| c.open) { "✕" } else { "💬" }}
            </button>
            <Show when=move || chat.with(|c| c.open)>
                <div class="chatbot__window">
                    <div class="chatbot__header">
                        <span>"ArchAIve Assistant"</span>
                        <select
                            class="chatbot__doc-select"
                            prop:value=move || chat.with(|c| c.selected_doc.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                chat.update(|c| c.selected_doc = value);
                            }
                        >
                            <option value="">"Select a document"</option>
                            {move || {
                                docs.get()
                                    .items
                                    .into_iter()
                                    .map(|doc| view! { <option value=doc.id.clone()>{doc.name}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </div>
                    <div class="chatbot__messages" node_ref=messages_ref>
                        {move || {
                            chat.get()
                                .messages
                                .into_iter()
                                .map(|msg| {
                                    let class = format!("chatbot__message {}", msg.sender.css_class());
                                    let body = if msg.sender == Sender::Bot {
                                        render_bot_layout(msg.layout()).into_any()
                                    } else {
                                        view! { <span>{msg.text}</span> }.into_any()
                                    };
                                    view! { <div class=class>{body}</div> }
                                })
                                .collect::<Vec<_>>()
                        }}
                        {move || chat.with(|c| c.sending).then(|| view! { <div class="chatbot__typing">"Thinking..."</div> })}
                    </div>
                    <div class="chatbot__input-row">
                        <input
                            class="chatbot__input"
                            type="text"
                            placeholder="Ask about this design..."
                            prop:value=move || chat.with(|c| c.input.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                chat.update(|c| c.input = value);
                            }
                            on:keydown=on_keydown
                        />
                        <button
                            class="btn btn--primary"
                            on:click=move |_| do_send()
                            disabled=move || chat.with(|c| c.sending || c.input.trim().is_empty())
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

fn render_bot_layout(layout: BotLayout) -> impl IntoView {
    match layout {
        BotLayout::Plain(text) => {
            let html = render_markdown_html(&text);
            view! { <div class="chatbot__markdown" inner_html=html></div> }.into_any()
        }
        BotLayout::Sections { intro, items } => view! {
            <div class="chatbot__sections">
                {intro.map(|intro| view! { <p class="chatbot__intro">{intro}</p> })}
                {items
                    .into_iter()
                    .map(|item| {
                        let html = render_markdown_html(&item);
                        view! { <div class="chatbot__section" inner_html=html></div> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    }
}
