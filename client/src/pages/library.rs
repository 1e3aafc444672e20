//! Solution library page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists saved solutions, searches them (server-side with a local fallback),
//! and promotes an uploaded document into a new solution. The state is
//! page-local; the document picker reads the shared `DocumentsState`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::refresh_documents;
use crate::components::solution_card::SolutionCard;
use crate::net::api::{DocumentApi, HttpApi};
use crate::state::documents::DocumentsState;
use crate::state::library::{LibraryState, SolutionForm, run_search, save_from_document};
use crate::util::dialog::alert;

#[component]
pub fn LibraryPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let docs = expect_context::<RwSignal<DocumentsState>>();
    let library = RwSignal::new(LibraryState { loading: true, ..LibraryState::default() });

    Effect::new(move || {
        refresh_documents(api, docs);
        spawn_local(async move {
            let result = api.list_solutions().await;
            library.update(|l| l.apply_list(result));
        });
    });

    let do_search = move || {
        let mut query = String::new();
        library.update(|l| query = l.begin_search());
        let all = library.with_untracked(|l| l.solutions.clone());
        spawn_local(async move {
            let outcome = run_search(&api, &all, &query).await;
            library.update(|l| l.apply_search(outcome));
        });
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = library.with_untracked(|l| l.form.clone());
        if let Err(e) = form.validate() {
            alert(&e.to_string());
            return;
        }
        library.update(|l| {
            l.saving = true;
            l.message = None;
        });
        spawn_local(async move {
            let Ok((saved, refreshed)) = save_from_document(&api, &form).await else {
                library.update(|l| l.saving = false);
                return;
            };
            library.update(|l| {
                l.apply_saved(saved);
                if let Some(solutions) = refreshed {
                    l.apply_list(Ok(solutions));
                }
            });
        });
    };

    let edit_form = move |apply: fn(&mut SolutionForm, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            library.update(|l| apply(&mut l.form, value));
        }
    };

    view! {
        <div class="page library-page">
            <h1>"Solution Library"</h1>

            <form class="solution-form" on:submit=on_save>
                <h2 class="section-title">"Save a Document as a Solution"</h2>
                <select
                    prop:value=move || library.with(|l| l.form.doc_id.clone())
                    on:change=edit_form(|f, v| f.doc_id = v)
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
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || library.with(|l| l.form.title.clone())
                    on:input=edit_form(|f, v| f.title = v)
                />
                <textarea
                    placeholder="Description"
                    prop:value=move || library.with(|l| l.form.description.clone())
                    on:input=edit_form(|f, v| f.description = v)
                ></textarea>
                <input
                    type="text"
                    placeholder="Tags (comma separated)"
                    prop:value=move || library.with(|l| l.form.tags.clone())
                    on:input=edit_form(|f, v| f.tags = v)
                />
                <button class="btn btn--primary" type="submit" disabled=move || library.with(|l| l.saving)>
                    {move || if library.with(|l| l.saving) { "Saving..." } else { "Save Solution" }}
                </button>
                {move || library.with(|l| l.message.clone()).map(|m| view! { <p class="status-text">{m}</p> })}
            </form>

            <Show when=move || library.with(|l| !l.recommended.is_empty())>
                <div class="recommended">
                    <h2 class="section-title">"Similar Solutions"</h2>
                    <div class="solution-grid">
                        {move || {
                            library
                                .get()
                                .recommended
                                .into_iter()
                                .map(|solution| view! { <SolutionCard solution=solution highlighted=true/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </div>
            </Show>

            <div class="search-bar">
                <input
                    type="text"
                    placeholder="Search solutions..."
                    prop:value=move || library.with(|l| l.query.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        library.update(|l| l.query = value);
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            do_search();
                        }
                    }
                />
                <button class="btn" on:click=move |_| do_search() disabled=move || library.with(|l| l.searching)>
                    "Search"
                </button>
            </div>

            <Show
                when=move || library.with(|l| !l.shown.is_empty())
                fallback=move || {
                    view! {
                        <p class="empty-text">
                            {move || {
                                if library.with(|l| l.loading) {
                                    "Loading solutions...".to_owned()
                                } else {
                                    library.with(LibraryState::empty_message)
                                }
                            }}
                        </p>
                    }
                }
            >
                <div class="solution-grid">
                    {move || {
                        library
                            .get()
                            .shown
                            .into_iter()
                            .map(|solution| view! { <SolutionCard solution=solution/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
