//! Compliance page: pick a document, run a check, and review the verdict.
//!
//! `?doc=<id>` pre-selects a document, which is how the document table's
//! "Check Compliance" action lands here.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::app::refresh_documents;
use crate::components::history_table::HistoryTable;
use crate::components::issue_list::IssueList;
use crate::components::score_gauge::ScoreGauge;
use crate::net::api::HttpApi;
use crate::state::compliance::{ComplianceState, run_check, selected_document, status_label};
use crate::state::documents::DocumentsState;
use crate::util::dialog::alert;
use crate::util::time::format_timestamp;

#[component]
pub fn CompliancePage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let docs = expect_context::<RwSignal<DocumentsState>>();
    let compliance = expect_context::<RwSignal<ComplianceState>>();
    let query = use_query_map();

    Effect::new(move || refresh_documents(api, docs));

    Effect::new(move || {
        if let Some(doc_id) = query.with(|q| q.get("doc")).filter(|id| !id.trim().is_empty()) {
            compliance.update(|c| c.selected = doc_id);
        }
    });

    let on_run = move |_| {
        let selected = compliance.with_untracked(|c| c.selected.clone());
        let doc_id = match selected_document(&selected) {
            Ok(id) => id.to_owned(),
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };
        compliance.update(ComplianceState::begin_run);
        spawn_local(async move {
            let outcome = run_check(&api, &doc_id).await;
            compliance.update(|c| c.apply_run(&doc_id, outcome));
        });
    };

    let result = move || compliance.with(|c| c.result.clone());
    let result_name = move || {
        let doc_id = compliance.with(|c| c.result_doc.clone()).unwrap_or_default();
        docs.with(|d| d.name_of(&doc_id)).unwrap_or(doc_id)
    };

    view! {
        <div class="page compliance-page">
            <h1>"Compliance Check"</h1>
            <div class="compliance-controls">
                <select
                    prop:value=move || compliance.with(|c| c.selected.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        compliance.update(|c| c.selected = value);
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
                <button class="btn btn--primary" on:click=on_run disabled=move || compliance.with(|c| c.loading)>
                    {move || if compliance.with(|c| c.loading) { "Checking..." } else { "Run Check" }}
                </button>
            </div>

            {move || compliance.with(|c| c.error.clone()).map(|e| view! { <p class="error-text">{e}</p> })}

            {move || {
                result()
                    .map(|r| {
                        let passed = r.compliant;
                        let score = r.score;
                        let status = status_label(&r);
                        let checked = format_timestamp(r.checked_at.as_deref());
                        let issues = r.issues;
                        view! {
                            <div class="compliance-result">
                                <div class="compliance-result__summary">
                                    <ScoreGauge score=Signal::derive(move || score)/>
                                    <div>
                                        <h2>{result_name}</h2>
                                        <p
                                            class="compliance-result__status"
                                            class:passed=passed
                                            class:failed=!passed
                                        >
                                            {status}
                                        </p>
                                        <p class="compliance-result__checked">
                                            "Checked: " {checked}
                                        </p>
                                    </div>
                                </div>
                                <h3 class="section-title">"Issues"</h3>
                                <IssueList issues=Signal::derive(move || issues.clone())/>
                            </div>
                        }
                    })
            }}

            <HistoryTable entries=Signal::derive(move || compliance.with(|c| c.history.clone()))/>
        </div>
    }
}
