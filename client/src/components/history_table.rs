//! Past compliance runs for the selected document.

use leptos::prelude::*;

use crate::net::types::ComplianceHistoryEntry;
use crate::state::compliance::{GaugeBand, score_label};
use crate::util::time::format_timestamp;

#[component]
pub fn HistoryTable(#[prop(into)] entries: Signal<Vec<ComplianceHistoryEntry>>) -> impl IntoView {
    view! {
        <Show when=move || !entries.get().is_empty()>
            <h3 class="section-title">"History"</h3>
            <table class="doc-table history-table">
                <thead>
                    <tr>
                        <th>"Checked At"</th>
                        <th>"Status"</th>
                        <th>"Score"</th>
                        <th>"Issues"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        entries
                            .get()
                            .into_iter()
                            .map(|entry| {
                                let color = GaugeBand::from_score(entry.score).color();
                                view! {
                                    <tr>
                                        <td>{format_timestamp(entry.checked_at.as_deref())}</td>
                                        <td>{if entry.compliant { "Passed" } else { "Issues Found" }}</td>
                                        <td style:color=color>{score_label(entry.score)}</td>
                                        <td>{entry.issues.len()}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </Show>
    }
}
