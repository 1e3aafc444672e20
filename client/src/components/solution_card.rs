//! Card for one library solution with tags and source-document links.

use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::net::types::Solution;

#[component]
pub fn SolutionCard(solution: Solution, #[prop(optional)] highlighted: bool) -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let Solution { title, description, tags, reference_doc_id, reference_doc_name, diagram_path, .. } = solution;

    let diagram_link = reference_doc_id
        .as_deref()
        .filter(|_| diagram_path.is_some())
        .map(|id| api.diagram_view_url(id));
    let download_link = reference_doc_id.as_deref().map(|id| api.document_download_url(id));

    view! {
        <div class="solution-card" class:highlighted=highlighted>
            <h3>{title}</h3>
            <p>{description.unwrap_or_default()}</p>
            {(!tags.is_empty())
                .then(|| {
                    view! {
                        <div class="tags">
                            {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect::<Vec<_>>()}
                        </div>
                    }
                })}
            {reference_doc_name.map(|name| view! { <p class="solution-card__source">"Source: " {name}</p> })}
            <div class="solution-actions">
                {diagram_link
                    .map(|href| {
                        view! {
                            <a class="btn-link" href=href target="_blank" rel="noreferrer">
                                "View Diagram"
                            </a>
                        }
                    })}
                {download_link
                    .map(|href| {
                        view! {
                            <a class="btn-link" href=href target="_blank" rel="noreferrer">
                                "Download Document"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
