//! REST API client for the document/solution backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Views depend on the `DocumentApi` trait rather than on `HttpApi` directly,
//! so workflow functions in `state` can be exercised against an in-memory
//! backend. Each method maps to exactly one request: no retry, no caching,
//! no de-duplication.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Status` carrying the body text;
//! send failures become `ApiError::Transport`. Callers log and render them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    ComplianceHistoryEntry, ComplianceResult, Document, NewSolution, SavedSolution, Solution, SolutionFromDocument,
};

/// A local file picked for upload.
#[derive(Clone, Debug)]
pub struct UploadFile {
    /// File name as reported by the browser.
    pub name: String,
    /// Browser file handle sent as the multipart `file` field.
    #[cfg(feature = "hydrate")]
    pub file: web_sys::File,
}

impl UploadFile {
    /// Wrap a browser file handle.
    #[cfg(feature = "hydrate")]
    pub fn from_browser(file: web_sys::File) -> Self {
        Self { name: file.name(), file }
    }

    /// Describe a file by name only (no payload outside the browser).
    #[cfg(not(feature = "hydrate"))]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One async method per backend operation.
#[allow(async_fn_in_trait)]
pub trait DocumentApi {
    /// `POST /api/documents/upload` as multipart with field `file`.
    /// Returns the response body unchanged.
    async fn upload_document(&self, file: &UploadFile) -> Result<String, ApiError>;
    /// `GET /api/documents`.
    async fn list_documents(&self) -> Result<Vec<Document>, ApiError>;
    /// `DELETE /api/documents/{id}`.
    async fn delete_document(&self, doc_id: &str) -> Result<(), ApiError>;
    /// `GET /api/documents/{id}/diagramXml`.
    async fn fetch_diagram_xml(&self, doc_id: &str) -> Result<String, ApiError>;
    /// `POST /api/documents/{id}/diagramXml/save` with a raw XML body.
    async fn save_diagram_xml(&self, doc_id: &str, xml: &str) -> Result<(), ApiError>;
    /// `GET /api/documents/{id}/chat?q=`. Returns the answer text.
    async fn chat_with_document(&self, doc_id: &str, query: &str) -> Result<String, ApiError>;
    /// `GET /api/documents/{id}/compliance`.
    async fn check_compliance(&self, doc_id: &str) -> Result<ComplianceResult, ApiError>;
    /// `GET /api/documents/{id}/compliance/history`.
    async fn compliance_history(&self, doc_id: &str) -> Result<Vec<ComplianceHistoryEntry>, ApiError>;
    /// `GET /api/solutions`.
    async fn list_solutions(&self) -> Result<Vec<Solution>, ApiError>;
    /// `POST /api/solutions/add`. Returns the backend's JSON body.
    async fn add_solution(&self, solution: &NewSolution) -> Result<serde_json::Value, ApiError>;
    /// `POST /api/solutions/addFromDoc`.
    async fn add_solution_from_document(&self, payload: &SolutionFromDocument) -> Result<SavedSolution, ApiError>;
    /// `GET /api/solutions/search?q=`.
    async fn search_solutions(&self, query: &str) -> Result<Vec<Solution>, ApiError>;
    /// `POST /api/ai/chat` with `{query}`. Returns the answer text.
    async fn ask_assistant(&self, query: &str) -> Result<String, ApiError>;
}

/// HTTP implementation of `DocumentApi` rooted at a backend base URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base: &'static str,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(crate::config::api_base())
    }
}

impl HttpApi {
    pub fn new(base: &'static str) -> Self {
        Self { base: crate::config::normalize_base(base) }
    }

    pub fn base(&self) -> &'static str {
        self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Absolute URL of the rendered diagram, opened in a new tab.
    pub fn diagram_view_url(&self, doc_id: &str) -> String {
        self.url(&diagram_endpoint(doc_id))
    }

    /// Absolute URL that downloads the original document.
    pub fn document_download_url(&self, doc_id: &str) -> String {
        self.url(&document_download_endpoint(doc_id))
    }
}

// =============================================================
// Endpoint paths
// =============================================================

/// Document ids are opaque; encode them before they become a path segment.
fn segment(doc_id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(doc_id)
}

pub fn documents_endpoint() -> String {
    "/api/documents".to_owned()
}

pub fn upload_endpoint() -> String {
    "/api/documents/upload".to_owned()
}

pub fn document_endpoint(doc_id: &str) -> String {
    format!("/api/documents/{}", segment(doc_id))
}

pub fn diagram_endpoint(doc_id: &str) -> String {
    format!("/api/documents/{}/diagram", segment(doc_id))
}

pub fn diagram_xml_endpoint(doc_id: &str) -> String {
    format!("/api/documents/{}/diagramXml", segment(doc_id))
}

pub fn diagram_save_endpoint(doc_id: &str) -> String {
    format!("/api/documents/{}/diagramXml/save", segment(doc_id))
}

pub fn document_chat_endpoint(doc_id: &str) -> String {
    format!("/api/documents/{}/chat", segment(doc_id))
}

pub fn compliance_endpoint(doc_id: &str) -> String {
    format!("/api/documents/{}/compliance", segment(doc_id))
}

pub fn compliance_history_endpoint(doc_id: &str) -> String {
    format!("/api/documents/{}/compliance/history", segment(doc_id))
}

pub fn document_download_endpoint(doc_id: &str) -> String {
    format!("/api/documents/{}/download", segment(doc_id))
}

pub fn solutions_endpoint() -> String {
    "/api/solutions".to_owned()
}

pub fn add_solution_endpoint() -> String {
    "/api/solutions/add".to_owned()
}

pub fn add_solution_from_doc_endpoint() -> String {
    "/api/solutions/addFromDoc".to_owned()
}

pub fn search_solutions_endpoint() -> String {
    "/api/solutions/search".to_owned()
}

pub fn assistant_endpoint() -> String {
    "/api/ai/chat".to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: String) -> ApiError {
    ApiError::Status { status, body }
}

// =============================================================
// Browser transport
// =============================================================

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, Response};
    use serde::de::DeserializeOwned;

    use super::ApiError;

    pub(super) async fn checked(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(super::status_error(status, body))
    }

    pub(super) async fn json<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
        let resp = checked(request.send().await?).await?;
        Ok(resp.json::<T>().await?)
    }

    pub(super) async fn text(request: Request) -> Result<String, ApiError> {
        let resp = checked(request.send().await?).await?;
        Ok(resp.text().await?)
    }

    pub(super) async fn empty(request: Request) -> Result<(), ApiError> {
        checked(request.send().await?).await.map(|_| ())
    }
}

impl DocumentApi for HttpApi {
    async fn upload_document(&self, file: &UploadFile) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = web_sys::FormData::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
            form.append_with_blob_and_filename("file", &file.file, &file.name)
                .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
            log::debug!("uploading {} to {}", file.name, upload_endpoint());
            let request = gloo_net::http::Request::post(&self.url(&upload_endpoint())).body(form)?;
            transport::text(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = file;
            Err(ApiError::Unavailable)
        }
    }

    async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            transport::json(gloo_net::http::Request::get(&self.url(&documents_endpoint())).build()?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_document(&self, doc_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            log::debug!("deleting document {doc_id}");
            transport::empty(gloo_net::http::Request::delete(&self.url(&document_endpoint(doc_id))).build()?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = doc_id;
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_diagram_xml(&self, doc_id: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            transport::text(gloo_net::http::Request::get(&self.url(&diagram_xml_endpoint(doc_id))).build()?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = doc_id;
            Err(ApiError::Unavailable)
        }
    }

    async fn save_diagram_xml(&self, doc_id: &str, xml: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.url(&diagram_save_endpoint(doc_id)))
                .header("Content-Type", "application/xml")
                .body(xml.to_owned())?;
            transport::empty(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (doc_id, xml);
            Err(ApiError::Unavailable)
        }
    }

    async fn chat_with_document(&self, doc_id: &str, query: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(&self.url(&document_chat_endpoint(doc_id)))
                .query([("q", query)])
                .build()?;
            let body = transport::text(request).await?;
            Ok(super::types::chat_answer_text(&body))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (doc_id, query);
            Err(ApiError::Unavailable)
        }
    }

    async fn check_compliance(&self, doc_id: &str) -> Result<ComplianceResult, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            transport::json(gloo_net::http::Request::get(&self.url(&compliance_endpoint(doc_id))).build()?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = doc_id;
            Err(ApiError::Unavailable)
        }
    }

    async fn compliance_history(&self, doc_id: &str) -> Result<Vec<ComplianceHistoryEntry>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(&compliance_history_endpoint(doc_id));
            transport::json(gloo_net::http::Request::get(&url).build()?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = doc_id;
            Err(ApiError::Unavailable)
        }
    }

    async fn list_solutions(&self) -> Result<Vec<Solution>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            transport::json(gloo_net::http::Request::get(&self.url(&solutions_endpoint())).build()?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn add_solution(&self, solution: &NewSolution) -> Result<serde_json::Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.url(&add_solution_endpoint())).json(solution)?;
            let body = transport::text(request).await?;
            Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = solution;
            Err(ApiError::Unavailable)
        }
    }

    async fn add_solution_from_document(&self, payload: &SolutionFromDocument) -> Result<SavedSolution, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request =
                gloo_net::http::Request::post(&self.url(&add_solution_from_doc_endpoint())).json(payload)?;
            let body = transport::text(request).await?;
            // Older backends answer with the bare solution or a status string.
            Ok(serde_json::from_str(&body).unwrap_or_default())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(ApiError::Unavailable)
        }
    }

    async fn search_solutions(&self, query: &str) -> Result<Vec<Solution>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(&self.url(&search_solutions_endpoint()))
                .query([("q", query)])
                .build()?;
            transport::json(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
            Err(ApiError::Unavailable)
        }
    }

    async fn ask_assistant(&self, query: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = super::types::AssistantQuery { query: query.to_owned() };
            let request = gloo_net::http::Request::post(&self.url(&assistant_endpoint())).json(&payload)?;
            let reply: super::types::AssistantReply = transport::json(request).await?;
            Ok(reply.answer)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
            Err(ApiError::Unavailable)
        }
    }
}
