//! In-memory `DocumentApi` used by workflow tests.
//!
//! Every call is recorded by operation name so tests can assert which
//! requests were (or were not) issued. Operations listed in `failing`
//! return a transport error instead of touching the in-memory store.

use std::cell::RefCell;
use std::collections::HashSet;

use super::api::{DocumentApi, UploadFile};
use super::error::ApiError;
use super::types::{
    ComplianceHistoryEntry, ComplianceResult, Document, NewSolution, SavedSolution, Solution, SolutionFromDocument,
};

#[derive(Default)]
pub(crate) struct FakeApi {
    pub calls: RefCell<Vec<String>>,
    pub documents: RefCell<Vec<Document>>,
    pub solutions: RefCell<Vec<Solution>>,
    pub search_results: RefCell<Vec<Solution>>,
    pub similar: RefCell<Vec<Solution>>,
    pub compliance: RefCell<ComplianceResult>,
    pub history: RefCell<Vec<ComplianceHistoryEntry>>,
    pub diagram_xml: RefCell<String>,
    pub saved_xml: RefCell<Option<String>>,
    pub chat_answer: RefCell<String>,
    pub failing: RefCell<HashSet<&'static str>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(docs: Vec<Document>) -> Self {
        let api = Self::new();
        *api.documents.borrow_mut() = docs;
        api
    }

    pub fn with_solutions(solutions: Vec<Solution>) -> Self {
        let api = Self::new();
        *api.solutions.borrow_mut() = solutions;
        api
    }

    pub fn fail(&self, op: &'static str) {
        self.failing.borrow_mut().insert(op);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn called(&self, op: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == op)
    }

    fn record(&self, op: &'static str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(op.to_owned());
        if self.failing.borrow().contains(op) {
            return Err(ApiError::Transport(format!("{op} unreachable")));
        }
        Ok(())
    }
}

pub(crate) fn document(id: &str, name: &str) -> Document {
    Document {
        id: id.to_owned(),
        name: name.to_owned(),
        uploaded_at: Some("2025-09-14T10:00:00".to_owned()),
        content: None,
        diagram_path: None,
    }
}

pub(crate) fn solution(title: &str, description: &str, tags: &[&str], doc_name: Option<&str>) -> Solution {
    Solution {
        id: Some(title.to_lowercase().replace(' ', "-")),
        title: title.to_owned(),
        description: Some(description.to_owned()),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        reference_doc_id: doc_name.map(|_| "d1".to_owned()),
        reference_doc_name: doc_name.map(str::to_owned),
        diagram_path: None,
    }
}

impl DocumentApi for FakeApi {
    async fn upload_document(&self, file: &UploadFile) -> Result<String, ApiError> {
        self.record("upload_document")?;
        let mut docs = self.documents.borrow_mut();
        let id = format!("d{}", docs.len() + 1);
        docs.push(document(&id, &file.name));
        Ok(format!("uploaded {}", file.name))
    }

    async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        self.record("list_documents")?;
        Ok(self.documents.borrow().clone())
    }

    async fn delete_document(&self, doc_id: &str) -> Result<(), ApiError> {
        self.record("delete_document")?;
        self.documents.borrow_mut().retain(|d| d.id != doc_id);
        Ok(())
    }

    async fn fetch_diagram_xml(&self, _doc_id: &str) -> Result<String, ApiError> {
        self.record("fetch_diagram_xml")?;
        Ok(self.diagram_xml.borrow().clone())
    }

    async fn save_diagram_xml(&self, _doc_id: &str, xml: &str) -> Result<(), ApiError> {
        self.record("save_diagram_xml")?;
        *self.saved_xml.borrow_mut() = Some(xml.to_owned());
        Ok(())
    }

    async fn chat_with_document(&self, _doc_id: &str, _query: &str) -> Result<String, ApiError> {
        self.record("chat_with_document")?;
        Ok(self.chat_answer.borrow().clone())
    }

    async fn check_compliance(&self, _doc_id: &str) -> Result<ComplianceResult, ApiError> {
        self.record("check_compliance")?;
        Ok(self.compliance.borrow().clone())
    }

    async fn compliance_history(&self, _doc_id: &str) -> Result<Vec<ComplianceHistoryEntry>, ApiError> {
        self.record("compliance_history")?;
        Ok(self.history.borrow().clone())
    }

    async fn list_solutions(&self) -> Result<Vec<Solution>, ApiError> {
        self.record("list_solutions")?;
        Ok(self.solutions.borrow().clone())
    }

    async fn add_solution(&self, solution: &NewSolution) -> Result<serde_json::Value, ApiError> {
        self.record("add_solution")?;
        self.solutions.borrow_mut().push(Solution {
            title: solution.title.clone(),
            description: Some(solution.description.clone()),
            tags: solution.tags.clone(),
            ..Solution::default()
        });
        Ok(serde_json::json!({ "title": solution.title }))
    }

    async fn add_solution_from_document(&self, payload: &SolutionFromDocument) -> Result<SavedSolution, ApiError> {
        self.record("add_solution_from_document")?;
        let saved = Solution {
            title: payload.title.clone(),
            description: Some(payload.description.clone()),
            tags: payload.tags.clone(),
            reference_doc_id: Some(payload.doc_id.clone()),
            ..Solution::default()
        };
        self.solutions.borrow_mut().push(saved.clone());
        Ok(SavedSolution { solution: Some(saved), similar: self.similar.borrow().clone() })
    }

    async fn search_solutions(&self, _query: &str) -> Result<Vec<Solution>, ApiError> {
        self.record("search_solutions")?;
        Ok(self.search_results.borrow().clone())
    }

    async fn ask_assistant(&self, _query: &str) -> Result<String, ApiError> {
        self.record("ask_assistant")?;
        Ok(self.chat_answer.borrow().clone())
    }
}
