//! Statute Q&A contracts: wire formats for the three backend endpoints
//! plus the client-embedded document catalog.

pub mod api;
pub mod catalog;

pub use api::{ErrorBody, PdfListResponse, ProcessPdfResponse, QueryRequest, QueryResponse};
pub use catalog::{display_name_for, DocumentMapping, DOCUMENT_CATALOG};
