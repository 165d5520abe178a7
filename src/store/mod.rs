//! Document-store contract.
//!
//! Every workflow in this API reads and writes JSON documents through the
//! [`Store`] trait. The trait is the full persistence contract: any
//! document-oriented backend (MongoDB, CouchDB, a key-value store with JSON
//! values) can stand behind it. The crate ships [`memory::MemoryStore`],
//! which backs the default binary and the whole test suite.
//!
//! Filters are plain JSON objects matched by field equality, mirroring the
//! subset of query semantics the handlers actually use.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub mod memory;

pub const COLLECTION_ADMINS: &str = "admins";
pub const COLLECTION_LECTURERS: &str = "lecturers";
pub const COLLECTION_COURSES: &str = "courses";

/// A stored record: a JSON object keyed by field name. Persisted documents
/// carry their identifier under the `id` key.
pub type Document = serde_json::Map<String, Value>;

/// An equality filter: a document matches when every filter field is present
/// in the document with an equal value.
pub type Filter = serde_json::Map<String, Value>;

pub type DynStore = Arc<dyn Store>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("value is not a JSON object")]
    NotAnObject,
    #[error("storage backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Default)]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_ids: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched: u64,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted: u64,
}

#[async_trait]
pub trait Store: Send + Sync {
    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError>;

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Document>, StoreError>;

    /// Inserts a single document, assigning an `id` when the document has
    /// none. The assigned id is reported in [`InsertResult::inserted_ids`].
    async fn insert_one(
        &self,
        collection: &str,
        doc: Document,
    ) -> Result<InsertResult, StoreError>;

    /// Inserts a batch in order; ids are reported in input order.
    async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Document>,
    ) -> Result<InsertResult, StoreError>;

    /// Applies `patch` to the first matching document. Each patch key
    /// replaces the existing field wholesale (set semantics, not a deep
    /// merge).
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        patch: Document,
    ) -> Result<UpdateResult, StoreError>;

    async fn delete_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<DeleteResult, StoreError>;
}

/// Shorthand for building a [`Filter`]/[`Document`] from a `json!` object
/// literal. Non-object values yield an empty map rather than panicking.
pub fn object(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        _ => Document::new(),
    }
}

/// Serializes any `Serialize` type into a [`Document`].
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject),
    }
}

/// Returns the document with the named fields removed. Used to strip secret
/// material (password hashes, one-time passwords) before a document leaves
/// the API.
pub fn redact(mut doc: Document, fields: &[&str]) -> Document {
    for field in fields {
        doc.remove(*field);
    }
    doc
}

/// Reads the string `id` of a persisted document.
pub fn document_id(doc: &Document) -> Option<&str> {
    doc.get("id").and_then(Value::as_str)
}
