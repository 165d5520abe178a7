//! In-process document store.
//!
//! Collections live in a `RwLock`-guarded map and documents are matched by
//! field equality, exactly as the [`Store`] contract describes. This backend
//! serves the default binary and the integration tests; a deployment that
//! needs durability plugs a real document-store client behind the same
//! trait.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use uuid::Uuid;

use super::{
    DeleteResult, Document, Filter, InsertResult, Store, StoreError, UpdateResult,
};

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(doc: &Document, filter: &Filter) -> bool {
    filter.iter().all(|(key, value)| doc.get(key) == Some(value))
}

fn ensure_id(doc: &mut Document) -> String {
    match doc.get("id").and_then(Value::as_str) {
        Some(id) => id.to_string(),
        None => {
            let id = Uuid::new_v4().to_string();
            doc.insert("id".to_string(), Value::String(id.clone()));
            id
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read();
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| matches(doc, filter)).cloned()))
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read();
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| matches(doc, filter))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert_one(
        &self,
        collection: &str,
        doc: Document,
    ) -> Result<InsertResult, StoreError> {
        self.insert_many(collection, vec![doc]).await
    }

    async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Document>,
    ) -> Result<InsertResult, StoreError> {
        let mut collections = self.collections.write();
        let stored = collections.entry(collection.to_string()).or_default();
        let mut inserted_ids = Vec::with_capacity(docs.len());
        for mut doc in docs {
            inserted_ids.push(ensure_id(&mut doc));
            stored.push(doc);
        }
        Ok(InsertResult {
            acknowledged: true,
            inserted_ids,
        })
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        patch: Document,
    ) -> Result<UpdateResult, StoreError> {
        let mut collections = self.collections.write();
        let matched = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| matches(doc, filter)));

        match matched {
            Some(doc) => {
                for (key, value) in patch {
                    doc.insert(key, value);
                }
                Ok(UpdateResult {
                    acknowledged: true,
                    matched: 1,
                })
            }
            None => Ok(UpdateResult {
                acknowledged: true,
                matched: 0,
            }),
        }
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<DeleteResult, StoreError> {
        let mut collections = self.collections.write();
        let deleted = collections
            .get_mut(collection)
            .and_then(|docs| {
                docs.iter()
                    .position(|doc| matches(doc, filter))
                    .map(|index| docs.remove(index))
            })
            .is_some();

        Ok(DeleteResult {
            acknowledged: true,
            deleted: u64::from(deleted),
        })
    }
}
