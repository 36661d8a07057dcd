use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::RwLock;
use tracing::debug;

use super::document::{Document, Filter, SortSpec, ID_FIELD};
use super::document_collection::DocumentCollection;
use crate::shared::errors::{AppError, AppResult};

/// Document collection kept in memory.
///
/// Documents are held in insertion order; sorting is stable, so documents
/// with equal sort keys come back in the order they were first saved.
pub struct InMemoryCollection {
    name: String,
    documents: Arc<RwLock<Vec<Document>>>,
    unavailable: AtomicBool,
}

impl InMemoryCollection {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            documents: Arc::new(RwLock::new(Vec::new())),
            unavailable: AtomicBool::new(false),
        }
    }

    pub fn with_documents(name: &str, documents: Vec<Document>) -> Self {
        Self {
            name: name.to_string(),
            documents: Arc::new(RwLock::new(documents)),
            unavailable: AtomicBool::new(false),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Makes every following operation fail as if the store were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    fn ensure_available(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(format!(
                "Collection '{}' is unavailable",
                self.name
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentCollection for InMemoryCollection {
    async fn find(
        &self,
        filter: &Filter,
        sort: &SortSpec,
        limit: Option<usize>,
    ) -> AppResult<Vec<Document>> {
        self.ensure_available()?;

        let documents = self.documents.read().await;
        let mut matched: Vec<Document> = documents
            .iter()
            .filter(|doc| filter.matches(doc))
            .cloned()
            .collect();

        matched.sort_by(|a, b| sort.compare(a, b));
        if let Some(limit) = limit {
            matched.truncate(limit);
        }

        debug!(
            collection = %self.name,
            filter = %filter.to_document(),
            returned = matched.len(),
            "find"
        );
        Ok(matched)
    }

    async fn find_one(&self, filter: &Filter) -> AppResult<Option<Document>> {
        self.ensure_available()?;

        let documents = self.documents.read().await;
        Ok(documents.iter().find(|doc| filter.matches(doc)).cloned())
    }

    async fn count(&self, filter: &Filter) -> AppResult<u64> {
        self.ensure_available()?;

        let documents = self.documents.read().await;
        Ok(documents.iter().filter(|doc| filter.matches(doc)).count() as u64)
    }

    async fn save(&self, document: Document) -> AppResult<()> {
        self.ensure_available()?;

        let Some(id) = document.get(ID_FIELD).cloned() else {
            return Err(AppError::InvalidInput(format!(
                "Document for '{}' has no {} field",
                self.name, ID_FIELD
            )));
        };

        let mut documents = self.documents.write().await;
        match documents.iter_mut().find(|doc| doc.get(ID_FIELD) == Some(&id)) {
            Some(existing) => *existing = document,
            None => documents.push(document),
        }
        Ok(())
    }
}
