/// Shared infrastructure concerns
///
/// Document-store abstractions shared across bounded contexts (modules).
pub mod document;
pub mod document_collection;
pub mod in_memory_collection;

// Re-exports for convenience
pub use document::{Document, Filter, FindQuery, SortDirection, SortSpec, ID_FIELD};
pub use document_collection::DocumentCollection;
pub use in_memory_collection::InMemoryCollection;

#[cfg(test)]
pub use document_collection::MockDocumentCollection;
