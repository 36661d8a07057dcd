// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns (pagination, queries)
pub mod config; // Search configuration
pub mod domain; // Shared domain concepts (ids, slugs)
pub mod errors; // Shared error types
pub mod infrastructure; // Document store port and in-memory adapter
pub mod utils; // Logging and validation

// Re-exports for convenience
pub use config::SearchConfig;
pub use errors::{AppError, AppResult};
