pub mod query;
pub mod types;

// Re-export main types
pub use query::QueryBuilder;
pub use types::*;
