//! Infrastructure adapters for storage and external task sources.

pub mod memory;
pub mod source;

pub use memory::{default_roster, InMemoryStore};
pub use source::{decode_records, FetchReport, HttpTaskSource, SourceAggregator, TaskSource};
