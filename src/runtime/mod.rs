//! Runtime entry points: ingestion and the API surface.

pub mod api;
pub mod ingest;

pub use api::{plan_response, AssignmentView, PlanResponse};
pub use ingest::ingest;
