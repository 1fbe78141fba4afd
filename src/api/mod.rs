//! Orchestration facade consumed by host editors.

mod json_contract;
mod session;

pub use json_contract::{CHART_DOCUMENT_JSON_SCHEMA_V1, ChartDocumentJsonContractV1};
pub use session::ChartSession;
