//! View-model entities and wire contracts.
//!
//! Every struct here mirrors a JSON shape exchanged with the FranchiseOps API.
//! None of them is a source of truth: the backend owns all durable state and
//! the client only holds the latest snapshot it fetched.

mod analytics;
mod audit;
mod chat;
mod upload;

pub use analytics::{AnalyticsSummary, RecentFailure, StatusSummary, TopQuestion, TopUser};
pub use audit::{AuditLogEntry, AuditLogPage, AuditLogQuery, ExportPayload, parse_timestamp};
pub use chat::{ChatMessage, ChatRequest, ChatResponse, Citation};
pub use upload::{UploadMetadata, UploadReceipt};
