//! Stock ledger: item quantities with validated mutations, an audit trail and
//! JSON file persistence.
//!
//! The ledger is plain in-memory state. Logging goes through an injected
//! [`AuditSink`]; printing lives in [`report`].

pub mod audit;
pub mod ledger;
pub mod report;
pub mod store;

pub use audit::{AuditAction, AuditRecord, AuditSink, NoopAudit, TracingAudit};
pub use ledger::{DEFAULT_LOW_THRESHOLD, StockLedger};
pub use report::ItemsReport;
pub use store::{DEFAULT_STORE_PATH, StoreError, StoreResult};
