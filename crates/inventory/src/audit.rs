//! Audit trail of ledger changes.
//!
//! The ledger never logs on its own. It hands an [`AuditRecord`] to whatever
//! [`AuditSink`] it was built with; the default sink drops everything.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// What happened to the ledger.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditAction {
    Added {
        item: String,
        qty: f64,
    },
    /// `remaining == 0.0` means the item was deleted.
    Removed {
        item: String,
        qty: f64,
        remaining: f64,
    },
    Loaded {
        path: PathBuf,
        count: usize,
    },
    Saved {
        path: PathBuf,
        count: usize,
    },
}

impl AuditAction {
    pub fn name(&self) -> &'static str {
        match self {
            AuditAction::Added { .. } => "add",
            AuditAction::Removed { .. } => "remove",
            AuditAction::Loaded { .. } => "load",
            AuditAction::Saved { .. } => "save",
        }
    }
}

/// A single timestamped audit entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRecord {
    pub at: DateTime<Utc>,
    pub action: AuditAction,
}

impl AuditRecord {
    pub fn new(at: DateTime<Utc>, action: AuditAction) -> Self {
        Self { at, action }
    }

    pub fn now(action: AuditAction) -> Self {
        Self::new(Utc::now(), action)
    }
}

impl core::fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: ", self.at.to_rfc3339())?;
        match &self.action {
            AuditAction::Added { item, qty } => write!(f, "Added {qty:?} of {item}"),
            AuditAction::Removed {
                item,
                qty,
                remaining,
            } if *remaining == 0.0 => {
                write!(f, "Removed {qty:?} of {item}; item deleted at zero")
            }
            AuditAction::Removed {
                item,
                qty,
                remaining,
            } => write!(f, "Removed {qty:?} of {item}; new qty {remaining:?}"),
            AuditAction::Loaded { path, count } => {
                write!(f, "Loaded {count} items from {}", path.display())
            }
            AuditAction::Saved { path, count } => {
                write!(f, "Saved {count} items to {}", path.display())
            }
        }
    }
}

/// Receiver of audit records.
///
/// Sinks are infallible: whatever happens inside one must not change the
/// outcome of the ledger operation that produced the record.
pub trait AuditSink: Send {
    fn record(&mut self, record: &AuditRecord);
}

/// Discards every record.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopAudit;

impl AuditSink for NoopAudit {
    fn record(&mut self, _record: &AuditRecord) {}
}

/// Emits each record as a `tracing` event at INFO level.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingAudit;

impl AuditSink for TracingAudit {
    fn record(&mut self, record: &AuditRecord) {
        let action = record.action.name();
        match &record.action {
            AuditAction::Added { item, qty } => {
                tracing::info!(action, item = %item, qty = *qty, "{record}");
            }
            AuditAction::Removed {
                item,
                qty,
                remaining,
            } => {
                tracing::info!(
                    action,
                    item = %item,
                    qty = *qty,
                    remaining = *remaining,
                    "{record}"
                );
            }
            AuditAction::Loaded { path, count } | AuditAction::Saved { path, count } => {
                tracing::info!(action, path = %path.display(), count = *count, "{record}");
            }
        }
    }
}

/// Collects the human-readable lines in order.
impl AuditSink for Vec<String> {
    fn record(&mut self, record: &AuditRecord) {
        self.push(record.to_string());
    }
}
