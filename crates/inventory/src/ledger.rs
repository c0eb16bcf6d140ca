use std::path::Path;

use indexmap::IndexMap;

use stockledger_core::{DomainError, DomainResult, ItemName, Quantity};

use crate::audit::{AuditAction, AuditRecord, AuditSink, NoopAudit};
use crate::store::{self, StoreResult};

/// Threshold used by [`StockLedger::check_low_items_default`].
pub const DEFAULT_LOW_THRESHOLD: f64 = 5.0;

/// In-memory stock ledger: item name → quantity on hand.
///
/// Every operation validates its inputs before touching the mapping, so a
/// failed call leaves the ledger exactly as it was. Iteration follows
/// insertion order.
///
/// Mutations take `&mut self`; share a ledger across threads by wrapping it in
/// a `Mutex`.
pub struct StockLedger {
    stock: IndexMap<String, f64>,
    audit: Box<dyn AuditSink>,
}

impl Default for StockLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for StockLedger {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StockLedger")
            .field("stock", &self.stock)
            .finish_non_exhaustive()
    }
}

impl StockLedger {
    /// Empty ledger that discards audit records.
    pub fn new() -> Self {
        Self::with_audit(Box::new(NoopAudit))
    }

    /// Empty ledger reporting every change to `audit`.
    pub fn with_audit(audit: Box<dyn AuditSink>) -> Self {
        Self {
            stock: IndexMap::new(),
            audit,
        }
    }

    /// Add `qty` units of `item`, creating it if needed.
    ///
    /// When `logs` is given, the audit line is appended to it as well.
    pub fn add(&mut self, item: &str, qty: f64, logs: Option<&mut Vec<String>>) -> DomainResult<()> {
        let name = ItemName::parse(item)?;
        let qty = Quantity::non_negative(qty)?;

        let current = self.stock.get(name.as_str()).copied().unwrap_or(0.0);
        let updated = current + qty.value();
        if !updated.is_finite() {
            return Err(DomainError::invalid_argument(format!(
                "adding {qty} to '{name}' overflows the quantity range"
            )));
        }
        self.stock.insert(name.into_inner(), updated);

        let record = AuditRecord::now(AuditAction::Added {
            item: item.to_string(),
            qty: qty.value(),
        });
        self.audit.record(&record);
        if let Some(logs) = logs {
            logs.record(&record);
        }
        Ok(())
    }

    /// Take `qty` units of `item` out of stock. The item is deleted when it
    /// reaches exactly zero.
    ///
    /// Errors, first match wins: invalid arguments, unknown item, then
    /// insufficient stock.
    pub fn remove(&mut self, item: &str, qty: f64) -> DomainResult<()> {
        ItemName::parse(item)?;
        let qty = Quantity::positive(qty)?;

        let current = *self
            .stock
            .get(item)
            .ok_or_else(|| DomainError::not_found(item))?;
        let remaining = current - qty.value();
        if remaining < 0.0 {
            return Err(DomainError::insufficient_stock(item, current, qty.value()));
        }

        if remaining == 0.0 {
            self.stock.shift_remove(item);
        } else if let Some(slot) = self.stock.get_mut(item) {
            *slot = remaining;
        }

        self.audit.record(&AuditRecord::now(AuditAction::Removed {
            item: item.to_string(),
            qty: qty.value(),
            remaining,
        }));
        Ok(())
    }

    pub fn get_quantity(&self, item: &str) -> DomainResult<f64> {
        self.stock
            .get(item)
            .copied()
            .ok_or_else(|| DomainError::not_found(item))
    }

    /// Items whose quantity is strictly below `threshold`, in ledger order.
    pub fn check_low_items(&self, threshold: f64) -> DomainResult<Vec<String>> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(DomainError::invalid_argument(
                "threshold must be a non-negative number",
            ));
        }
        Ok(self
            .stock
            .iter()
            .filter(|&(_, &qty)| qty < threshold)
            .map(|(name, _)| name.clone())
            .collect())
    }

    /// [`check_low_items`](Self::check_low_items) with [`DEFAULT_LOW_THRESHOLD`].
    pub fn check_low_items_default(&self) -> Vec<String> {
        self.check_low_items(DEFAULT_LOW_THRESHOLD).unwrap_or_default()
    }

    /// Replace the whole mapping with the contents of a stock file.
    ///
    /// The file is validated in full first; on any error the current mapping
    /// is kept.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        self.stock = store::read_stock(path)?;

        self.audit.record(&AuditRecord::now(AuditAction::Loaded {
            path: path.to_path_buf(),
            count: self.stock.len(),
        }));
        Ok(())
    }

    /// Write the mapping to `path`, overwriting it.
    ///
    /// Takes `&mut self` only to notify the audit sink; the mapping is not
    /// modified.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        store::write_stock(path, &self.stock)?;

        self.audit.record(&AuditRecord::now(AuditAction::Saved {
            path: path.to_path_buf(),
            count: self.stock.len(),
        }));
        Ok(())
    }

    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Read-only view of `(name, qty)` pairs in ledger order.
    pub fn items(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.stock.iter().map(|(name, &qty)| (name.as_str(), qty))
    }
}
