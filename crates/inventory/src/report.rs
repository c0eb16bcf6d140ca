//! Plain-text items report.

use crate::ledger::StockLedger;

/// Borrowed view that renders as:
///
/// ```text
/// Items Report
/// apple -> 7.0
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ItemsReport<'a> {
    ledger: &'a StockLedger,
}

impl<'a> ItemsReport<'a> {
    pub fn new(ledger: &'a StockLedger) -> Self {
        Self { ledger }
    }
}

impl core::fmt::Display for ItemsReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Items Report")?;
        for (name, qty) in self.ledger.items() {
            // Same float rendering as `Quantity`'s Display (`7.0`, `1e16`).
            writeln!(f, "{name} -> {qty:?}")?;
        }
        Ok(())
    }
}
