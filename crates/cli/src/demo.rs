//! Walkthrough of the ledger operations against a real stock file.

use std::io::Write;

use anyhow::Context;
use stockledger_inventory::{ItemsReport, StockLedger, TracingAudit};

use crate::config::DemoConfig;

pub fn run(config: &DemoConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let mut ledger = StockLedger::with_audit(Box::new(TracingAudit));
    let mut logs = Vec::new();

    ledger.add("apple", 10.0, Some(&mut logs))?;
    ledger.remove("apple", 3.0)?;
    if ledger.contains("apple") {
        writeln!(out, "Apple stock: {:?}", ledger.get_quantity("apple")?)?;
    }

    let low = ledger.check_low_items(config.low_threshold)?;
    writeln!(out, "Low items: {low:?}")?;

    ledger
        .save_to(&config.store_path)
        .with_context(|| format!("saving stock to {}", config.store_path.display()))?;
    ledger
        .load_from(&config.store_path)
        .with_context(|| format!("loading stock from {}", config.store_path.display()))?;

    write!(out, "{}", ItemsReport::new(&ledger))?;

    writeln!(out, "Audit log:")?;
    for line in &logs {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}
