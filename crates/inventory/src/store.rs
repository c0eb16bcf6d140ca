//! JSON file persistence for the stock mapping.
//!
//! The file is a bare JSON object: item name → number. No envelope, no
//! version field.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use thiserror::Error;

use stockledger_core::Quantity;

/// Default location of the stock file.
pub const DEFAULT_STORE_PATH: &str = "inventory.json";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid inventory format in {}: {reason}", path.display())]
    InvalidFormat { path: PathBuf, reason: String },
}

impl StoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn invalid_format(path: &Path, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Read and fully validate a stock file.
///
/// Nothing is returned unless every entry is valid, so callers can swap the
/// result in without risking a half-loaded ledger.
pub fn read_stock(path: &Path) -> StoreResult<IndexMap<String, f64>> {
    let text = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    let value: JsonValue = serde_json::from_str(&text).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let JsonValue::Object(entries) = value else {
        return Err(StoreError::invalid_format(
            path,
            "inventory file must contain a JSON object",
        ));
    };

    let mut stock = IndexMap::with_capacity(entries.len());
    for (item, qty) in entries {
        let Some(raw) = qty.as_f64() else {
            return Err(StoreError::invalid_format(
                path,
                format!("quantity for '{item}' must be a number, found {qty}"),
            ));
        };
        let qty = Quantity::non_negative(raw).map_err(|e| {
            StoreError::invalid_format(path, format!("quantity for '{item}': {e}"))
        })?;
        stock.insert(item, qty.value());
    }

    tracing::debug!(path = %path.display(), items = stock.len(), "read stock file");
    Ok(stock)
}

/// Write the mapping as pretty-printed UTF-8 JSON, replacing any existing file.
pub fn write_stock(path: &Path, stock: &IndexMap<String, f64>) -> StoreResult<()> {
    let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, stock)
        .map_err(|e| StoreError::io(path, e.into()))?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|e| StoreError::io(path, e))?;

    tracing::debug!(path = %path.display(), items = stock.len(), "wrote stock file");
    Ok(())
}
