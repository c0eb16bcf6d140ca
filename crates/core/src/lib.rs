//! `stockledger-core` — domain building blocks for the stock ledger.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod item;
pub mod value_object;

pub use error::{DomainError, DomainResult, ErrorKind};
pub use item::{ItemName, Quantity};
pub use value_object::ValueObject;
