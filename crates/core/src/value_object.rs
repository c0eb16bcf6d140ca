//! Value object trait: equality by value, not identity.
//!
//! Value objects have no identity; two instances holding the same values are
//! interchangeable. The ledger's inputs (`ItemName`, `Quantity`) are modelled
//! this way so that validation happens once, at construction.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: comparison is by attribute values
/// - **Debug**: useful in logs and test failures
///
/// ```ignore
/// let a = Quantity::non_negative(3.0)?;
/// let b = Quantity::non_negative(3.0)?;
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
