//! Shared primitive types used across the crate.

/// A stable customer identifier, assigned by the external persistence layer.
pub type CustomerId = i64;

/// A monetary amount in minor currency units (e.g. cents).
pub type Money = i64;
