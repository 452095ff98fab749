//! Defines some common functions used in this library.

/// Defines some useful functions such as the base-2 logarithm.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;
