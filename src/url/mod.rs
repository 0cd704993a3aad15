//! URL handling module for Washi
//!
//! Currently this is just syntactic validation of candidate page URLs;
//! anything that fails the predicate is dropped from the discovered set.

mod validate;

pub use validate::is_valid_url;
