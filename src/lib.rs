//! # setwise
//!
//! A mutable, hash-backed mathematical set for Rust.
//!
//! ## Overview
//!
//! [`Set`](collection::Set) stores distinct values of one element type and
//! offers the usual set algebra on top of four primitives (insert, remove,
//! membership test, enumeration):
//!
//! - **Mutation**: `insert`, `remove`, `clear`
//! - **Introspection**: `len`, `contains`, `elements`, `iter`
//! - **Algebra**: `union`, `intersection`, `difference`, `power_set`
//! - **Relations**: `is_subset`, `is_superset`, `==`
//! - **External form**: `Display` text, serde sequence / JSON array
//!
//! Enumeration order is unspecified and never part of any contract.
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` plus the JSON helpers
//! - `fxhash`: use `rustc_hash::FxBuildHasher` as the default hasher
//! - `ahash`: use `ahash::RandomState` as the default hasher
//! - `full`: enable all optional functionality
//!
//! ## Example
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! let mut numbers = Set::new();
//! numbers.insert(10);
//! numbers.insert(20);
//! numbers.insert(20);
//! assert_eq!(numbers.len(), 2);
//!
//! let other: Set<i32> = [20, 40].into_iter().collect();
//! assert_eq!(numbers.union(&other).len(), 3);
//! assert_eq!(numbers.intersection(&other), Set::singleton(20));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use setwise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;

    #[cfg(feature = "serde")]
    pub use crate::error::*;
}

pub mod collection;

#[cfg(feature = "serde")]
pub mod error;
