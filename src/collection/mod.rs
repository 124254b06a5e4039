//! Mutable hash-backed sets.
//!
//! This module provides [`Set`], a deduplicated collection of values backed
//! by a `HashMap<T, ()>`:
//!
//! - O(1) expected `insert`, `remove`, `contains`
//! - O(1) `len` and `is_empty`
//! - `union`, `intersection`, `difference` and `power_set` allocate new,
//!   independent sets and never mutate their operands
//!
//! # Examples
//!
//! ```rust
//! use setwise::collection::Set;
//!
//! let mut set = Set::new();
//! set.insert(10);
//! set.insert(20);
//! set.insert(30);
//! set.remove(&10);
//!
//! assert!(!set.contains(&10));
//! assert!(set.contains(&20));
//! assert_eq!(set.len(), 2);
//!
//! // Derived sets do not share storage with their sources
//! let copy = set.clone();
//! set.insert(99);
//! assert!(!copy.contains(&99));
//! ```
//!
//! ## Set algebra
//!
//! ```rust
//! use setwise::collection::Set;
//!
//! let set_a: Set<i32> = [20, 30].into_iter().collect();
//! let set_b: Set<i32> = [20, 40, 50].into_iter().collect();
//!
//! assert_eq!(set_a.union(&set_b), Set::from([20, 30, 40, 50]));
//! assert_eq!(set_a.intersection(&set_b), Set::from([20]));
//! assert_eq!(set_a.difference(&set_b), Set::from([30]));
//!
//! assert!(set_a.intersection(&set_b).is_subset(&set_a));
//! assert!(set_a.union(&set_b).is_superset(&set_b));
//! ```

mod hasher;
#[cfg(feature = "serde")]
mod json;
mod set;

pub use hasher::DEFAULT_HASHER_NAME;
pub use hasher::DefaultHashBuilder;
pub use set::Set;
pub use set::SetIntoIterator;
pub use set::SetIterator;
