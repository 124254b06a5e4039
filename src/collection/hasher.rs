//! Default hash builder selection.
//!
//! The hasher used by [`Set::new`](super::Set::new) is chosen at compile
//! time through Cargo features:
//!
//! | Feature  | `DefaultHashBuilder`                          |
//! |----------|-----------------------------------------------|
//! | (none)   | `std::collections::hash_map::RandomState`     |
//! | `ahash`  | `ahash::RandomState`                          |
//! | `fxhash` | `rustc_hash::FxBuildHasher` (wins over ahash) |
//!
//! Any other [`BuildHasher`](std::hash::BuildHasher) can still be supplied
//! per set through [`Set::with_hasher`](super::Set::with_hasher).

/// The hash builder used when no explicit hasher is given.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hash builder used when no explicit hasher is given.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hash builder used when no explicit hasher is given.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// Name of the hasher selected by the enabled features.
#[cfg(feature = "fxhash")]
pub const DEFAULT_HASHER_NAME: &str = "fxhash";

/// Name of the hasher selected by the enabled features.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub const DEFAULT_HASHER_NAME: &str = "ahash";

/// Name of the hasher selected by the enabled features.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub const DEFAULT_HASHER_NAME: &str = "siphash";
