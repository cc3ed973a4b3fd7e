//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// SmallVec optimized for split cell values (usually <4 languages).
pub type SmallVec4<T> = SmallVec<[T; 4]>;
