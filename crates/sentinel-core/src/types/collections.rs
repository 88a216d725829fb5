//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::{BTreeMap, BTreeSet};

/// SmallVec optimized for per-node exposure contributions (usually <4 seeds × hops).
pub type SmallVec4<T> = SmallVec<[T; 4]>;
