//! Convenient re-exports for common usage.
//!
//! ```
//! use merge_kit::prelude::*;
//! ```

pub use crate::join;
pub use crate::join_all;
pub use crate::Merge;
