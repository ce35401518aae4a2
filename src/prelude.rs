//! Convenience re-exports for the common path.
//!
//! ```
//! use outcome_kit::prelude::*;
//!
//! fn read_config(path: &str) -> Outcome<String> {
//!     std::fs::read_to_string(path).recover("read config")
//! }
//!
//! assert!(read_config("/missing").is_err());
//! ```

// Macros
pub use crate::{annotation, data, safe};

// Core types
pub use crate::types::{Annotation, Fault, LazyAnnotation, Outcome};

// Adapter entry points
pub use crate::adapter::{recover, try_safe};

// Traits
pub use crate::traits::{AnnotateExt, IntoAnnotation, RecoverExt};

// Async surface
pub use crate::async_ext::{until, FutureSafeExt, TryFutureSafeExt};
