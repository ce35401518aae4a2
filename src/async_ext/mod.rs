//! Async half of the normalizing adapter, plus the [`until`] delay helper.
//!
//! The suspension point of the whole crate lives here: a guarded future
//! suspends when the wrapped computation does and resumes when it settles —
//! no new unit of concurrent work is spawned.

pub mod delay;
pub mod future_ext;
pub mod recover_future;
pub mod safe_future;

pub use delay::until;
pub use future_ext::{FutureSafeExt, TryFutureSafeExt};
pub use recover_future::RecoverFuture;
pub use safe_future::SafeFuture;
