//! Timer-based delay helper.

use core::time::Duration;

/// Resolves after `duration` elapses.
///
/// Completes with no value and never fails. There is no cancellation
/// mechanism beyond dropping the future; expiry is the only way it
/// completes. A zero duration completes on the first poll the timer wheel
/// services.
///
/// # Examples
///
/// ```
/// use core::time::Duration;
/// use outcome_kit::until;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// until(Duration::from_millis(1)).await;
/// # }
/// ```
pub async fn until(duration: Duration) {
    tokio::time::sleep(duration).await;
}
