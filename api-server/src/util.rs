use std::time::Duration;

/// Resolves after `ms` milliseconds. There is no cancellation hook beyond
/// dropping the future.
pub async fn sleep(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
