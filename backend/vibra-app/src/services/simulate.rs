//! Artificial latency for the simulated backends.
//!
//! Every "remote" operation in the app is a local function; these delays
//! are what stands in for transport and processing time.

use std::time::Duration;

pub async fn latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
