use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

static SEQ: AtomicU64 = AtomicU64::new(0);

/// Mint a timestamp-based string id, e.g. `user-1714988112345-0`.
///
/// Ids are never reconciled with any server; the process-local sequence
/// suffix keeps ids minted within the same millisecond distinct.
pub fn next_id(prefix: &str) -> String {
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}", prefix, Utc::now().timestamp_millis(), seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_within_one_millisecond() {
        let a = next_id("wallet");
        let b = next_id("wallet");
        assert_ne!(a, b);
        assert!(a.starts_with("wallet-"));
    }
}
