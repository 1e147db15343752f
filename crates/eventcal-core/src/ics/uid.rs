//! UID generation for calendar components.

use chrono::Utc;

/// Produces UIDs for VEVENT components.
pub trait UidSource: Send + Sync {
    /// Returns a new UID namespaced under `domain`.
    fn next_uid(&self, domain: &str) -> String;
}

/// Time-plus-randomness UIDs: `<epoch-millis>-<64 random bits in hex>@<domain>`.
///
/// Regenerating a calendar for the same sessions yields new UIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUid;

impl UidSource for RandomUid {
    fn next_uid(&self, domain: &str) -> String {
        format!(
            "{}-{:016x}@{}",
            Utc::now().timestamp_millis(),
            rand::random::<u64>(),
            domain
        )
    }
}
