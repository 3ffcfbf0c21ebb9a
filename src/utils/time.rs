//! Timestamp utilities for reelgrid

use std::time::{SystemTime, UNIX_EPOCH};

/// Converts a system time to milliseconds since the Unix epoch
///
/// Times before the epoch are reported as 0.
pub fn system_time_to_millis(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_system_time_to_millis() {
        assert_eq!(system_time_to_millis(UNIX_EPOCH), 0);
        assert_eq!(
            system_time_to_millis(UNIX_EPOCH + Duration::from_millis(1_700_000_000_123)),
            1_700_000_000_123
        );
    }

    #[test]
    fn test_system_time_before_epoch() {
        assert_eq!(system_time_to_millis(UNIX_EPOCH - Duration::from_secs(5)), 0);
    }
}
