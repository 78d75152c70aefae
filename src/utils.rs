// src/utils.rs

//! Utility functions and helpers for the storefront core.

pub mod time;

pub use time::Time;

/// Order identifier helpers.
///
/// The reference storefront derives order and tracking identifiers from the
/// placement timestamp; keeping the derivation here means the store reducer
/// stays a pure function of (state, action).
pub mod ids {
    /// Order id derived from a millisecond timestamp, e.g. `ORD-1718000000000`.
    pub fn order_id(millis: u64) -> String {
        format!("ORD-{}", millis)
    }

    /// Shipment tracking number derived from a millisecond timestamp.
    pub fn tracking_number(millis: u64) -> String {
        format!("TRK{}", millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_formats() {
        assert_eq!(ids::order_id(1_718_000_000_000), "ORD-1718000000000");
        assert_eq!(ids::tracking_number(42), "TRK42");
    }

    #[test]
    fn test_time_roundtrip() {
        let now = Time::now_millis();
        let dt = Time::from_millis(now as i64);
        assert_eq!(dt.timestamp_millis() as u64, now);
    }
}
