//! Time and id helpers

use chrono::{TimeZone, Utc};

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at POS scale)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Generate a ticket id: unique, short enough for a 32-column receipt
pub fn ticket_id() -> String {
    format!("T{}", snowflake_id())
}

/// Format a millisecond timestamp for receipts: `dd-mm-yyyy HH:MM`
pub fn format_receipt_date(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%d-%m-%Y %H:%M").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_ids_unique() {
        let a = ticket_id();
        let b = ticket_id();
        assert!(a.starts_with('T'));
        // Random low bits make collisions within a millisecond unlikely;
        // across two calls in a test they should never collide.
        assert_ne!(a, b);
    }

    #[test]
    fn test_format_receipt_date() {
        // 2024-01-22 08:32:15 UTC
        assert_eq!(format_receipt_date(1705912335000), "22-01-2024 08:32");
    }

    #[test]
    fn test_format_receipt_date_out_of_range() {
        assert_eq!(format_receipt_date(i64::MAX), "");
    }
}
