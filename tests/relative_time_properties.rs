use chrono::NaiveDate;
use signpost::core::relative_time::{
    Bucket, DAY, HOUR, MINUTE, RelativeLabel, RelativeTimeFormatter, WEEK, format,
};
use signpost::core::timestamp::Timestamp;

// ============================================================================
// Helper Functions
// ============================================================================

const NOW: i64 = 1_700_000_000;

fn ts(secs: i64) -> Timestamp {
    Timestamp::from_unix(secs).unwrap()
}

fn label_for(elapsed: i64) -> RelativeLabel {
    format(ts(NOW - elapsed), ts(NOW))
}

// ============================================================================
// Bucket Boundaries
// ============================================================================

#[test]
fn test_every_second_of_first_minute_is_just_now() {
    for e in 0..MINUTE {
        assert_eq!(label_for(e).to_string(), "just now", "elapsed = {e}");
    }
}

#[test]
fn test_whole_second_minute_is_singular() {
    for e in 60..120 {
        assert_eq!(label_for(e).to_string(), "1 minute ago", "elapsed = {e}");
    }
    assert_eq!(label_for(120).to_string(), "2 minutes ago");
}

#[test]
fn test_hour_and_day_boundaries() {
    assert_eq!(label_for(3_600).to_string(), "1 hour ago");
    assert_eq!(label_for(7_200).to_string(), "2 hours ago");
    assert_eq!(label_for(86_400).to_string(), "1 day ago");
    assert_eq!(label_for(172_800).to_string(), "2 days ago");
}

#[test]
fn test_week_and_beyond_is_absolute_date() {
    for e in [WEEK, WEEK + 1, 30 * DAY, 400 * DAY, 20 * 365 * DAY] {
        let label = label_for(e);
        assert_eq!(label.bucket(), Bucket::Date, "elapsed = {e}");
        assert!(!label.to_string().contains("ago"));
    }
}

// ============================================================================
// Date Round Trip
// ============================================================================

#[test]
fn test_date_label_reparses_to_same_calendar_date() {
    for e in [WEEK, WEEK + 5 * HOUR, 45 * DAY + 13 * HOUR, 3_000 * DAY] {
        let timestamp = ts(NOW - e);
        let text = format(timestamp, ts(NOW)).to_string();
        let parsed = NaiveDate::parse_from_str(&text, "%m/%d/%Y").unwrap();
        assert_eq!(parsed, timestamp.as_datetime().date_naive(), "label = {text}");
    }
}

#[test]
fn test_date_label_round_trip_with_offset() {
    let offset = chrono::FixedOffset::west_opt(10 * 3600).unwrap();
    let formatter = RelativeTimeFormatter::new("%Y-%m-%d", offset).unwrap();
    let timestamp = ts(NOW - 9 * DAY);
    let text = formatter.format(timestamp, ts(NOW)).to_string();
    let parsed = NaiveDate::parse_from_str(&text, "%Y-%m-%d").unwrap();
    assert_eq!(parsed, timestamp.as_datetime().with_timezone(&offset).date_naive());
}

// ============================================================================
// Monotonicity
// ============================================================================

#[test]
fn test_older_timestamps_never_move_to_a_smaller_bucket() {
    let mut previous = Bucket::JustNow;
    let mut e = 0;
    while e < 2 * WEEK {
        let bucket = label_for(e).bucket();
        assert!(bucket >= previous, "elapsed = {e}: {bucket:?} < {previous:?}");
        previous = bucket;
        e += 37;
    }
    assert_eq!(previous, Bucket::Date);
}

#[test]
fn test_counts_never_decrease_within_a_bucket() {
    let count = |label: RelativeLabel| match label {
        RelativeLabel::Minutes(n) | RelativeLabel::Hours(n) | RelativeLabel::Days(n) => n,
        _ => 0,
    };
    let mut previous = (Bucket::JustNow, 0);
    for e in (0..WEEK).step_by(97) {
        let label = label_for(e);
        let current = (label.bucket(), count(label));
        assert!(current >= previous, "elapsed = {e}");
        previous = current;
    }
}

// ============================================================================
// Future Timestamps
// ============================================================================

#[test]
fn test_future_timestamps_read_as_just_now() {
    for e in [-1, -MINUTE, -DAY, -WEEK * 52] {
        assert_eq!(label_for(e), RelativeLabel::JustNow, "elapsed = {e}");
    }
}

#[test]
fn test_parsed_inputs_format_the_same_as_unix_inputs() {
    let timestamp: Timestamp = "2023-11-14T20:13:20Z".parse().unwrap();
    let now: Timestamp = "1700000000".parse().unwrap();
    assert_eq!(format(timestamp, now).to_string(), "2 hours ago");
}
