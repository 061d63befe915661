//! Signature freshness policy.
//!
//! The settings file records the last update as epoch seconds, but the
//! writer stamps it with the machine's local wall clock rather than true
//! UTC. The evaluator therefore shifts the recorded instant back by the
//! local zone's UTC offset at that instant before measuring how much
//! wall-clock time has passed.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};

use crate::{ProbeError, Result};

/// Parse the raw token extracted from the settings file.
///
/// The token must be a non-negative integer, taken verbatim; no
/// trimming or normalization is applied first.
pub fn parse_last_update(raw: &str) -> Result<i64> {
    let secs = raw
        .parse::<i64>()
        .map_err(|_| ProbeError::InvalidTimestamp(raw.to_string()))?;
    if secs < 0 {
        return Err(ProbeError::InvalidTimestamp(raw.to_string()));
    }
    Ok(secs)
}

/// Seconds east of UTC for the machine's zone at the given instant.
pub fn local_offset_seconds(instant: DateTime<Utc>) -> i64 {
    i64::from(
        Local
            .offset_from_utc_datetime(&instant.naive_utc())
            .local_minus_utc(),
    )
}

/// Undo the writer's mislabeling: treat the recorded instant as local
/// wall-clock time and shift it back to the UTC timeline.
pub fn adjusted_instant(reported: DateTime<Utc>) -> DateTime<Utc> {
    reported - Duration::seconds(local_offset_seconds(reported))
}

/// True when the recorded update sits inside the staleness window.
///
/// The comparison is strict: an update exactly `max_age` old is stale.
/// Updates that land in the future count as fresh.
pub fn is_up_to_date(last_update_secs: i64, now: DateTime<Utc>, max_age: Duration) -> Result<bool> {
    let reported = Utc
        .timestamp_opt(last_update_secs, 0)
        .single()
        .ok_or_else(|| ProbeError::InvalidTimestamp(last_update_secs.to_string()))?;

    let adjusted = adjusted_instant(reported);
    Ok(now.signed_duration_since(adjusted) < max_age)
}

/// Parse and evaluate in one step.
pub fn evaluate_freshness(raw: &str, now: DateTime<Utc>, max_age: Duration) -> Result<bool> {
    let secs = parse_last_update(raw)?;
    is_up_to_date(secs, now, max_age)
}
