//! Derived metrics for each new fix
//!
//! Fixes are folded into an index-addressed history. The metrics of a new
//! fix only ever read `history[0]` (the first fix) and the last element
//! (the previous fix), so the history can be built in a single pass while
//! parsing.

use crate::raw::Fix;
use crate::types::{FixMetrics, FixRecord};
use crate::utils::{chord_distance, haversine};
use chrono::NaiveDateTime;

/// Compute the metrics of `fix` and wrap both into a [`FixRecord`]
///
/// `history` holds all previously crunched fixes of the same flight, in
/// file order. An empty history makes `fix` the first fix.
pub fn crunch(fix: Fix, datetime: NaiveDateTime, history: &[FixRecord]) -> FixRecord {
    let metrics = match (history.first(), history.last()) {
        (Some(first), Some(previous)) => derive_metrics(&fix, datetime, previous, first),
        _ => baseline(&fix),
    };

    FixRecord::new(fix, datetime, metrics)
}

/// Metrics of the first fix of a flight
fn baseline(fix: &Fix) -> FixMetrics {
    FixMetrics {
        true_airspeed_peak: fix.true_airspeed,
        ..FixMetrics::default()
    }
}

fn derive_metrics(
    fix: &Fix,
    datetime: NaiveDateTime,
    previous: &FixRecord,
    first: &FixRecord,
) -> FixMetrics {
    let prev = &previous.metrics;
    let position = (fix.latitude, fix.longitude, fix.gps_altitude);

    let time_delta = (datetime - previous.datetime).num_seconds();
    let running_time = (datetime - first.datetime).num_seconds();

    let distance_delta = haversine(
        fix.latitude,
        fix.longitude,
        previous.latitude,
        previous.longitude,
    );
    let distance_from_start =
        haversine(fix.latitude, fix.longitude, first.latitude, first.longitude);

    let chord_distance_delta = chord_distance(position, previous.position());
    let chord_distance_from_start = chord_distance(position, first.position());

    let gps_altitude_delta = fix.gps_altitude - previous.gps_altitude;
    let pressure_altitude_delta = fix.pressure_altitude - previous.pressure_altitude;

    // Duplicate timestamps leave the rates at zero
    let (groundspeed, climb_rate) = if time_delta > 0 {
        let seconds = time_delta as f64;
        (
            distance_delta / seconds * 3600.0,
            gps_altitude_delta as f64 / seconds,
        )
    } else {
        (0.0, 0.0)
    };

    let true_airspeed_peak = match (fix.true_airspeed, prev.true_airspeed_peak) {
        (Some(tas), Some(peak)) => Some(tas.max(peak)),
        (tas, peak) => tas.or(peak),
    };

    FixMetrics {
        time_delta,
        running_time,
        distance_delta,
        distance_total: prev.distance_total + distance_delta,
        distance_from_start,
        groundspeed,
        groundspeed_peak: groundspeed.max(prev.groundspeed_peak),
        chord_distance_delta,
        chord_distance_total: prev.chord_distance_total + chord_distance_delta,
        chord_distance_from_start,
        gps_altitude_delta,
        pressure_altitude_delta,
        climb_rate,
        climb_total: prev.climb_total + u64::from(gps_altitude_delta.unsigned_abs()),
        true_airspeed_peak,
    }
}
