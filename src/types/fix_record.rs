use crate::raw::Fix;
use chrono::{NaiveDateTime, NaiveTime};
use std::collections::BTreeMap;

/// A decoded fix together with the metrics derived at insertion time
///
/// Combines the fields of the raw `B` record with its full date and time
/// and the [`FixMetrics`] relative to the previous and the first fix.
#[derive(Debug, Clone, PartialEq)]
pub struct FixRecord {
    // Decoded record
    pub time: NaiveTime,
    pub datetime: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
    pub valid: bool,
    pub pressure_altitude: i32,
    pub gps_altitude: i32,
    pub extensions: BTreeMap<String, String>,
    pub true_airspeed: Option<u32>,

    // Derived
    pub metrics: FixMetrics,
}

impl FixRecord {
    /// Combine a raw fix with its resolved datetime and metrics
    pub fn new(fix: Fix, datetime: NaiveDateTime, metrics: FixMetrics) -> Self {
        Self {
            time: fix.time,
            datetime,
            latitude: fix.latitude,
            longitude: fix.longitude,
            valid: fix.valid,
            pressure_altitude: fix.pressure_altitude,
            gps_altitude: fix.gps_altitude,
            extensions: fix.extensions,
            true_airspeed: fix.true_airspeed,
            metrics,
        }
    }

    /// `(latitude, longitude, GPS altitude)` as used by the chord distance
    pub fn position(&self) -> (f64, f64, i32) {
        (self.latitude, self.longitude, self.gps_altitude)
    }
}

/// Metrics derived for one fix
///
/// Deltas are relative to the previous fix, totals and `*_from_start`
/// values relative to the first fix of the flight. The first fix carries
/// the `Default` baseline (all zero).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixMetrics {
    /// Seconds since the previous fix
    pub time_delta: i64,
    /// Seconds since the first fix
    pub running_time: i64,

    /// Great-circle distance to the previous fix, km
    pub distance_delta: f64,
    /// Sum of all great-circle deltas so far, km
    pub distance_total: f64,
    /// Great-circle distance to the first fix, km
    pub distance_from_start: f64,

    /// km/h over the last leg
    pub groundspeed: f64,
    /// Highest `groundspeed` so far, km/h
    pub groundspeed_peak: f64,

    /// 3D chord distance to the previous fix, km
    pub chord_distance_delta: f64,
    /// Sum of all chord deltas so far, km
    pub chord_distance_total: f64,
    /// 3D chord distance to the first fix, km
    pub chord_distance_from_start: f64,

    /// Signed GPS altitude change since the previous fix, m
    pub gps_altitude_delta: i32,
    /// Signed pressure altitude change since the previous fix, m
    pub pressure_altitude_delta: i32,
    /// m/s over the last leg, from GPS altitude
    pub climb_rate: f64,
    /// Total vertical travel so far: sum of absolute GPS altitude deltas, m
    pub climb_total: u64,

    /// Highest true airspeed so far, km/h; `None` unless `TAS` is declared
    pub true_airspeed_peak: Option<u32>,
}
