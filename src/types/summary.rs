use crate::types::Flight;
use chrono::{NaiveDate, NaiveDateTime};

/// Options for [`Flight::summary`]
///
/// Default values leave the recorded data untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryOptions {
    lead_time_secs: i64,
}

impl SummaryOptions {
    /// Subtract a fixed recorder lead time from the flight duration
    ///
    /// Some recorders start logging a few minutes before takeoff. The value
    /// depends on the device and is not known in general, so it defaults to
    /// zero.
    pub fn with_lead_time(mut self, seconds: i64) -> Self {
        self.lead_time_secs = seconds;
        self
    }

    pub fn lead_time(&self) -> i64 {
        self.lead_time_secs
    }
}

/// One logbook line for a flight
#[derive(Debug, Clone, PartialEq)]
pub struct FlightSummary {
    pub date: Option<NaiveDate>,
    pub glider_type: Option<String>,
    pub takeoff: Option<NaiveDateTime>,
    pub landing: Option<NaiveDateTime>,
    pub fix_count: usize,
    /// Seconds between first and last fix, less the lead time, never negative
    pub duration: i64,
    /// Ground track length, km
    pub distance_total: f64,
    /// 3D track length, km
    pub chord_distance_total: f64,
    /// Furthest great-circle distance from the first fix, km
    pub max_distance_from_start: f64,
    /// km/h
    pub groundspeed_peak: f64,
    pub altitude_peak: Option<i32>,
    pub altitude_floor: Option<i32>,
    /// Total vertical travel, m
    pub climb_total: u64,
    /// km/h
    pub true_airspeed_peak: Option<u32>,
}

impl FlightSummary {
    pub fn new(flight: &Flight, options: &SummaryOptions) -> Self {
        let last = flight.fixes.last().map(|fix| &fix.metrics);

        let running_time = last.map_or(0, |metrics| metrics.running_time);
        let duration = (running_time - options.lead_time()).max(0);

        let max_distance_from_start = flight
            .fixes
            .iter()
            .map(|fix| fix.metrics.distance_from_start)
            .fold(0.0, f64::max);

        Self {
            date: flight.date,
            glider_type: flight.glider_type().map(str::to_string),
            takeoff: flight.takeoff(),
            landing: flight.landing(),
            fix_count: flight.fixes.len(),
            duration,
            distance_total: last.map_or(0.0, |metrics| metrics.distance_total),
            chord_distance_total: last.map_or(0.0, |metrics| metrics.chord_distance_total),
            max_distance_from_start,
            groundspeed_peak: last.map_or(0.0, |metrics| metrics.groundspeed_peak),
            altitude_peak: flight.altitude_peak,
            altitude_floor: flight.altitude_floor,
            climb_total: last.map_or(0, |metrics| metrics.climb_total),
            true_airspeed_peak: last.and_then(|metrics| metrics.true_airspeed_peak),
        }
    }
}
