use crate::error::{Result, Warning};
use crate::raw::ExtensionLayout;
use crate::reader::FlightReader;
use crate::types::{FixRecord, FlightSummary, SummaryOptions};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Metadata key of the `A` record payload
pub const MANUFACTURER: &str = "manufacturer";

/// Metadata key of the `HFGTY` header
pub const GLIDER_TYPE: &str = "glider_type";

/// A single flight, as read from one IGC file
///
/// All fields are filled in file order by [`FlightParser`](crate::FlightParser);
/// once parsing has finished the flight is only read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flight {
    /// Date of the first fix, from the `HFDTE` header
    pub date: Option<NaiveDate>,
    /// Open-ended header metadata, see [`MANUFACTURER`] and [`GLIDER_TYPE`]
    pub metadata: BTreeMap<String, String>,
    /// Extension fields declared by the `I` record
    pub extensions: ExtensionLayout,
    /// Fixes in file order
    pub fixes: Vec<FixRecord>,
    /// Non-fatal findings, in the order they were encountered
    pub warnings: Vec<Warning>,
    /// Highest GPS altitude of all fixes, m
    pub altitude_peak: Option<i32>,
    /// Lowest GPS altitude of all fixes, m
    pub altitude_floor: Option<i32>,
}

impl Flight {
    /// Read a flight from an IGC file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        FlightReader::from_path(path)?.read_flight()
    }

    /// Read a flight from any `Read` source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        FlightReader::new(reader).read_flight()
    }

    /// Manufacturer and recorder id from the `A` record
    pub fn manufacturer(&self) -> Option<&str> {
        self.metadata.get(MANUFACTURER).map(String::as_str)
    }

    /// Glider model from the `HFGTY` header
    pub fn glider_type(&self) -> Option<&str> {
        self.metadata.get(GLIDER_TYPE).map(String::as_str)
    }

    /// Date and time of the first fix
    pub fn takeoff(&self) -> Option<NaiveDateTime> {
        self.fixes.first().map(|fix| fix.datetime)
    }

    /// Date and time of the last fix
    pub fn landing(&self) -> Option<NaiveDateTime> {
        self.fixes.last().map(|fix| fix.datetime)
    }

    /// Logbook summary of the whole flight
    pub fn summary(&self, options: &SummaryOptions) -> FlightSummary {
        FlightSummary::new(self, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_none;

    #[test]
    fn empty_flight() {
        let flight = Flight::default();

        assert_none!(flight.date);
        assert_none!(flight.manufacturer());
        assert_none!(flight.glider_type());
        assert_none!(flight.takeoff());
        assert_none!(flight.landing());
        assert_none!(flight.altitude_peak);
        assert!(flight.extensions.is_empty());
    }

    #[test]
    fn metadata_accessors() {
        let mut flight = Flight::default();
        flight
            .metadata
            .insert(MANUFACTURER.to_string(), "LXNGIIFLIGHT:1".to_string());
        flight
            .metadata
            .insert(GLIDER_TYPE.to_string(), "ASW 27".to_string());

        assert_eq!(flight.manufacturer(), Some("LXNGIIFLIGHT:1"));
        assert_eq!(flight.glider_type(), Some("ASW 27"));
    }
}
