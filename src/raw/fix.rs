use crate::error::DecodeError;
use crate::raw::ExtensionLayout;
use crate::utils::coordinates::{decode_latitude, decode_longitude, parse_field};
use chrono::NaiveTime;
use std::collections::BTreeMap;

/// Length of the mandatory part of a `B` record, including the tag
pub const FIX_RECORD_LEN: usize = 35;

/// Three-letter code of the true airspeed extension
pub const TRUE_AIRSPEED: &str = "TAS";

/// Decoded `B` (fix) record, without any derived metrics
///
/// Layout of the mandatory part:
///
/// | bytes    | field              |
/// |----------|--------------------|
/// | `1..7`   | `HHMMSS` UTC time  |
/// | `7..15`  | `DDMMmmmN` latitude |
/// | `15..24` | `DDDMMmmmE` longitude |
/// | `24`     | validity (`A`/`V`) |
/// | `25..30` | pressure altitude  |
/// | `30..35` | GPS altitude       |
#[derive(Debug, Clone, PartialEq)]
pub struct Fix {
    pub time: NaiveTime,
    /// Decimal degrees, north positive
    pub latitude: f64,
    /// Decimal degrees, east positive
    pub longitude: f64,
    /// `true` for a 3D fix (`A`), `false` otherwise
    pub valid: bool,
    /// Meters, relative to the ICAO standard atmosphere
    pub pressure_altitude: i32,
    /// Meters above the WGS84 ellipsoid
    pub gps_altitude: i32,
    /// Raw extension fields as declared by the `I` record
    pub extensions: BTreeMap<String, String>,
    /// Parsed `TAS` extension in km/h, if declared
    pub true_airspeed: Option<u32>,
}

impl Fix {
    /// Decode a full `B` line, slicing extensions with the given layout
    pub fn decode(line: &str, layout: &ExtensionLayout) -> Result<Self, DecodeError> {
        let record = match line.get(..FIX_RECORD_LEN) {
            Some(record) if record.is_ascii() => record,
            _ => {
                return Err(DecodeError::Truncated {
                    field: "fix record",
                    expected: FIX_RECORD_LEN,
                    found: line.len(),
                });
            }
        };

        let time = decode_time(&record[1..7])?;
        let latitude = decode_latitude(&record[7..15])?;
        let longitude = decode_longitude(&record[15..24])?;
        let valid = &record[24..25] == "A";
        let pressure_altitude = parse_field("pressure altitude", &record[25..30])?;
        let gps_altitude = parse_field("GPS altitude", &record[30..35])?;

        let extensions = layout.slice_fields(line);
        let true_airspeed = extensions
            .get(TRUE_AIRSPEED)
            .filter(|value| !value.is_empty())
            .map(|value| parse_field("true airspeed", value))
            .transpose()?;

        Ok(Self {
            time,
            latitude,
            longitude,
            valid,
            pressure_altitude,
            gps_altitude,
            extensions,
            true_airspeed,
        })
    }
}

/// Decode `HHMMSS`
fn decode_time(value: &str) -> Result<NaiveTime, DecodeError> {
    let invalid = || DecodeError::InvalidTime(value.to_string());

    let hour: u32 = parse_field("time", &value[0..2]).map_err(|_| invalid())?;
    let minute: u32 = parse_field("time", &value[2..4]).map_err(|_| invalid())?;
    let second: u32 = parse_field("time", &value[4..6]).map_err(|_| invalid())?;

    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_matches, assert_none, assert_ok, assert_some_eq};

    const LINE: &str = "B1101355206343N00006198WA0058700558012100";

    fn hms(hour: u32, minute: u32, second: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, second).unwrap()
    }

    #[test]
    fn decode_mandatory_fields() {
        let fix = assert_ok!(Fix::decode(LINE, &ExtensionLayout::default()));

        assert_eq!(fix.time, hms(11, 1, 35));
        assert!((fix.latitude - 52.105_716_666).abs() < 1e-6);
        assert!((fix.longitude + 0.1033).abs() < 1e-6);
        assert!(fix.valid);
        assert_eq!(fix.pressure_altitude, 587);
        assert_eq!(fix.gps_altitude, 558);
        assert!(fix.extensions.is_empty());
        assert_none!(fix.true_airspeed);
    }

    #[test]
    fn decode_with_extensions() {
        let layout = assert_ok!(ExtensionLayout::decode("I023638FXA3941TAS"));
        let fix = assert_ok!(Fix::decode(LINE, &layout));

        assert_eq!(fix.extensions.len(), 2);
        assert_eq!(fix.extensions["FXA"], "012");
        assert_eq!(fix.extensions["TAS"], "100");
        assert_some_eq!(fix.true_airspeed, 100);
    }

    #[test]
    fn decode_void_fix() {
        let line = "B0939005210978N00006639EV0011200135";
        let fix = assert_ok!(Fix::decode(line, &ExtensionLayout::default()));
        assert!(!fix.valid);
    }

    #[test]
    fn decode_negative_altitudes() {
        let line = "B0939005210978N00006639EA-0012-0003";
        let fix = assert_ok!(Fix::decode(line, &ExtensionLayout::default()));
        assert_eq!(fix.pressure_altitude, -12);
        assert_eq!(fix.gps_altitude, -3);
    }

    #[test]
    fn decode_truncated() {
        let err = assert_err!(Fix::decode("B0939005210978N", &ExtensionLayout::default()));
        assert_matches!(err, DecodeError::Truncated { field: "fix record", .. });
    }

    #[test]
    fn decode_invalid_time() {
        let line = "B2561005210978N00006639EA0011200135";
        let err = assert_err!(Fix::decode(line, &ExtensionLayout::default()));
        assert_eq!(err, DecodeError::InvalidTime("256100".to_string()));
    }

    #[test]
    fn decode_invalid_hemisphere() {
        let line = "B0939005210978X00006639EA0011200135";
        let err = assert_err!(Fix::decode(line, &ExtensionLayout::default()));
        assert_matches!(err, DecodeError::InvalidHemisphere { found: 'X', .. });
    }

    #[test]
    fn decode_without_trailing_extensions() {
        let layout = assert_ok!(ExtensionLayout::decode("I013638TAS"));
        let line = "B0939005210978N00006639EA0011200135";
        let fix = assert_ok!(Fix::decode(line, &layout));

        assert_eq!(fix.extensions["TAS"], "");
        assert_none!(fix.true_airspeed);
        assert_eq!(fix.gps_altitude, 135);
    }

    #[test]
    fn decode_invalid_true_airspeed() {
        let layout = assert_ok!(ExtensionLayout::decode("I013638TAS"));
        let line = "B0939005210978N00006639EA0011200135---";
        let err = assert_err!(Fix::decode(line, &layout));
        assert_matches!(err, DecodeError::InvalidNumber { field: "true airspeed", .. });
    }
}
