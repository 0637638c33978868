use crate::error::{IgcError, Result};
use chrono::NaiveDate;

/// Decoded `H` (header) record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderRecord {
    /// `HFDTE`: UTC date of the first fix
    FlightDate(NaiveDate),

    /// `HFGTY`: glider model
    GliderType(String),

    /// Any other header subtype, kept verbatim
    Other { subtype: String },
}

impl HeaderRecord {
    /// Decode a full `H` line such as `HFDTE250809`
    ///
    /// The subtype is the four characters following the tag (`FDTE`,
    /// `FGTY`, ...). Unknown subtypes are not an error.
    pub fn decode(line: &str, line_num: usize) -> Result<Self> {
        let subtype = line.get(1..5).unwrap_or_else(|| line.get(1..).unwrap_or_default());
        let payload = line.get(5..).unwrap_or_default();

        match subtype {
            "FDTE" => decode_flight_date(payload)
                .map(HeaderRecord::FlightDate)
                .ok_or_else(|| IgcError::new(line_num, line, "Bad date").into()),
            "FGTY" => Ok(HeaderRecord::GliderType(decode_text_value(payload))),
            _ => Ok(HeaderRecord::Other {
                subtype: subtype.to_string(),
            }),
        }
    }
}

/// Decode `DDMMYY`, optionally in the `DATE:DDMMYY,NN` long form
fn decode_flight_date(payload: &str) -> Option<NaiveDate> {
    let payload = payload.strip_prefix("DATE:").unwrap_or(payload);
    let digits = payload.split(',').next()?.trim();

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let day = digits[0..2].parse().ok()?;
    let month = digits[2..4].parse().ok()?;
    let year: i32 = digits[4..6].parse().ok()?;

    NaiveDate::from_ymd_opt(2000 + year, month, day)
}

/// Value of a `LONG NAME:value` header, or the whole payload if unlabelled
fn decode_text_value(payload: &str) -> String {
    match payload.split_once(':') {
        Some((_, value)) => value.trim().to_string(),
        None => payload.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use claims::{assert_err, assert_matches, assert_ok};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn flight_date() {
        let record = assert_ok!(HeaderRecord::decode("HFDTE250809", 1));
        assert_eq!(record, HeaderRecord::FlightDate(date(2009, 8, 25)));
    }

    #[test]
    fn flight_date_long_form() {
        let record = assert_ok!(HeaderRecord::decode("HFDTEDATE:150623,01", 1));
        assert_eq!(record, HeaderRecord::FlightDate(date(2023, 6, 15)));
    }

    #[test]
    fn flight_date_invalid() {
        for line in [
            "HFDTE251309",  // month 13
            "HFDTE600809",  // day 60
            "HFDTEGARBAGE", // not numbers
            "HFDTE2513",    // no year
            "HFDTE",        // no payload
            "HFDTE290223",  // not a leap year
        ] {
            match assert_err!(HeaderRecord::decode(line, 2), "{line}") {
                Error::Igc(err) => {
                    assert_eq!(err.line_text, line);
                    assert_eq!(err.line_num, 2);
                    assert_eq!(err.msg, "Bad date");
                }
                err => panic!("Expected IgcError, got {err:?}"),
            }
        }
    }

    #[test]
    fn glider_type_labelled() {
        let record = assert_ok!(HeaderRecord::decode("HFGTYGLIDERTYPE:ASW 27", 1));
        assert_eq!(record, HeaderRecord::GliderType("ASW 27".to_string()));
    }

    #[test]
    fn glider_type_unlabelled() {
        let record = assert_ok!(HeaderRecord::decode("HFGTYLS 8", 1));
        assert_eq!(record, HeaderRecord::GliderType("LS 8".to_string()));
    }

    #[test]
    fn other_subtypes() {
        let record = assert_ok!(HeaderRecord::decode("HFPLTPILOTINCHARGE:Jane Doe", 1));
        assert_eq!(
            record,
            HeaderRecord::Other {
                subtype: "FPLT".to_string()
            }
        );

        // Date headers from other sources are not the flight date
        let record = assert_ok!(HeaderRecord::decode("HODTE250809", 1));
        assert_matches!(record, HeaderRecord::Other { .. });
    }

    #[test]
    fn short_header() {
        let record = assert_ok!(HeaderRecord::decode("HF", 1));
        assert_eq!(
            record,
            HeaderRecord::Other {
                subtype: "F".to_string()
            }
        );
    }
}
