//! Stateful line-by-line IGC parser

use crate::crunch::crunch;
use crate::error::{Error, IgcError, Result, Warning};
use crate::raw::{Fix, HeaderRecord, Record};
use crate::types::{FixRecord, Flight, GLIDER_TYPE, MANUFACTURER};
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, trace};

/// Builds a [`Flight`] from IGC lines fed in file order
///
/// The parser starts out without a flight date; `B` records are rejected
/// until an `HFDTE` header has been seen. Each fix is crunched as soon as it
/// is decoded, so no second pass over the fixes is needed.
///
/// # Example
///
/// ```
/// use igc_flightlog::FlightParser;
///
/// let mut parser = FlightParser::new();
/// parser.parse_line("HFDTE250809")?;
/// parser.parse_line("B0939005210978N00006639EA0011200135")?;
///
/// let flight = parser.finish();
/// assert_eq!(flight.fixes.len(), 1);
/// # Ok::<(), igc_flightlog::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct FlightParser {
    flight: Flight,
    line_num: usize,
}

impl FlightParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the next line of the file
    ///
    /// Trailing whitespace and line terminators are ignored. On error the
    /// flight is left as it was before this line.
    pub fn parse_line(&mut self, line: &str) -> Result<()> {
        self.line_num += 1;
        let line = line.trim_end();

        match Record::parse(line, self.line_num)? {
            Record::Manufacturer(manufacturer) => {
                self.flight
                    .metadata
                    .insert(MANUFACTURER.to_string(), manufacturer.to_string());
            }
            Record::Fix(line) => self.push_fix(line)?,
            Record::Header(HeaderRecord::FlightDate(date)) => {
                self.flight.date = Some(date);
            }
            Record::Header(HeaderRecord::GliderType(glider_type)) => {
                self.flight
                    .metadata
                    .insert(GLIDER_TYPE.to_string(), glider_type);
            }
            Record::Header(HeaderRecord::Other { subtype }) => {
                self.warn(Warning::UnimplementedHeader {
                    subtype,
                    line: line.to_string(),
                });
            }
            Record::Extensions(layout) => self.flight.extensions.extend(layout),
            Record::Ignored => {}
            Record::Unimplemented(tag) => {
                self.warn(Warning::UnimplementedRecord {
                    tag,
                    line: line.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Flight as parsed so far
    pub fn flight(&self) -> &Flight {
        &self.flight
    }

    /// Number of lines consumed so far
    pub fn line_num(&self) -> usize {
        self.line_num
    }

    /// Finish parsing and hand out the flight
    pub fn finish(self) -> Flight {
        debug!(
            lines = self.line_num,
            fixes = self.flight.fixes.len(),
            warnings = self.flight.warnings.len(),
            "Finished parsing flight"
        );
        self.flight
    }

    fn push_fix(&mut self, line: &str) -> Result<()> {
        let line_num = self.line_num;

        let Some(date) = self.flight.date else {
            return Err(IgcError::new(line_num, line, "B record before date known").into());
        };

        let fix = Fix::decode(line, &self.flight.extensions)
            .map_err(|source| Error::Decode { line_num, source })?;

        let expected = self.flight.extensions.record_len();
        if line.len() < expected {
            self.warn(Warning::TruncatedExtensions {
                line_num,
                expected,
                found: line.len(),
            });
        }

        let datetime = resolve_datetime(date, fix.time, self.flight.fixes.last());
        let gps_altitude = fix.gps_altitude;
        let record = crunch(fix, datetime, &self.flight.fixes);
        trace!(line_num, %datetime, metrics = ?record.metrics, "Decoded fix");

        if !self.flight.fixes.is_empty() && record.metrics.time_delta <= 0 {
            self.warn(Warning::NonIncreasingTime { line_num });
        }

        let flight = &mut self.flight;
        flight.altitude_peak = Some(
            flight
                .altitude_peak
                .map_or(gps_altitude, |peak| peak.max(gps_altitude)),
        );
        flight.altitude_floor = Some(
            flight
                .altitude_floor
                .map_or(gps_altitude, |floor| floor.min(gps_altitude)),
        );
        flight.fixes.push(record);

        Ok(())
    }

    fn warn(&mut self, warning: Warning) {
        debug!(line_num = self.line_num, "{warning}");
        self.flight.warnings.push(warning);
    }
}

/// Full date and time of a fix
///
/// The date carries over from the previous fix and advances by one day
/// whenever the time of day goes backwards. Gaps of 24 hours or more between
/// consecutive fixes cannot be detected.
pub fn resolve_datetime(
    flight_date: NaiveDate,
    time: NaiveTime,
    previous: Option<&FixRecord>,
) -> NaiveDateTime {
    match previous {
        None => flight_date.and_time(time),
        Some(previous) if time < previous.time => {
            (previous.datetime.date() + Days::new(1)).and_time(time)
        }
        Some(previous) => previous.datetime.date().and_time(time),
    }
}
