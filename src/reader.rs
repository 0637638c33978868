//! High-level IGC file reader

use crate::error::Result;
use crate::parser::FlightParser;
use crate::types::Flight;
use crate::utils::text::decode_line;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// High-level IGC file reader
///
/// Reads a whole file line by line into a [`FlightParser`]. Each line is
/// decoded as UTF-8 with a Windows-1252 fallback.
///
/// # Example
///
/// ```no_run
/// use igc_flightlog::FlightReader;
///
/// let flight = FlightReader::from_path("flight.igc")?.read_flight()?;
/// for fix in &flight.fixes {
///     println!("{} {:.1} km/h", fix.datetime, fix.metrics.groundspeed);
/// }
/// # Ok::<(), igc_flightlog::Error>(())
/// ```
#[derive(Debug)]
pub struct FlightReader<R: Read> {
    reader: BufReader<R>,
}

impl FlightReader<File> {
    /// Open an IGC file
    ///
    /// Fails with [`Error::IoError`](crate::Error::IoError) if the file
    /// does not exist or cannot be opened.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Opening IGC file");
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> FlightReader<R> {
    /// Create a reader from any `Read` source
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Parse all remaining lines into a [`Flight`]
    ///
    /// The first fatal error aborts the read; no partial flight is returned.
    pub fn read_flight(mut self) -> Result<Flight> {
        let mut parser = FlightParser::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = decode_line(&buf);
            // Some editors prepend a byte order mark
            let line = match parser.line_num() {
                0 => line.trim_start_matches('\u{feff}'),
                _ => &*line,
            };

            parser.parse_line(line)?;
        }

        Ok(parser.finish())
    }
}
