use crate::error::{Error, Result};
use crate::raw::{ExtensionLayout, HeaderRecord};

/// One IGC line, classified by its leading record tag
///
/// Decoding a line does not depend on any flight state, except for `B`
/// records whose extension fields are sliced by the layout declared
/// earlier. Those are therefore handed on undecoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Record<'a> {
    /// `A`: manufacturer and flight recorder id, possibly empty
    Manufacturer(&'a str),

    /// `B`: fix record, the full line
    Fix(&'a str),

    /// `H`: header record
    Header(HeaderRecord),

    /// `I`: extension fields appended to every following `B` record
    Extensions(ExtensionLayout),

    /// `G`: security checksum, skipped without a warning
    Ignored,

    /// `C`, `D`, `E`, `F`, `J`, `K` or `L`: valid IGC record that is not interpreted
    Unimplemented(char),
}

impl<'a> Record<'a> {
    /// Classify and decode a single line
    ///
    /// The line must already be stripped of its terminator. Empty lines and
    /// lines that do not start with one of the IGC record tags `A` to `L`
    /// are malformed.
    pub fn parse(line: &'a str, line_num: usize) -> Result<Self> {
        let record = match line.chars().next() {
            Some('A') => Record::Manufacturer(&line[1..]),
            Some('B') => Record::Fix(line),
            Some('H') => Record::Header(HeaderRecord::decode(line, line_num)?),
            Some('I') => Record::Extensions(
                ExtensionLayout::decode(line)
                    .map_err(|source| Error::Decode { line_num, source })?,
            ),
            Some('G') => Record::Ignored,
            Some(tag @ ('C' | 'D' | 'E' | 'F' | 'J' | 'K' | 'L')) => Record::Unimplemented(tag),
            _ => {
                return Err(Error::MalformedLine {
                    line_num,
                    line: line.to_string(),
                });
            }
        };

        Ok(record)
    }
}
