use crate::error::DecodeError;
use crate::utils::coordinates::parse_field;
use std::collections::BTreeMap;
use std::ops::Range;

/// Size of one field declaration inside an `I` record (`SSEECCC`)
const DECLARATION_LEN: usize = 7;

/// Byte ranges of the extension fields appended to every `B` record
///
/// Declared once by the `I` record and applied to all later fixes of the
/// same flight. Ranges are zero-based and end-exclusive, addressing the
/// full `B` line including its leading tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionLayout {
    fields: BTreeMap<String, Range<usize>>,
}

impl ExtensionLayout {
    /// Decode the payload of an `I` record
    ///
    /// `line` is the full record, e.g. `I023638FXA3941TAS`.
    pub fn decode(line: &str) -> Result<Self, DecodeError> {
        let count: usize = parse_field("extension count", slice(line, 1..3, "extension count")?)?;

        let mut fields = BTreeMap::new();
        for i in 0..count {
            let offset = 3 + DECLARATION_LEN * i;
            let declaration = slice(line, offset..offset + DECLARATION_LEN, "extension declaration")?;
            if !declaration.is_ascii() {
                return Err(DecodeError::InvalidNumber {
                    field: "extension declaration",
                    value: declaration.to_string(),
                });
            }

            let start: usize = parse_field("extension start", &declaration[0..2])?;
            let end: usize = parse_field("extension end", &declaration[2..4])?;
            let name = &declaration[4..7];

            // Byte numbers are 1-based and inclusive
            if start == 0 || end < start {
                return Err(DecodeError::InvalidExtensionRange {
                    name: name.to_string(),
                    start,
                    end,
                });
            }

            fields.insert(name.to_string(), start - 1..end);
        }

        Ok(Self { fields })
    }

    /// Merge the declarations of another `I` record into this layout
    pub fn extend(&mut self, other: ExtensionLayout) {
        self.fields.extend(other.fields);
    }

    /// Byte range of a named field
    pub fn get(&self, name: &str) -> Option<Range<usize>> {
        self.fields.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, range)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Range<usize>)> {
        self.fields.iter().map(|(name, range)| (name.as_str(), range.clone()))
    }

    /// Length a `B` record needs to carry every declared field
    pub fn record_len(&self) -> usize {
        self.fields.values().map(|range| range.end).max().unwrap_or(0)
    }

    /// Slice every declared field out of a `B` record
    ///
    /// Fields reaching past the end of a short record are cut off, or left
    /// empty if they start past it.
    pub fn slice_fields(&self, line: &str) -> BTreeMap<String, String> {
        let bytes = line.as_bytes();
        self.iter()
            .map(|(name, range)| {
                let start = range.start.min(bytes.len());
                let end = range.end.min(bytes.len());
                let value = String::from_utf8_lossy(&bytes[start..end]);
                (name.to_string(), value.into_owned())
            })
            .collect()
    }
}

fn slice<'a>(line: &'a str, range: Range<usize>, field: &'static str) -> Result<&'a str, DecodeError> {
    let expected = range.end;
    line.get(range).ok_or(DecodeError::Truncated {
        field,
        expected,
        found: line.len(),
    })
}
