use crate::error::DecodeError;
use std::str::FromStr;

/// Decode an IGC latitude token into decimal degrees
///
/// The token is `DDMMmmmX`: two digits of degrees, two digits of whole
/// minutes, three digits of thousandths of a minute and the hemisphere
/// (`N` or `S`).
///
/// ```
/// use igc_flightlog::utils::decode_latitude;
///
/// let lat = decode_latitude("5210978N")?;
/// assert!((lat - 52.182_966_67).abs() < 1e-6);
/// # Ok::<(), igc_flightlog::DecodeError>(())
/// ```
pub fn decode_latitude(token: &str) -> Result<f64, DecodeError> {
    decode_angle("latitude", token, 2, ('N', 'S'))
}

/// Decode an IGC longitude token (`DDDMMmmmX`, `E` or `W`) into decimal degrees
pub fn decode_longitude(token: &str) -> Result<f64, DecodeError> {
    decode_angle("longitude", token, 3, ('E', 'W'))
}

fn decode_angle(
    field: &'static str,
    token: &str,
    degree_digits: usize,
    (positive, negative): (char, char),
) -> Result<f64, DecodeError> {
    let expected = degree_digits + 6;
    if token.len() != expected || !token.is_ascii() {
        return Err(DecodeError::Truncated {
            field,
            expected,
            found: token.len(),
        });
    }

    let degrees: u32 = parse_field(field, &token[..degree_digits])?;
    // Whole and fractional minutes together, in thousandths of a minute
    let milli_minutes: u32 = parse_field(field, &token[degree_digits..expected - 1])?;

    let sign = match token.as_bytes()[expected - 1] as char {
        c if c == positive => 1.0,
        c if c == negative => -1.0,
        found => return Err(DecodeError::InvalidHemisphere { field, found }),
    };

    Ok((degrees as f64 + milli_minutes as f64 / 1000.0 / 60.0) * sign)
}

/// Parse a fixed-width numeric field
///
/// Leading signs are only honoured where the target type is signed, so
/// `"-0012"` is a valid altitude while `"+123"` and `" 12"` are rejected.
pub(crate) fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, DecodeError> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }

    value.parse().map_err(|_| DecodeError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
