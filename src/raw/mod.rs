//! Low-level IGC record decoding
//!
//! This module decodes single lines into typed records with minimal
//! transformation. Nothing here keeps flight state; see
//! [`FlightParser`](crate::FlightParser) for the stateful side.

mod extension;
mod fix;
mod header;
mod record;

pub use self::extension::ExtensionLayout;
pub use self::fix::{FIX_RECORD_LEN, Fix, TRUE_AIRSPEED};
pub use self::header::HeaderRecord;
pub use self::record::Record;
