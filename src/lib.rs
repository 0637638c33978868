#![doc = include_str!("../README.md")]

pub use crate::error::{DecodeError, Error, IgcError, Result, Warning};
pub use crate::parser::{FlightParser, resolve_datetime};
pub use crate::reader::FlightReader;
pub use crate::types::*;

pub mod crunch;
mod error;
mod parser;
pub mod raw;
mod reader;
mod types;
pub mod utils;
