pub mod coordinates;
pub mod geodesy;
pub(crate) mod text;

pub use self::coordinates::{decode_latitude, decode_longitude};
pub use self::geodesy::{EARTH_RADIUS_KM, chord_distance, haversine};
