mod fix_record;
mod flight;
mod summary;

pub use fix_record::*;
pub use flight::*;
pub use summary::*;
