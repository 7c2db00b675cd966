pub mod domain;
pub mod utils;

pub use domain::year::{is_leap_year, Year};
pub use utils::error::{LeapYearError, Result};
pub use utils::logger::init_logger;
