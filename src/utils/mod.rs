pub mod constants;
pub mod filename;
pub mod logging;

pub use constants::*;
pub use filename::{station_file_name, station_output_path, station_url};
pub use logging::setup_logging;
