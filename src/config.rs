pub const DEFAULT_OUTPUT_PATH: &str = "timelapse.sqlite";
pub const DEFAULT_INCREMENT_MINUTES: &str = "1";

pub const DAY_FORMAT: &str = "%Y%m%d";
pub const CLOCK_FORMAT: &str = "%H:%M";
pub const TIME_OF_DAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const POLYGONS_TABLE: &str = "service_area_polygons";
pub const TIME_FIELD: &str = "TimeOfDay";
pub const TIME_FIELD_TYPE: &str = "DATETIME";
/// Declared types an existing time field may keep.
pub const DATE_FIELD_TYPES: &[&str] = &["DATE", "DATETIME", "TIMESTAMP"];

/// Flag appended to the solver command line, followed by the instant to solve for.
pub const TIME_OF_DAY_FLAG: &str = "--time-of-day";

pub const LOG_ENV_VAR: &str = "RUST_LOG";
