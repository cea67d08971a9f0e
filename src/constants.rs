//! Application constants for the CTD processor
//!
//! Section markers, positional field indices and output column names of the
//! CTD cast export format, plus processing defaults.

// =============================================================================
// Cast File Markers
// =============================================================================

/// Line prefix separating one cast from the next: `#` followed by 80 dashes
pub const SECTION_DELIMITER: &str =
    "#--------------------------------------------------------------------------------";

/// Token that opens the variables (measurement) section of a cast
pub const VARIABLES_MARKER: &str = "VARIABLES";

/// Token that closes the variables section of a cast
pub const END_OF_VARIABLES_MARKER: &str = "END OF VARIABLES SECTION";

// =============================================================================
// Field Positions
// =============================================================================

/// Index of the value in a `key, unit, value` metadata line
pub const METADATA_VALUE_INDEX: usize = 2;

/// Positional columns of a variables-section line.
///
/// The export lays each measurement out as `value, flag, originator flag`
/// triplets after a leading row counter, and no header is consulted:
///
/// ```text
/// 0: row   1: depth (m)   2-3: depth flags
///          4: temperature (degC)   5-6: temperature flags
///          7: salinity (PSS)   8..: further variables
/// ```
pub mod variable_columns {
    pub const DEPTH: usize = 1;
    pub const TEMPERATURE: usize = 4;
    pub const SALINITY: usize = 7;

    /// A variables line needs more fields than this to be considered at all
    pub const MIN_FIELDS_EXCLUSIVE: usize = 3;
}

// =============================================================================
// Metadata Keys and Output Columns
// =============================================================================

/// Metadata labels copied onto every flat row
pub mod metadata_keys {
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";
    pub const YEAR: &str = "Year";
    pub const MONTH: &str = "Month";
    pub const DAY: &str = "Day";
}

/// Output column order of a flat row
pub const OUTPUT_COLUMNS: [&str; 8] = [
    "Latitude",
    "Longitude",
    "Year",
    "Month",
    "Day",
    "Depth",
    "Temperature",
    "Salinity",
];

// =============================================================================
// Processing Defaults
// =============================================================================

/// File name pattern used when scanning an input directory
pub const DEFAULT_FILE_PATTERN: &str = "*.csv";

/// Output directory created beside the input when no output path is given
pub const DEFAULT_OUTPUT_DIR: &str = "parsed";

/// Output file stem used when no output path is given
pub const DEFAULT_OUTPUT_STEM: &str = "parsed_data";

/// Timestamp appended to an output name that already exists
pub const COLLISION_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
