//! Layout constants shared by the standalone bar and the dashboard.

/// Character repeated for the filled part of a bar.
pub const FILL_CHAR: char = '=';

/// Cap drawn after the fill, even at 0%.
pub const CAP_CHAR: char = '>';

/// Columns reserved next to a standalone bar for the label, brackets and
/// percentage text (`" Progress: [" + "] " + "100%"` plus one spare column).
pub const STANDALONE_LABEL_RESERVE: usize = 19;

/// Columns reserved next to a dashboard bar (`": [" + "] " + "100%"` plus one
/// spare column).
pub const DASHBOARD_LABEL_RESERVE: usize = 10;

/// Smallest bar width ever produced by automatic sizing.
pub const MIN_BAR_WIDTH: usize = 1;

/// Viewport row of the dashboard header.
pub const HEADER_ROW: u16 = 2;

/// Viewport row of the first dashboard attribute.
pub const FIRST_ATTRIBUTE_ROW: u16 = 4;

/// Default standalone bar name.
pub const DEFAULT_BAR_NAME: &str = "Process";

/// Default standalone bar maximum.
pub const DEFAULT_MAX_VALUE: i64 = 100;

/// Default dashboard header.
pub const DEFAULT_HEADER: &str = "My Advanced Status Window";

/// Sentinel width requesting automatic sizing from the terminal.
pub const AUTO_WIDTH: i64 = -1;
