/// Crate-local processing settings

/// Lines parsed between progress bar updates
pub const PROGRESS_TICK: usize = 10_000;

/// Files with fewer data lines than this get no progress bar
pub const PROGRESS_MIN_LINES: usize = 50_000;

pub const PROGRESS_TEMPLATE: &str = "[{bar:40.green/blue}] {pos}/{len} lines ({percent}%) {msg}";

pub const PROGRESS_CHARS: &str = "▉▊▋▌▍▎▏ ";

/// Render manifest filename written next to the data files
pub const MANIFEST_FILE_NAME: &str = "level_manifest.json";
