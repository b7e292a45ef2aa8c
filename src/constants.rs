// DOM hooks and loop tuning for the web frontend.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const HINT_OVERLAY_ID: &str = "hint-overlay";

// Media query used to pick the initial theme
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// Frame statistics are logged once per this many frames (debug level)
pub const FRAME_STATS_INTERVAL: u64 = 600;
