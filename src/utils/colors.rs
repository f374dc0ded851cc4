/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Alert color for a pest count:
/// over threshold → red
/// otherwise → reset
pub fn color_for_count(high_risk: bool) -> &'static str {
    if high_risk { RED } else { RESET }
}

/// Online/offline indicator color.
pub fn color_for_status(online: bool) -> &'static str {
    if online { GREEN } else { GREY }
}
