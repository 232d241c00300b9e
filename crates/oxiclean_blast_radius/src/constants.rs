//! Constants shared by the graph builder, ranker and CLI defaults.

/// Substring that marks a module as third-party vendor code
pub const VENDOR_MARKER: &str = "node_modules";

/// Report progress every this many ranked modules
pub const PROGRESS_INTERVAL: usize = 1000;

/// Module names longer than this are shortened in the console table
pub const MAX_DISPLAY_NAME_LEN: usize = 60;

pub const DEFAULT_INPUT: &str = "preview-stats.json";
pub const DEFAULT_OUTPUT: &str = "dependency_analysis.json";
pub const DEFAULT_TOP: &str = "20";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_len_leaves_room_for_ellipsis() {
        assert!(MAX_DISPLAY_NAME_LEN > 3);
    }

    #[test]
    fn test_default_top_parses() {
        assert_eq!(DEFAULT_TOP.parse::<usize>().unwrap(), 20);
    }
}
