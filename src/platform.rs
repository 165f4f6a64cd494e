//! Platform-specific configuration

/// Submit shortcut display for the status bar.
/// Ctrl+S works on all platforms.
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
