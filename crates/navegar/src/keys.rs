//! WebDriver key codepoints for `send_keys`.

/// Enter
pub const ENTER: &str = "\u{E007}";
/// Tab
pub const TAB: &str = "\u{E004}";
/// Escape
pub const ESCAPE: &str = "\u{E00C}";
/// Backspace
pub const BACKSPACE: &str = "\u{E003}";
/// Space
pub const SPACE: &str = " ";
/// Arrow up
pub const ARROW_UP: &str = "\u{E013}";
/// Arrow down
pub const ARROW_DOWN: &str = "\u{E015}";
/// Arrow left
pub const ARROW_LEFT: &str = "\u{E012}";
/// Arrow right
pub const ARROW_RIGHT: &str = "\u{E014}";
