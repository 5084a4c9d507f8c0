//! Events - all user input the wizard reacts to

/// Input events, one at a time
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    // ===== Navigation =====
    /// Move the selection cursor up / focus the previous field
    Up,
    /// Move the selection cursor down / focus the next field
    Down,
    /// Tab
    NextField,
    /// Shift+Tab
    PrevField,

    // ===== Editing =====
    /// Character typed into the focused field
    Input(char),
    Backspace,

    // ===== Commands =====
    /// Enter: select the highlighted entry or submit the sub-form
    Confirm,
    /// Esc: abandon the sub-form and go back to its selection screen.
    /// On a selection screen this quits.
    Back,
    /// Leave without producing a payload
    Quit,

    // ===== System =====
    /// Terminal resized
    Resize { width: u16, height: u16 },
    /// Cursor blink interval elapsed
    Tick,
    /// Unmapped terminal input
    Ignored,
}
