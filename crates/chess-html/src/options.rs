//! Rendering options.

use shakmaty::{Move, Square};

/// Options for a single board render.
///
/// A plain value object: construct one, adjust the public fields, pass it to
/// [`render`](crate::render). Nothing is retained between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Squares marked with the attack/selection overlay.
    pub selected: Vec<Square>,
    /// Render with rank 1 at the top instead of rank 8.
    ///
    /// Flipping reverses the rank order only; files stay a to h, left to
    /// right.
    pub flipped: bool,
    /// Surround the board with rank and file labels.
    pub coordinates: bool,
    /// Move whose origin and destination squares get the `lastmove` class.
    pub last_move: Option<Move>,
    /// Explicit square to mark as in check, overriding the built-in king
    /// detection. Only an occupied square renders the `check` class.
    pub check: Option<Square>,
    /// Emit the bare `<table>` instead of a full HTML document.
    pub snippet: bool,
    /// Custom stylesheet for document mode. Falls back to
    /// [`DEFAULT_STYLESHEET`](crate::DEFAULT_STYLESHEET) when unset.
    pub stylesheet: Option<String>,
}

impl RenderOptions {
    /// Creates options with the defaults: coordinates on, white at the
    /// bottom, no highlights, full document output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: Vec::new(),
            flipped: false,
            coordinates: true,
            last_move: None,
            check: None,
            snippet: false,
            stylesheet: None,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}
