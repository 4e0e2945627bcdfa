//! Standalone document wrapper and the default stylesheet.

use askama::Template;

/// Stylesheet embedded in document mode when the caller supplies none.
///
/// Covers every class the board emits: the table itself, `light`/`dark`
/// shades, `lastmove` and `check` highlights, piece glyphs, and the
/// selection overlay.
pub const DEFAULT_STYLESHEET: &str = "\
.chess-board {
    border-collapse: collapse;
    font-family: 'DejaVu Sans', sans-serif;
}
.chess-board th {
    width: 1.5em;
    height: 1.5em;
    font-weight: normal;
    text-align: center;
}
.chess-board td {
    position: relative;
    width: 2em;
    height: 2em;
    text-align: center;
    vertical-align: middle;
}
.chess-board td.light { background: #f0d9b5; }
.chess-board td.dark { background: #b58863; }
.chess-board td.lastmove { background: #cdd26a; }
.chess-board td.check { background: #e06666; }
.chess-board .piece {
    font-size: 1.5em;
    line-height: 1;
}
.chess-board .overlay {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    color: #c02020;
    font-size: 1.25em;
    line-height: 1.6;
}
";

/// Document shell template: a minimal HTML5 page with exactly one `<style>`
/// block and the pre-rendered board table in its body.
#[derive(Template)]
#[template(path = "document.html")]
pub struct DocumentTemplate<'a> {
    stylesheet: &'a str,
    table: &'a str,
}

impl<'a> DocumentTemplate<'a> {
    #[must_use]
    pub fn new(table: &'a str, stylesheet: &'a str) -> Self {
        Self { stylesheet, table }
    }
}
