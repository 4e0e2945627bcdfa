//! Rendering entry points.

use askama::Template;
use shakmaty::{
    fen::{Fen, ParseFenError},
    CastlingMode, Chess, Position, PositionError,
};
use thiserror::Error;

use crate::board::BoardTemplate;
use crate::document::{DocumentTemplate, DEFAULT_STYLESHEET};
use crate::options::RenderOptions;

/// Errors surfaced by the rendering entry points.
///
/// Rendering is total for well-formed inputs; `Template` only covers the
/// formatting plumbing. The FEN variants come from [`render_fen`].
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template expansion failed.
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
    /// The FEN string could not be parsed.
    #[error("invalid FEN: {0}")]
    Fen(#[from] ParseFenError),
    /// The FEN parsed but does not describe a legal position.
    #[error("illegal position: {0}")]
    Position(#[from] PositionError<Chess>),
}

/// Renders a position as an HTML board.
///
/// Produces a full standalone document with an embedded stylesheet, or with
/// [`RenderOptions::snippet`] just the bare `<table>` for embedding into an
/// existing page. The position and options are borrowed for the duration of
/// the call; the same inputs always produce the same output.
///
/// # Examples
///
/// ```
/// use chess_html::{render, RenderOptions};
/// use shakmaty::Chess;
///
/// let html = render(&Chess::default(), &RenderOptions::new())?;
/// assert!(html.contains("<table class=\"chess-board\">"));
/// # Ok::<(), chess_html::RenderError>(())
/// ```
pub fn render<P: Position>(pos: &P, options: &RenderOptions) -> Result<String, RenderError> {
    let table = BoardTemplate::new(pos, options).render()?;
    if options.snippet {
        return Ok(table);
    }
    let stylesheet = options.stylesheet.as_deref().unwrap_or(DEFAULT_STYLESHEET);
    Ok(DocumentTemplate::new(&table, stylesheet).render()?)
}

/// Parses a FEN and renders the resulting position.
///
/// Convenience wrapper around [`render`] for callers holding a position as
/// text. Parsing and legality checking stay in the rules library; their
/// errors are forwarded as [`RenderError::Fen`] and [`RenderError::Position`].
///
/// # Examples
///
/// ```
/// use chess_html::{render_fen, RenderOptions};
///
/// let html = render_fen(
///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
///     &RenderOptions::new(),
/// )?;
/// assert!(html.contains("id=\"e1\""));
/// # Ok::<(), chess_html::RenderError>(())
/// ```
pub fn render_fen(fen: &str, options: &RenderOptions) -> Result<String, RenderError> {
    let position: Chess = fen.parse::<Fen>()?.into_position(CastlingMode::Standard)?;
    render(&position, options)
}
