//! HTML table template for the board grid.
//!
//! The grid is built from plain view structs: one [`RowView`] per rank, one
//! [`CellView`] per square, each carrying pre-composed CSS classes and the
//! optional piece glyph. The askama template only iterates and substitutes.

use askama::Template;

use shakmaty::{Color, File, Piece, Position, Rank, Role, Square};

use crate::attributes::square_attributes;
use crate::options::RenderOptions;

/// A piece prepared for display: CSS vocabulary plus the unicode glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceView {
    /// Lowercase English piece name, used as a CSS class.
    pub name: &'static str,
    /// Color name, used as a CSS class.
    pub color: &'static str,
    /// Unicode chess piece symbol.
    pub symbol: char,
}

impl PieceView {
    #[must_use]
    pub fn new(piece: Piece) -> Self {
        Self {
            name: role_name(piece.role),
            color: color_name(piece.color),
            symbol: piece_symbol(piece),
        }
    }
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CellView {
    /// Stable per-square identifier, the square's algebraic name.
    id: String,
    /// Space-separated CSS classes: shade first, then highlights.
    classes: String,
    piece: Option<PieceView>,
    selected: bool,
}

impl CellView {
    fn new<P: Position>(pos: &P, square: Square, options: &RenderOptions) -> Self {
        let attributes = square_attributes(pos, square, options);

        let mut classes = String::from(if square.is_dark() { "dark" } else { "light" });
        if attributes.last_move {
            classes.push_str(" lastmove");
        }
        if attributes.check {
            classes.push_str(" check");
        }

        Self {
            id: square.to_string(),
            classes,
            piece: attributes.piece.map(PieceView::new),
            selected: attributes.selected,
        }
    }
}

/// One rank of the table with its label.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RowView {
    rank: char,
    cells: Vec<CellView>,
}

/// Board table template.
///
/// Renders the 8x8 grid as a single `<table>` with one `<td>` per square,
/// optional `<thead>`/`<tfoot>` file labels, and optional rank labels on
/// both sides of every row.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    coordinates: bool,
    files: [char; 8],
    rows: Vec<RowView>,
}

impl BoardTemplate {
    /// Builds the table view for a position under the given options.
    ///
    /// Ranks run 8 down to 1, or 1 down to 8 when flipped. Files always run
    /// a to h; flipping reverses ranks only.
    #[must_use]
    pub fn new<P: Position>(pos: &P, options: &RenderOptions) -> Self {
        let mut ranks = Rank::ALL;
        if !options.flipped {
            ranks.reverse();
        }

        let rows = ranks
            .iter()
            .map(|&rank| RowView {
                rank: rank.char(),
                cells: File::ALL
                    .iter()
                    .map(|&file| CellView::new(pos, Square::from_coords(file, rank), options))
                    .collect(),
            })
            .collect();

        Self {
            coordinates: options.coordinates,
            files: File::ALL.map(|file| file.char()),
            rows,
        }
    }
}

/// Lowercase English name of a piece type.
const fn role_name(role: Role) -> &'static str {
    match role {
        Role::Pawn => "pawn",
        Role::Knight => "knight",
        Role::Bishop => "bishop",
        Role::Rook => "rook",
        Role::Queen => "queen",
        Role::King => "king",
    }
}

/// Color name of a piece.
const fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// Unicode chess symbol for a piece.
const fn piece_symbol(piece: Piece) -> char {
    match (piece.color, piece.role) {
        (Color::White, Role::King) => '\u{2654}',
        (Color::White, Role::Queen) => '\u{2655}',
        (Color::White, Role::Rook) => '\u{2656}',
        (Color::White, Role::Bishop) => '\u{2657}',
        (Color::White, Role::Knight) => '\u{2658}',
        (Color::White, Role::Pawn) => '\u{2659}',
        (Color::Black, Role::King) => '\u{265A}',
        (Color::Black, Role::Queen) => '\u{265B}',
        (Color::Black, Role::Rook) => '\u{265C}',
        (Color::Black, Role::Bishop) => '\u{265D}',
        (Color::Black, Role::Knight) => '\u{265E}',
        (Color::Black, Role::Pawn) => '\u{265F}',
    }
}
