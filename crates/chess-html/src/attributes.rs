//! Per-square render attribute derivation.

use shakmaty::{Piece, Position, Role, Square};

use crate::options::RenderOptions;

/// The independent render attributes of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareAttributes {
    /// Piece occupying the square, if any.
    pub piece: Option<Piece>,
    /// Square carries the selection overlay.
    pub selected: bool,
    /// Square is the origin or destination of the last move.
    pub last_move: bool,
    /// Square renders the check highlight.
    pub check: bool,
}

/// Derives the render attributes for one square.
///
/// The attributes are independent of each other and of every other square,
/// so a full board render is 64 calls to this function.
///
/// Check marking has two paths. An explicit square in
/// [`RenderOptions::check`] wins; without one, the square is marked when it
/// holds the side to move's king and the position reports check. An empty
/// square is never marked, even when it equals the explicit square.
#[must_use]
pub fn square_attributes<P: Position>(
    pos: &P,
    square: Square,
    options: &RenderOptions,
) -> SquareAttributes {
    let piece = pos.board().piece_at(square);

    let check = match options.check {
        Some(marked) => piece.is_some() && square == marked,
        None => match piece {
            Some(p) => p.role == Role::King && p.color == pos.turn() && pos.is_check(),
            None => false,
        },
    };

    SquareAttributes {
        piece,
        selected: options.selected.contains(&square),
        last_move: options
            .last_move
            .as_ref()
            .is_some_and(|m| m.from() == Some(square) || m.to() == square),
        check,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::{fen::Fen, CastlingMode, Chess, Color, Move};

    /// White king on e1 in check from the queen on h4 (after 1. f3 e5 2. g4
    /// Qh4).
    const CHECKED: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

    fn position(fen: &str) -> Chess {
        fen.parse::<Fen>()
            .expect("valid FEN")
            .into_position(CastlingMode::Standard)
            .expect("legal position")
    }

    #[test]
    fn empty_square_has_no_attributes() {
        let attributes = square_attributes(&Chess::default(), Square::E4, &RenderOptions::new());
        assert_eq!(attributes.piece, None);
        assert!(!attributes.selected);
        assert!(!attributes.last_move);
        assert!(!attributes.check);
    }

    #[test]
    fn occupied_square_reports_piece() {
        let attributes = square_attributes(&Chess::default(), Square::E2, &RenderOptions::new());
        let piece = attributes.piece.expect("pawn on e2");
        assert_eq!(piece.role, Role::Pawn);
        assert_eq!(piece.color, Color::White);
    }

    #[test]
    fn selected_squares_are_flagged() {
        let options = RenderOptions {
            selected: vec![Square::E4, Square::D5],
            ..RenderOptions::new()
        };
        let pos = Chess::default();
        assert!(square_attributes(&pos, Square::E4, &options).selected);
        assert!(square_attributes(&pos, Square::D5, &options).selected);
        assert!(!square_attributes(&pos, Square::E5, &options).selected);
    }

    #[test]
    fn last_move_flags_origin_and_destination() {
        let options = RenderOptions {
            last_move: Some(Move::Normal {
                role: Role::Pawn,
                from: Square::E2,
                capture: None,
                to: Square::E4,
                promotion: None,
            }),
            ..RenderOptions::new()
        };
        let pos = Chess::default();
        assert!(square_attributes(&pos, Square::E2, &options).last_move);
        assert!(square_attributes(&pos, Square::E4, &options).last_move);
        assert!(!square_attributes(&pos, Square::E3, &options).last_move);
    }

    #[test]
    fn king_in_check_is_detected() {
        let pos = position(CHECKED);
        let options = RenderOptions::new();
        assert!(square_attributes(&pos, Square::E1, &options).check);
        // The opponent's king is not the one in check.
        assert!(!square_attributes(&pos, Square::E8, &options).check);
        // The checking queen is occupied but not a king of the side to move.
        assert!(!square_attributes(&pos, Square::H4, &options).check);
    }

    #[test]
    fn king_not_in_check_is_not_flagged() {
        let attributes = square_attributes(&Chess::default(), Square::E1, &RenderOptions::new());
        assert!(!attributes.check);
    }

    #[test]
    fn explicit_check_square_overrides_detection() {
        let pos = position(CHECKED);
        let options = RenderOptions {
            check: Some(Square::H4),
            ..RenderOptions::new()
        };
        assert!(square_attributes(&pos, Square::H4, &options).check);
        assert!(!square_attributes(&pos, Square::E1, &options).check);
    }

    #[test]
    fn explicit_check_on_empty_square_is_ignored() {
        let options = RenderOptions {
            check: Some(Square::D4),
            ..RenderOptions::new()
        };
        let attributes = square_attributes(&Chess::default(), Square::D4, &options);
        assert!(!attributes.check);
    }
}
