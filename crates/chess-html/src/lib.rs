//! HTML rendering for chess positions.
//!
//! This crate turns a [`shakmaty`] position into an HTML board: one
//! `<table>` with a cell per square, optionally wrapped in a standalone
//! document with an embedded stylesheet. It is pure presentation glue with
//! no chess logic of its own:
//! - [`render`] and [`render_fen`] are the entry points
//! - [`RenderOptions`] selects orientation, coordinate labels, highlights,
//!   and snippet vs. document output
//! - [`square_attributes`] exposes the per-square highlight derivation

mod attributes;
mod board;
mod document;
mod options;
mod render;

pub use attributes::{square_attributes, SquareAttributes};
pub use board::{BoardTemplate, PieceView};
pub use document::{DocumentTemplate, DEFAULT_STYLESHEET};
pub use options::RenderOptions;
pub use render::{render, render_fen, RenderError};
