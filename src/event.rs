//! Outbound notifications for the presentation layer.

use alloc::vec::Vec;

use crate::grid::Coord;
use crate::token::{Kind, TokenInfo};

/// Something the presentation layer may want to animate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardEvent {
    /// A group was cleared.
    TokensRemoved { cells: Vec<Coord> },
    /// A token changed cells (gravity or shuffle).
    TokenMoved { token: TokenInfo, from: Coord, to: Coord },
    /// A new token was placed.
    TokenSpawned { cell: Coord, token: TokenInfo },
    /// A forced match repainted a token in place.
    TokenRecolored { cell: Coord, token: TokenInfo },
    /// Group size relabelled a token.
    KindChanged { cell: Coord, kind: Kind },
    /// The tapped token has no partner.
    InvalidMoveAttempted { cell: Coord },
    /// A random shuffle plus forced matches were applied.
    BoardReshuffled,
    /// Too few adjacent tokens remain to guarantee a move.
    DegenerateBoard { filled: usize },
}

/// Receiver of [`BoardEvent`]s.
pub trait EventSink {
    fn emit(&mut self, event: BoardEvent);
}

impl EventSink for Vec<BoardEvent> {
    fn emit(&mut self, event: BoardEvent) {
        self.push(event);
    }
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: BoardEvent) {}
}
