//! Commonly used types for ease of import.

pub use crate::{
    board_has_move, BoardConfig, BoardEngine, BoardError, BoardEvent, ClassificationThresholds,
    Color, Coord, Kind, Phase, SizeRange, TapOutcome,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
