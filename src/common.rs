//! Common types for the match engine: error taxonomy and move outcomes.

use crate::grid::Coord;
use crate::token::Kind;

/// Result of a tap request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tapped cell was empty; nothing happened.
    Ignored,
    /// The tapped token has no same-colored neighbor.
    Invalid { cell: Coord },
    /// A group was removed and the board refilled.
    Cleared {
        removed: usize,
        spawned: usize,
        reshuffled: bool,
    },
}

/// Errors detected while validating a [`crate::BoardConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Rows or columns is zero.
    ZeroDimension { rows: usize, columns: usize },
    /// `rows * columns` does not fit in `usize`.
    TooLarge { rows: usize, columns: usize },
    /// Fewer than two colors makes every board trivially matchable.
    TooFewColors(u8),
    /// More colors than the palette defines.
    TooManyColors(u8),
    /// A range with `lower + 1 >= upper` can never contain a size.
    EmptyRange { kind: Kind },
    /// A reachable group size falls in none of the ranges.
    UncoveredSize { size: usize },
    /// A reachable group size falls in more than one range.
    OverlappingRanges { size: usize, first: Kind, second: Kind },
    /// Layout matrix does not match the configured dimensions.
    LayoutShape {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// Layout uses a color outside the configured palette.
    LayoutColor { row: usize, col: usize, color: u8 },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroDimension { rows, columns } => {
                write!(f, "grid must have at least one cell (got {}x{})", rows, columns)
            }
            ConfigError::TooLarge { rows, columns } => {
                write!(f, "grid of {}x{} cells is too large", rows, columns)
            }
            ConfigError::TooFewColors(n) => write!(f, "at least 2 colors are required, got {}", n),
            ConfigError::TooManyColors(n) => write!(
                f,
                "palette supports at most {} colors, got {}",
                crate::config::MAX_COLOR_COUNT,
                n
            ),
            ConfigError::EmptyRange { kind } => write!(f, "{} range contains no group size", kind),
            ConfigError::UncoveredSize { size } => {
                write!(f, "group size {} is not covered by any range", size)
            }
            ConfigError::OverlappingRanges { size, first, second } => write!(
                f,
                "group size {} is covered by both {} and {} ranges",
                size, first, second
            ),
            ConfigError::LayoutShape { expected, found } => write!(
                f,
                "layout is {}x{}, expected {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            ConfigError::LayoutColor { row, col, color } => write!(
                f,
                "layout cell ({}, {}) uses color {} outside the palette",
                row, col, color
            ),
        }
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the grid.
    OutOfRange { row: usize, col: usize },
    /// Invalid configuration or classification thresholds.
    Configuration(ConfigError),
    /// A move is still resolving.
    Busy,
}

impl From<ConfigError> for BoardError {
    fn from(err: ConfigError) -> Self {
        BoardError::Configuration(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfRange { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the grid", row, col)
            }
            BoardError::Configuration(e) => write!(f, "Configuration error: {}", e),
            BoardError::Busy => write!(f, "A move is still resolving"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
