//! Board configuration: dimensions, palette, classification ranges and the
//! optional authored layout.

use alloc::vec::Vec;

use crate::common::ConfigError;
use crate::token::{Color, Kind};

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLUMNS: usize = 9;
pub const DEFAULT_COLOR_COUNT: u8 = 6;
/// Size of the named palette.
pub const MAX_COLOR_COUNT: u8 = 6;

/// Open interval `(lower, upper)`: a size matches when `lower < size < upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeRange {
    pub lower: usize,
    pub upper: usize,
}

impl SizeRange {
    pub const fn new(lower: usize, upper: usize) -> Self {
        Self { lower, upper }
    }

    /// Range with no upper bound.
    pub const fn above(lower: usize) -> Self {
        Self {
            lower,
            upper: usize::MAX,
        }
    }

    pub fn contains(&self, size: usize) -> bool {
        self.lower < size && size < self.upper
    }

    fn is_empty(&self) -> bool {
        self.lower.saturating_add(1) >= self.upper
    }
}

/// The four group-size ranges, one per [`Kind`], checked in `Kind::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassificationThresholds {
    pub normal: SizeRange,
    pub rocket: SizeRange,
    pub bomb: SizeRange,
    pub portal: SizeRange,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            normal: SizeRange::new(0, 5),
            rocket: SizeRange::new(4, 8),
            bomb: SizeRange::new(7, 10),
            portal: SizeRange::above(9),
        }
    }
}

impl ClassificationThresholds {
    pub fn range(&self, kind: Kind) -> SizeRange {
        match kind {
            Kind::Normal => self.normal,
            Kind::Rocket => self.rocket,
            Kind::Bomb => self.bomb,
            Kind::Portal => self.portal,
        }
    }

    /// Check that every size in `1..=max_group` lies strictly inside exactly
    /// one range.
    pub fn validate(&self, max_group: usize) -> Result<(), ConfigError> {
        for kind in Kind::ALL {
            if self.range(kind).is_empty() {
                return Err(ConfigError::EmptyRange { kind });
            }
        }
        for size in 1..=max_group {
            let mut hit: Option<Kind> = None;
            for kind in Kind::ALL {
                if !self.range(kind).contains(size) {
                    continue;
                }
                if let Some(first) = hit {
                    return Err(ConfigError::OverlappingRanges {
                        size,
                        first,
                        second: kind,
                    });
                }
                hit = Some(kind);
            }
            if hit.is_none() {
                return Err(ConfigError::UncoveredSize { size });
            }
        }
        Ok(())
    }
}

/// Authored initial contents, row-major, `None` for an empty cell.
pub type Layout = Vec<Vec<Option<Color>>>;

/// Everything needed to build a [`crate::BoardEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
    pub color_count: u8,
    pub thresholds: ClassificationThresholds,
    /// Seed for the engine generator; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub layout: Option<Layout>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            color_count: DEFAULT_COLOR_COUNT,
            thresholds: ClassificationThresholds::default(),
            seed: None,
            layout: None,
        }
    }
}

impl BoardConfig {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    pub fn with_colors(mut self, color_count: u8) -> Self {
        self.color_count = color_count;
        self
    }

    pub fn with_thresholds(mut self, thresholds: ClassificationThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use an authored layout; its shape becomes the board size.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.rows = layout.len();
        self.columns = layout.first().map_or(0, Vec::len);
        self.layout = Some(layout);
        self
    }

    /// Largest group the board can ever hold, `None` if the cell count
    /// overflows.
    pub fn max_group_size(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Validate eagerly so configuration mistakes never surface mid-game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::ZeroDimension {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.color_count < 2 {
            return Err(ConfigError::TooFewColors(self.color_count));
        }
        if self.color_count > MAX_COLOR_COUNT {
            return Err(ConfigError::TooManyColors(self.color_count));
        }
        if let Some(layout) = &self.layout {
            self.validate_layout(layout)?;
        }
        let max_group = self.max_group_size().ok_or(ConfigError::TooLarge {
            rows: self.rows,
            columns: self.columns,
        })?;
        self.thresholds.validate(max_group)
    }

    fn validate_layout(&self, layout: &Layout) -> Result<(), ConfigError> {
        let expected = (self.rows, self.columns);
        if layout.len() != self.rows {
            return Err(ConfigError::LayoutShape {
                expected,
                found: (layout.len(), layout.first().map_or(0, Vec::len)),
            });
        }
        for (row, line) in layout.iter().enumerate() {
            if line.len() != self.columns {
                return Err(ConfigError::LayoutShape {
                    expected,
                    found: (layout.len(), line.len()),
                });
            }
            for (col, cell) in line.iter().enumerate() {
                if let Some(color) = cell {
                    if color.index() >= self.color_count {
                        return Err(ConfigError::LayoutColor {
                            row,
                            col,
                            color: color.index(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
