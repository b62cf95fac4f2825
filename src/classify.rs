//! Group-size classification into token kinds.

use alloc::vec::Vec;

use crate::common::{BoardError, ConfigError};
use crate::config::ClassificationThresholds;
use crate::event::{BoardEvent, EventSink};
use crate::grid::Grid;
use crate::matcher::MatchFinder;
use crate::token::Kind;

/// Maps group sizes to kinds and relabels the board.
#[derive(Debug)]
pub struct Classifier {
    thresholds: ClassificationThresholds,
    labelled: Vec<bool>,
    scratch: Vec<usize>,
}

impl Classifier {
    pub fn new(thresholds: ClassificationThresholds) -> Self {
        Self {
            thresholds,
            labelled: Vec::new(),
            scratch: Vec::new(),
        }
    }

    /// Kind for a group of `size` tokens.
    ///
    /// Ranges are tried in priority order; a size outside all of them is a
    /// configuration bug and is reported rather than defaulted.
    pub fn classify(&self, size: usize) -> Result<Kind, BoardError> {
        Kind::ALL
            .into_iter()
            .find(|&kind| self.thresholds.range(kind).contains(size))
            .ok_or(BoardError::Configuration(ConfigError::UncoveredSize { size }))
    }

    /// Relabel every filled cell with the kind of its group, scanning in
    /// column-major order. Returns the number of tokens whose kind changed.
    ///
    /// Each group is labelled once, from its first cell in scan order; every
    /// member of a group resolves to the same group, so the result equals a
    /// per-cell rescan.
    pub fn reclassify_board<S: EventSink>(
        &mut self,
        grid: &mut Grid,
        finder: &mut MatchFinder,
        sink: &mut S,
    ) -> Result<usize, BoardError> {
        self.labelled.clear();
        self.labelled.resize(grid.len(), false);
        let mut changed = 0;

        for col in 0..grid.columns() {
            for row in 0..grid.rows() {
                let start = grid.index_of(row, col);
                if self.labelled[start] || grid.slot(start).is_none() {
                    continue;
                }
                self.scratch.clear();
                self.scratch.extend_from_slice(finder.group_indices(grid, start));
                let kind = self.classify(self.scratch.len())?;

                for &idx in &self.scratch {
                    self.labelled[idx] = true;
                    let Some(token) = grid.slot_mut(idx) else {
                        continue;
                    };
                    if token.kind() != kind {
                        token.set_kind(kind);
                        changed += 1;
                        sink.emit(BoardEvent::KindChanged {
                            cell: grid.coord_of(idx),
                            kind,
                        });
                    }
                }
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SizeRange;

    #[test]
    fn default_ranges() {
        let c = Classifier::new(ClassificationThresholds::default());
        assert_eq!(c.classify(1).unwrap(), Kind::Normal);
        assert_eq!(c.classify(4).unwrap(), Kind::Normal);
        assert_eq!(c.classify(5).unwrap(), Kind::Rocket);
        assert_eq!(c.classify(7).unwrap(), Kind::Rocket);
        assert_eq!(c.classify(8).unwrap(), Kind::Bomb);
        assert_eq!(c.classify(10).unwrap(), Kind::Portal);
        assert_eq!(c.classify(90).unwrap(), Kind::Portal);
    }

    #[test]
    fn boundary_value_is_a_configuration_error() {
        let c = Classifier::new(ClassificationThresholds {
            normal: SizeRange::new(0, 5),
            rocket: SizeRange::new(5, 8),
            ..ClassificationThresholds::default()
        });
        assert_eq!(
            c.classify(5),
            Err(BoardError::Configuration(ConfigError::UncoveredSize { size: 5 }))
        );
    }
}
