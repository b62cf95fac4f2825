//! Plain-text board dump for logs and the CLI.
//!
//! Each cell prints as its color symbol followed by a kind marker:
//! blank for `Normal`, `*` Rocket, `#` Bomb, `@` Portal. Empty cells print `.`.

use core::fmt;

use crate::grid::Grid;
use crate::token::Kind;

fn kind_marker(kind: Kind) -> char {
    match kind {
        Kind::Normal => ' ',
        Kind::Rocket => '*',
        Kind::Bomb => '#',
        Kind::Portal => '@',
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.columns() {
            write!(f, " {:<2}", c)?;
        }
        writeln!(f)?;
        for r in 0..self.rows() {
            write!(f, "{:2} ", r)?;
            for c in 0..self.columns() {
                match self.token_at(r, c).map_err(|_| fmt::Error)? {
                    Some(t) => write!(f, " {}{}", t.color().symbol(), kind_marker(t.kind()))?,
                    None => write!(f, " . ")?,
                }
            }
            if r + 1 < self.rows() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
