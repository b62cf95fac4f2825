//! Token definitions: palette colors, size-derived kinds and the token itself.

use core::fmt;

/// A palette entry. Colors compare by index only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(u8);

impl Color {
    pub const RED: Color = Color(0);
    pub const BLUE: Color = Color(1);
    pub const GREEN: Color = Color(2);
    pub const YELLOW: Color = Color(3);
    pub const PURPLE: Color = Color(4);
    pub const PINK: Color = Color(5);

    /// Create a color from its palette index.
    pub const fn new(index: u8) -> Self {
        Color(index)
    }

    /// Palette index of this color.
    pub fn index(&self) -> u8 {
        self.0
    }

    /// Single character used by the text renderer.
    pub fn symbol(&self) -> char {
        match self.0 {
            0 => 'R',
            1 => 'B',
            2 => 'G',
            3 => 'Y',
            4 => 'P',
            5 => 'K',
            n if n < 26 => (b'a' + n) as char,
            _ => '?',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::RED => write!(f, "red"),
            Color::BLUE => write!(f, "blue"),
            Color::GREEN => write!(f, "green"),
            Color::YELLOW => write!(f, "yellow"),
            Color::PURPLE => write!(f, "purple"),
            Color::PINK => write!(f, "pink"),
            Color(n) => write!(f, "color#{}", n),
        }
    }
}

/// Label attached to every member of a group according to the group's size.
///
/// Kinds carry no removal behavior of their own; the presentation layer uses
/// them to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    #[default]
    Normal,
    Rocket,
    Bomb,
    Portal,
}

impl Kind {
    /// All kinds in classification priority order.
    pub const ALL: [Kind; 4] = [Kind::Normal, Kind::Rocket, Kind::Bomb, Kind::Portal];

    pub fn name(&self) -> &'static str {
        match self {
            Kind::Normal => "Normal",
            Kind::Rocket => "Rocket",
            Kind::Bomb => "Bomb",
            Kind::Portal => "Portal",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque identity the presentation layer binds a visual instance to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenId(u64);

impl TokenId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// A colored token occupying at most one cell.
///
/// Not `Clone`: a token is moved between cells, never duplicated. Snapshots
/// handed out through events use [`TokenInfo`].
#[derive(Debug, PartialEq, Eq)]
pub struct Token {
    id: TokenId,
    color: Color,
    kind: Kind,
}

impl Token {
    // Only the factory mints tokens, so ids stay unique.
    pub(crate) fn new(id: TokenId, color: Color) -> Self {
        Self {
            id,
            color,
            kind: Kind::Normal,
        }
    }

    pub fn id(&self) -> TokenId {
        self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Copyable view of this token for events and assertions.
    pub fn info(&self) -> TokenInfo {
        TokenInfo {
            id: self.id,
            color: self.color,
            kind: self.kind,
        }
    }

    pub(crate) fn set_kind(&mut self, kind: Kind) {
        self.kind = kind;
    }

    // Forced matches repaint in place so the visual instance survives.
    pub(crate) fn repaint(&mut self, color: Color) {
        self.color = color;
    }
}

/// Plain-data copy of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenInfo {
    pub id: TokenId,
    pub color: Color,
    pub kind: Kind,
}

/// Hands out fresh token identities.
#[derive(Debug, Default)]
pub struct TokenFactory {
    next: u64,
}

impl TokenFactory {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Create a `Normal` token of `color` with a never-before-used id.
    pub fn make(&mut self, color: Color) -> Token {
        let id = TokenId(self.next);
        self.next += 1;
        Token::new(id, color)
    }
}
