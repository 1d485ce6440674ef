//! The fixed color palette.
//!
//! Palette order is the candidate order of the search: `Red`, `Green`,
//! `Blue`, `Yellow`. "Uncolored" is not a palette member; an unassigned
//! region holds `None`, so it can never be offered as a candidate.

/// Number of colors in the palette.
pub const PALETTE_SIZE: usize = 4;

/// Display string for a region that was never assigned.
pub const UNCOLORED_NAME: &str = "Sem cor";

/// A palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    /// All colors in candidate order.
    pub const ALL: [Color; PALETTE_SIZE] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Zero-based position in [`Color::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Yellow => 3,
        }
    }

    /// Inverse of [`Color::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < PALETTE_SIZE {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Name printed in result lines.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Red => "Vermelho",
            Self::Green => "Verde",
            Self::Blue => "Azul",
            Self::Yellow => "Amarelo",
        }
    }

    /// Stable lowercase identifier used in machine-readable reports.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Display string for an assignment, including the uncolored case.
#[must_use]
pub fn display_name(color: Option<Color>) -> &'static str {
    color.map_or(UNCOLORED_NAME, Color::display_name)
}
