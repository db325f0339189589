//! Token colors.
//!
//! ## ColorId
//!
//! Colors are identified by a 1-based id. Id `n` names the `n`-th entry of
//! the [`Palette`]. The engine only compares ids for equality; there is no
//! color-specific behavior.
//!
//! ## Palette
//!
//! The ordered list of color names. The default palette has ten colors.

use serde::{Deserialize, Serialize};

/// Color names of the standard palette, in id order (Red is id 1).
pub const STANDARD_COLORS: [&str; 10] = [
    "Red", "Yellow", "Purple", "Orange", "Green", "Cyan", "Pink", "Blue", "Brown", "Magenta",
];

/// 1-based color identifier.
///
/// ```
/// use lucky_board::core::ColorId;
///
/// let red = ColorId::new(1);
/// assert_eq!(red.index(), 0);
/// assert_eq!(ColorId::from_index(0), red);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColorId(u8);

impl ColorId {
    /// Create a color id. Ids start at 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id > 0, "Color ids start at 1");
        Self(id)
    }

    /// Color id for a 0-based palette position.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new(index as u8 + 1)
    }

    /// Get the raw 1-based id.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Position of this color in the palette (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl std::fmt::Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

/// Ordered color names, bijective with ids `1..=len`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    names: Vec<String>,
}

impl Palette {
    /// Create a palette from color names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        assert!(!names.is_empty(), "Palette must have at least 1 color");
        assert!(names.len() <= 255, "At most 255 colors supported");
        Self { names }
    }

    /// The ten-color palette used by the game.
    pub fn standard() -> Self {
        Self::new(STANDARD_COLORS)
    }

    /// Number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Palettes are never empty; provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of a color, `None` if the id is outside the palette.
    #[must_use]
    pub fn name(&self, color: ColorId) -> Option<&str> {
        self.names.get(color.index()).map(String::as_str)
    }

    /// All names in id order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Check whether an id belongs to this palette.
    #[must_use]
    pub fn contains(&self, color: ColorId) -> bool {
        color.index() < self.names.len()
    }

    /// Iterate over every color id in order.
    pub fn colors(&self) -> impl Iterator<Item = ColorId> {
        (0..self.names.len()).map(ColorId::from_index)
    }
}
