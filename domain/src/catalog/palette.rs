//! Color palettes

use crate::core::random::pick;
use crate::theme::Theme;
use rand::Rng;
use serde::Serialize;

/// A named set of colors, always selected as a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPalette {
    pub name: &'static str,
    pub colors: [&'static str; 4],
}

impl ColorPalette {
    /// Colors joined for prompt text (`"#FF006E, #FB5607, ..."`)
    pub fn joined(&self) -> String {
        self.colors.join(", ")
    }
}

pub const CYBERPUNK: ColorPalette = ColorPalette {
    name: "Cyberpunk",
    colors: ["#FF006E", "#FB5607", "#FFBE0B", "#8338EC"],
};
pub const OCEAN: ColorPalette = ColorPalette {
    name: "Ocean",
    colors: ["#0077B6", "#00B4D8", "#90E0EF", "#CAF0F8"],
};
pub const FOREST: ColorPalette = ColorPalette {
    name: "Forest",
    colors: ["#2D6A4F", "#40916C", "#52B788", "#95D5B2"],
};
pub const SUNSET: ColorPalette = ColorPalette {
    name: "Sunset",
    colors: ["#FF6B35", "#F7931E", "#FDB833", "#F37335"],
};
pub const AURORA: ColorPalette = ColorPalette {
    name: "Aurora",
    colors: ["#06FFA5", "#00D9FF", "#7B2CBF", "#C77DFF"],
};
pub const MIDNIGHT: ColorPalette = ColorPalette {
    name: "Midnight",
    colors: ["#0A0E27", "#16213E", "#0F3460", "#E94560"],
};
pub const NEON: ColorPalette = ColorPalette {
    name: "Neon",
    colors: ["#00FF00", "#FF00FF", "#00FFFF", "#FFFF00"],
};
pub const MINIMALIST: ColorPalette = ColorPalette {
    name: "Minimalist",
    colors: ["#000000", "#FFFFFF", "#808080", "#C0C0C0"],
};

/// Every palette, in catalog order
pub const COLOR_PALETTES: &[ColorPalette] = &[
    CYBERPUNK, OCEAN, FOREST, SUNSET, AURORA, MIDNIGHT, NEON, MINIMALIST,
];

/// Palette for a theme; themes without a dedicated palette get a random one
pub fn palette_for<R: Rng + ?Sized>(theme: Theme, rng: &mut R) -> ColorPalette {
    match theme {
        Theme::DeFi => CYBERPUNK,
        Theme::Nft | Theme::Metaverse => AURORA,
        Theme::Gaming => OCEAN,
        Theme::Ai | Theme::Privacy => MIDNIGHT,
        _ => *pick(rng, COLOR_PALETTES),
    }
}
