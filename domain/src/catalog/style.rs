//! Visual style phrases

use crate::core::random::pick;
use crate::theme::Theme;
use rand::Rng;

/// Generic styles used for themes without a dedicated phrase
pub const VISUAL_STYLES: &[&str] = &[
    "Geometric and minimalist",
    "Futuristic and cyberpunk",
    "Nature-inspired with tech elements",
    "Abstract and flowing",
    "Bold and vibrant",
    "Dark and mysterious",
    "Clean and professional",
    "Playful and creative",
];

pub fn visual_style_for<R: Rng + ?Sized>(theme: Theme, rng: &mut R) -> &'static str {
    match theme {
        Theme::DeFi => "Geometric and minimalist with financial elements",
        Theme::Nft => "Artistic and vibrant with creative flair",
        Theme::Gaming => "Bold and playful with dynamic elements",
        Theme::Metaverse => "Futuristic and immersive",
        Theme::Ai => "Tech-forward with neural network patterns",
        Theme::Privacy => "Dark and mysterious with security elements",
        _ => *pick(rng, VISUAL_STYLES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::rng_from_seed;

    #[test]
    fn test_dedicated_style() {
        let mut rng = rng_from_seed(Some(0));
        assert_eq!(
            visual_style_for(Theme::Ai, &mut rng),
            "Tech-forward with neural network patterns"
        );
    }

    #[test]
    fn test_fallback_style_from_catalog() {
        let mut rng = rng_from_seed(Some(9));
        let style = visual_style_for(Theme::Meme, &mut rng);
        assert!(VISUAL_STYLES.contains(&style));
    }
}
