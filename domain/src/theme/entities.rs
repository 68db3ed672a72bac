//! Theme value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Thematic category of a token idea.
///
/// The set is closed: catalogs keyed by theme use exhaustive `match`es, so
/// adding a variant forces every table to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    DeFi,
    #[serde(rename = "NFT")]
    Nft,
    Gaming,
    Metaverse,
    #[serde(rename = "AI")]
    Ai,
    Layer2,
    Privacy,
    Staking,
    Yield,
    Governance,
    Bridge,
    Oracle,
    #[serde(rename = "DEX")]
    Dex,
    Lending,
    Derivatives,
    Synthetic,
    Meme,
    Social,
    #[serde(rename = "DAO")]
    Dao,
}

impl Theme {
    /// All themes in catalog order.
    ///
    /// This order drives the theme-name fallback pass of the classifier.
    pub const ALL: [Theme; 19] = [
        Theme::DeFi,
        Theme::Nft,
        Theme::Gaming,
        Theme::Metaverse,
        Theme::Ai,
        Theme::Layer2,
        Theme::Privacy,
        Theme::Staking,
        Theme::Yield,
        Theme::Governance,
        Theme::Bridge,
        Theme::Oracle,
        Theme::Dex,
        Theme::Lending,
        Theme::Derivatives,
        Theme::Synthetic,
        Theme::Meme,
        Theme::Social,
        Theme::Dao,
    ];

    /// Display name, as used in copy templates
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::DeFi => "DeFi",
            Theme::Nft => "NFT",
            Theme::Gaming => "Gaming",
            Theme::Metaverse => "Metaverse",
            Theme::Ai => "AI",
            Theme::Layer2 => "Layer2",
            Theme::Privacy => "Privacy",
            Theme::Staking => "Staking",
            Theme::Yield => "Yield",
            Theme::Governance => "Governance",
            Theme::Bridge => "Bridge",
            Theme::Oracle => "Oracle",
            Theme::Dex => "DEX",
            Theme::Lending => "Lending",
            Theme::Derivatives => "Derivatives",
            Theme::Synthetic => "Synthetic",
            Theme::Meme => "Meme",
            Theme::Social => "Social",
            Theme::Dao => "DAO",
        }
    }

    /// Lower-cased display name
    pub fn lowercase(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Theme::ALL
            .iter()
            .copied()
            .find(|t| t.lowercase() == wanted)
            .ok_or_else(|| format!("Invalid Theme: {}", s))
    }
}
