//! Historical crypto knowledge base (2018-2025)

/// Use-case catalog matched against idea text during analysis
pub const USE_CASES: &[&str] = &[
    "Decentralized Finance (DeFi)",
    "Non-Fungible Tokens (NFTs)",
    "Gaming and Metaverse",
    "Artificial Intelligence",
    "Layer 2 Scaling",
    "Privacy and Security",
    "Staking and Yield",
    "Governance",
    "Cross-chain Bridges",
    "Oracle Networks",
    "Decentralized Exchanges",
    "Lending Protocols",
    "Derivatives Trading",
    "Synthetic Assets",
    "Social Tokens",
    "Decentralized Autonomous Organizations (DAOs)",
];

/// Year used when a requested year has no entry
pub const LATEST_TREND_YEAR: u16 = 2025;

/// Notable narratives per year
pub const TRENDING_PATTERNS: &[(u16, &[&str])] = &[
    (2018, &["ICO", "Smart Contracts", "DeFi Early"]),
    (2019, &["Staking", "Layer 2"]),
    (2020, &["DeFi Summer", "Yield Farming"]),
    (2021, &["NFT Boom", "Metaverse"]),
    (2022, &["Web3", "Governance"]),
    (2023, &["AI Integration", "RWA Tokens"]),
    (2024, &["AI + Crypto", "Modular Chains"]),
    (2025, &["Autonomous Agents", "Cross-chain AI"]),
];

/// Trends recorded for `year`, falling back to [`LATEST_TREND_YEAR`]
pub fn trends_for_year(year: u16) -> &'static [&'static str] {
    let lookup = |y: u16| {
        TRENDING_PATTERNS
            .iter()
            .find(|(entry, _)| *entry == y)
            .map(|(_, trends)| *trends)
    };
    lookup(year)
        .or_else(|| lookup(LATEST_TREND_YEAR))
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_year() {
        assert_eq!(trends_for_year(2020), &["DeFi Summer", "Yield Farming"]);
    }

    #[test]
    fn test_unknown_year_falls_back_to_latest() {
        assert_eq!(trends_for_year(1999), trends_for_year(LATEST_TREND_YEAR));
        assert!(!trends_for_year(3000).is_empty());
    }
}
