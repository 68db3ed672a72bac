//! Name fragments used by the name synthesizer

/// Leading fragments ("Quantum" + ...)
pub const PREFIXES: &[&str] = &[
    "Cyber", "Quantum", "Nexus", "Flux", "Prism", "Forge", "Pulse", "Volt", "Nova", "Apex",
    "Zenith", "Orbit", "Stellar", "Cosmic", "Lunar",
];

/// Trailing fragments (... + "Vault")
pub const SUFFIXES: &[&str] = &[
    "Protocol", "Network", "Finance", "Labs", "Vault", "Chain", "Hub", "Core", "Swap", "Bridge",
    "Pool", "Stake", "Farm", "Mint",
];

/// Descriptive leads ("Liquid" + ...)
pub const ADJECTIVES: &[&str] = &[
    "Smart",
    "Decentralized",
    "Autonomous",
    "Liquid",
    "Secure",
    "Fast",
    "Scalable",
    "Transparent",
    "Efficient",
    "Dynamic",
];
