//! Marketing copy templates
//!
//! Templates use `{name}`, `{theme}`, `{palette}`, `{colors}` and `{idea}`
//! placeholders. Rendering is single-pass: substituted values are never
//! scanned again, so braces typed by the user stay literal.

use crate::catalog::palette::ColorPalette;
use crate::core::random::pick;
use crate::theme::Theme;
use rand::Rng;

/// Tagline templates over the lower-cased theme name
pub const TAGLINE_TEMPLATES: &[&str] = &[
    "The future of {theme} is here",
    "Revolutionizing {theme} with blockchain",
    "Next-gen {theme} protocol",
    "Decentralized {theme} for everyone",
    "Smart {theme} on-chain",
    "The {theme} revolution starts now",
    "Empowering {theme} creators",
    "Where {theme} meets innovation",
    "Secure, fast, and transparent {theme}",
    "Your gateway to {theme}",
];

/// Logo prompt templates
pub const LOGO_PROMPT_TEMPLATES: &[&str] = &[
    "Modern {theme} logo for {name}: {palette} color scheme, minimalist design, suitable for crypto",
    "Professional blockchain logo for {name}: {theme} themed, using {colors}, clean and scalable",
    "Innovative {theme} token logo: {name}, {palette} palette, futuristic yet professional",
    "Crypto token logo for {name}: {theme} industry, {palette} colors, memorable and distinctive",
    "Digital asset logo: {name}, {theme} focused, {palette} aesthetic, web3 ready",
];

/// Project description templates
pub const DESCRIPTION_TEMPLATES: &[&str] = &[
    "{name} is a next-generation {theme} protocol designed to {idea}. Built with security and scalability in mind, it represents the future of decentralized finance.",
    "Introducing {name}, a revolutionary {theme} solution. This project aims to {idea} while maintaining the highest standards of decentralization and transparency.",
    "{name} is reimagining {theme} for the Web3 era. Our protocol enables {idea} with unprecedented speed and efficiency.",
    "Meet {name}: the {theme} platform that {idea}. We're building the infrastructure for the next generation of crypto applications.",
    "{name} brings innovation to {theme} by {idea}. Our vision is to create a more accessible, secure, and efficient ecosystem.",
    "{name} is dedicated to {idea}. As a {theme} project, we leverage blockchain technology to deliver solutions that are transparent, secure, and community-driven.",
    "Powered by blockchain, {name} tackles the challenge of {idea}. Our {theme} protocol is designed for users who demand both innovation and reliability.",
    "{name} represents the next evolution in {theme}. By focusing on {idea}, we're creating a platform that empowers users and developers alike.",
];

/// Substitute `{key}` placeholders in one pass. Unknown keys are kept as-is.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                match vars.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Pick and render a tagline
pub fn tagline<R: Rng + ?Sized>(theme: Theme, rng: &mut R) -> String {
    let theme_name = theme.lowercase();
    render(*pick(rng, TAGLINE_TEMPLATES), &[("theme", theme_name.as_str())])
}

/// Pick and render a logo-design prompt
pub fn logo_prompt<R: Rng + ?Sized>(
    name: &str,
    theme: Theme,
    palette: &ColorPalette,
    rng: &mut R,
) -> String {
    let colors = palette.joined();
    render(
        *pick(rng, LOGO_PROMPT_TEMPLATES),
        &[
            ("name", name),
            ("theme", theme.as_str()),
            ("palette", palette.name),
            ("colors", colors.as_str()),
        ],
    )
}

/// Pick and render a project description
pub fn description<R: Rng + ?Sized>(name: &str, theme: Theme, idea: &str, rng: &mut R) -> String {
    render(
        *pick(rng, DESCRIPTION_TEMPLATES),
        &[("name", name), ("theme", theme.as_str()), ("idea", idea)],
    )
}
