//! Query normalization and FCT alias resolution.

/// Canonical name the FCT aliases resolve to.
pub const FCT_CANONICAL_NAME: &str = "Federal Capital Territory";

/// Normalized forms that refer to the Federal Capital Territory.
const FCT_ALIASES: &[&str] = &["fct", "f.c.t", "abuja", "f c t"];

/// Lowercase and trim surrounding whitespace, byte order marks included.
pub fn normalize(input: &str) -> String {
    input
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_lowercase()
}

/// Map an FCT alias to the canonical FCT name.
///
/// The alias check itself is case- and whitespace-insensitive. Anything that
/// is not an alias is returned untouched, not normalized.
pub fn resolve_alias(name: &str) -> &str {
    if FCT_ALIASES.contains(&normalize(name).as_str()) {
        FCT_CANONICAL_NAME
    } else {
        name
    }
}
