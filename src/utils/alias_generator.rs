//! Random alias generation.
//!
//! Aliases are drawn uniformly from the 62 ASCII letters and digits using the
//! thread-local generator, which is seeded from the operating system on first
//! use in every thread. Output therefore differs across process restarts.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated aliases when no other policy is configured.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Generates a random alias of exactly `length` characters.
///
/// Characters come from `A-Z`, `a-z` and `0-9`. The alias is not checked
/// against any store; collisions are reported by the store on save.
///
/// # Examples
///
/// ```
/// use url_alias::utils::alias_generator::generate_alias;
///
/// let alias = generate_alias(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
