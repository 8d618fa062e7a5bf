//! Default UMD namespace derivation.

use regex::Regex;
use std::sync::LazyLock;

static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Derives an abbreviation from a package name.
///
/// The name is split into runs of word characters; the first alphanumeric
/// character of each run is upper-cased and the results are concatenated.
/// A name without any such character yields an empty string.
///
/// # Example
/// ```
/// use pkg_scaffold::abbr::derive_abbreviation;
///
/// assert_eq!(derive_abbreviation("my-cool-package"), "MCP");
/// ```
pub fn derive_abbreviation(name: &str) -> String {
    WORD_PATTERN
        .find_iter(name)
        .filter_map(|word| word.as_str().chars().find(|c| c.is_alphanumeric()))
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_abbreviation() {
        assert_eq!(derive_abbreviation("my-cool-package"), "MCP");
        assert_eq!(derive_abbreviation("foo"), "F");
        assert_eq!(derive_abbreviation("dom.utils/core"), "DUC");
        assert_eq!(derive_abbreviation("3h-cli"), "3C");
    }

    #[test]
    fn test_degenerate_names() {
        assert_eq!(derive_abbreviation("___"), "");
        assert_eq!(derive_abbreviation("-./"), "");
        assert_eq!(derive_abbreviation(""), "");
    }

    #[test]
    fn test_underscores_inside_words() {
        assert_eq!(derive_abbreviation("my_pkg"), "M");
        assert_eq!(derive_abbreviation("_private-api"), "PA");
    }
}
