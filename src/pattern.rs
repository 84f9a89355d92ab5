//! Wildcard name matching
//!
//! Supports the two classic wildcards:
//! - `*` matches zero or more characters
//! - `?` matches exactly one character
//!
//! Every other character matches itself, ignoring case. There are no
//! character classes or escapes, so every input string is a valid pattern.
//!
//! Callers that treat an empty pattern as "no filter" must check for that
//! themselves: [`matches`] with an empty pattern only accepts the empty name.

/// Check if a string contains wildcard characters (`*` or `?`).
pub fn contains_wildcard(s: &str) -> bool {
    s.contains('*') || s.contains('?')
}

/// Match `name` against a wildcard `pattern`, case-insensitively.
///
/// Runs in O(n·m) time using a single backtrack point: when a literal
/// mismatch follows a `*`, the star absorbs one more character of the name
/// and matching resumes just after the star. Only the most recent star needs
/// remembering, so adversarial patterns such as `*a*a*a*a*` cannot blow up.
///
/// ```
/// use lk::pattern::matches;
///
/// assert!(matches("*.rs", "main.RS"));
/// assert!(matches("file?.txt", "file1.txt"));
/// assert!(!matches("a*b", "a"));
/// ```
pub fn matches(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().map(fold_case).collect();
    let name: Vec<char> = name.chars().map(fold_case).collect();

    let mut p = 0;
    let mut n = 0;
    // Position just after the last `*` seen, and the name offset it was tried at
    let mut star: Option<(usize, usize)> = None;

    while n < name.len() {
        match pattern.get(p) {
            Some('*') => {
                // Consecutive stars collapse into one
                while pattern.get(p) == Some(&'*') {
                    p += 1;
                }
                if p == pattern.len() {
                    return true;
                }
                star = Some((p, n));
            }
            Some('?') => {
                p += 1;
                n += 1;
            }
            Some(&c) if c == name[n] => {
                p += 1;
                n += 1;
            }
            _ => match star {
                Some((after_star, matched)) => {
                    p = after_star;
                    n = matched + 1;
                    star = Some((after_star, n));
                }
                None => return false,
            },
        }
    }

    // Name consumed: only trailing stars may remain
    pattern[p..].iter().all(|&c| c == '*')
}

/// Lowercase a single character for comparison purposes.
pub(crate) fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_matches_everything() {
        for name in ["", "a", "main.rs", ".hidden", "日本語.txt"] {
            assert!(matches("*", name), "* should match {:?}", name);
        }
    }

    #[test]
    fn test_question_mark_needs_one_char() {
        assert!(!matches("?", ""));
        assert!(matches("?", "x"));
        assert!(!matches("?", "xy"));
        assert!(matches("test?.rs", "test1.rs"));
        assert!(!matches("test?.rs", "test12.rs"));
    }

    #[test]
    fn test_star_between_literals() {
        assert!(matches("a*b", "aXXXb"));
        assert!(matches("a*b", "ab"));
        assert!(!matches("a*b", "a"));
        assert!(!matches("a*b", "aXXXbc"));
        assert!(matches("a*b*c", "aXbXbXc"));
    }

    #[test]
    fn test_backtracking_after_partial_match() {
        // First "ab" is a false start; the star must absorb it
        assert!(matches("*abc", "ababc"));
        assert!(matches("*.tar.gz", "archive.tar.tar.gz"));
        assert!(!matches("*.tar.gz", "archive.tar.gzip"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(matches("*.TXT", "notes.txt"));
        assert!(matches("readme", "README"));
        assert!(matches("Ä*", "äpfel"));
    }

    #[test]
    fn test_empty_pattern_only_matches_empty_name() {
        assert!(matches("", ""));
        assert!(!matches("", "a"));
    }

    #[test]
    fn test_consecutive_stars_collapse() {
        assert!(matches("a***b", "ab"));
        assert!(matches("**", ""));
        assert!(matches("a**", "abc"));
    }

    #[test]
    fn test_trailing_star_after_prefix() {
        assert!(matches("test*", "test_foo"));
        assert!(matches("test*", "test"));
        assert!(!matches("test*", "foo_test"));
    }

    #[test]
    fn test_adversarial_pattern_terminates() {
        let name = "a".repeat(5000) + "b";
        assert!(!matches("*a*a*a*a*a*a*a*a*c", &name));
        assert!(!matches("*a*a*a*a*a*a*a*a*", &"b".repeat(5000)));
        assert!(matches("*a*a*a*a*a*a*a*a*", &name));
    }

    #[test]
    fn test_contains_wildcard() {
        assert!(contains_wildcard("*.rs"));
        assert!(contains_wildcard("src/file?.txt"));
        assert!(!contains_wildcard("src/main.rs"));
        assert!(!contains_wildcard("[abc]"));
    }
}
