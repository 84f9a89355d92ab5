//! Case-insensitive string ordering, plain and natural

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use crate::pattern::fold_case;

/// Compare two strings ignoring case, character by character.
///
/// A string that is a prefix of the other sorts first.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().map(fold_case).cmp(b.chars().map(fold_case))
}

/// Compare two strings in natural order, ignoring case.
///
/// Runs of ASCII digits are compared by numeric value, so `file2` sorts
/// before `file10`. All other characters are compared one at a time after
/// lowercasing. When one string runs out first it sorts first.
///
/// Digit runs are accumulated into a `u64` with saturating arithmetic, so
/// two runs that both exceed `u64::MAX` compare equal. Leading zeros are not
/// significant: `a01` and `a1` compare equal.
///
/// ```
/// use std::cmp::Ordering;
/// use lk::sort::natural_compare;
///
/// assert_eq!(natural_compare("file2", "file10"), Ordering::Less);
/// assert_eq!(natural_compare("File", "file"), Ordering::Equal);
/// ```
pub fn natural_compare(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();

    loop {
        let (ca, cb) = match (a.peek(), b.peek()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(&ca), Some(&cb)) => (ca, cb),
        };

        if ca.is_ascii_digit() && cb.is_ascii_digit() {
            let na = take_number(&mut a);
            let nb = take_number(&mut b);
            if na != nb {
                return na.cmp(&nb);
            }
        } else {
            let ord = fold_case(ca).cmp(&fold_case(cb));
            if ord != Ordering::Equal {
                return ord;
            }
            a.next();
            b.next();
        }
    }
}

/// Consume a contiguous run of ASCII digits and return its value.
fn take_number(chars: &mut Peekable<Chars<'_>>) -> u64 {
    let mut value: u64 = 0;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = value.saturating_mul(10).saturating_add(u64::from(digit));
        chars.next();
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "", "a", "A", "a1", "a2", "a10", "a01", "file2", "file10", "File", "file",
        "img_2.png", "img_10.png", "10", "9", "x9y", "x10y", "zeta", "Zeta.txt",
    ];

    #[test]
    fn test_numbers_compare_by_value() {
        assert_eq!(natural_compare("file2", "file10"), Ordering::Less);
        assert_eq!(natural_compare("a10", "a2"), Ordering::Greater);
        assert_eq!(natural_compare("img_2.png", "img_10.png"), Ordering::Less);
        assert_eq!(natural_compare("9", "10"), Ordering::Less);
    }

    #[test]
    fn test_case_is_ignored() {
        assert_eq!(natural_compare("File", "file"), Ordering::Equal);
        assert_eq!(natural_compare("ABC", "abd"), Ordering::Less);
    }

    #[test]
    fn test_shorter_string_sorts_first() {
        assert_eq!(natural_compare("file", "file1"), Ordering::Less);
        assert_eq!(natural_compare("abc", "ab"), Ordering::Greater);
        assert_eq!(natural_compare("", "a"), Ordering::Less);
    }

    #[test]
    fn test_leading_zeros_are_not_significant() {
        assert_eq!(natural_compare("a01", "a1"), Ordering::Equal);
        assert_eq!(natural_compare("a007b", "a7c"), Ordering::Less);
    }

    #[test]
    fn test_digit_versus_letter_compares_characters() {
        // '1' < 'a' in character order
        assert_eq!(natural_compare("1x", "ax"), Ordering::Less);
    }

    #[test]
    fn test_huge_numbers_saturate() {
        let a = "n99999999999999999999999";
        let b = "n88888888888888888888888";
        assert_eq!(natural_compare(a, b), Ordering::Equal);
        assert_eq!(natural_compare("n18446744073709551615", "n5"), Ordering::Greater);
    }

    #[test]
    fn test_reflexive_and_antisymmetric() {
        for &x in SAMPLES {
            assert_eq!(natural_compare(x, x), Ordering::Equal, "{:?}", x);
            for &y in SAMPLES {
                assert_eq!(
                    natural_compare(x, y),
                    natural_compare(y, x).reverse(),
                    "{:?} vs {:?}",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_compare_ignore_case() {
        assert_eq!(compare_ignore_case("README", "readme"), Ordering::Equal);
        assert_eq!(compare_ignore_case("a.txt", "B.txt"), Ordering::Less);
        // Plain comparison is not numeric-aware
        assert_eq!(compare_ignore_case("file2", "file10"), Ordering::Greater);
        assert_eq!(compare_ignore_case("ab", "abc"), Ordering::Less);
    }
}
