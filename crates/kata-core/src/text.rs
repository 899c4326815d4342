//! Text helpers
//!
//! All functions operate on Unicode scalar values (`char`), not bytes.

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Reverses the character order of `text`.
///
/// # Examples
///
/// ```
/// assert_eq!(kata_core::reverse("hello"), "olleh");
/// assert_eq!(kata_core::reverse(""), "");
/// ```
#[must_use]
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Counts `a`, `e`, `i`, `o`, `u` in either case.
#[must_use]
pub fn count_vowels(text: &str) -> usize {
    text.chars()
        .filter(|c| VOWELS.contains(&c.to_ascii_lowercase()))
        .count()
}

/// Checks whether `text` reads the same both ways once every
/// non-alphanumeric character is dropped and case is folded.
///
/// The empty string and any single character are palindromes.
///
/// # Examples
///
/// ```
/// assert!(kata_core::is_palindrome("A man, a plan, a canal, Panama"));
/// assert!(!kata_core::is_palindrome("hello"));
/// ```
#[must_use]
pub fn is_palindrome(text: &str) -> bool {
    let normalized: Vec<char> = text
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect();

    normalized.iter().eq(normalized.iter().rev())
}

/// Minimal email shape check: at least one `@`, and a `.` somewhere after
/// the last `@`.
///
/// Not RFC validation. `user@domain` is rejected on purpose.
#[must_use]
pub fn is_valid_email_format(email: &str) -> bool {
    email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'))
}
