//! Pure text operations — the mirror effect and palindrome detection.

/// Return `text` with its characters in opposite order.
///
/// Reverses by `char` so multi-byte input survives the round trip.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Whether `text` reads the same forwards and backwards once everything
/// that is not an ASCII letter or digit is stripped and case is folded.
///
/// An input that cleans down to nothing is not a palindrome.
pub fn is_palindrome(text: &str) -> bool {
    let cleaned: Vec<char> = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    !cleaned.is_empty() && cleaned.iter().eq(cleaned.iter().rev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_basic() {
        assert_eq!(reverse("hello"), "olleh");
        assert_eq!(reverse(""), "");
        assert_eq!(reverse("a"), "a");
    }

    #[test]
    fn test_reverse_is_involutive() {
        for text in ["hello", "radar", "A man a plan", "été", "12 34"] {
            assert_eq!(reverse(&reverse(text)), text);
        }
    }

    #[test]
    fn test_reverse_multibyte() {
        assert_eq!(reverse("été"), "été");
        assert_eq!(reverse("ab é"), "é ba");
    }

    #[test]
    fn test_palindrome_basic() {
        assert!(is_palindrome("radar"));
        assert!(is_palindrome("a"));
        assert!(!is_palindrome("hello"));
    }

    #[test]
    fn test_palindrome_empty_is_false() {
        assert!(!is_palindrome(""));
        assert!(!is_palindrome("  ,,! "));
    }

    #[test]
    fn test_palindrome_ignores_case_spacing_punctuation() {
        assert!(is_palindrome("A man a plan a canal Panama"));
        assert!(is_palindrome("Engage le jeu, que je le gagne"));
        assert!(is_palindrome("12321"));
        assert!(!is_palindrome("12345"));
    }

    #[test]
    fn test_palindrome_invariant_under_reversal() {
        for text in ["radar", "hello", "A man a plan a canal Panama", "", "ab"] {
            assert_eq!(is_palindrome(text), is_palindrome(&reverse(text)));
        }
    }
}
