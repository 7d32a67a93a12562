//! Shard-selection hash.

/// 32-bit rolling hash over the UTF-16 code units of `input`
/// (`h = h * 31 + unit`, wrapping). Stable across runs and platforms, so the
/// same image always lands on the same shard.
pub fn url_hash(input: &str) -> i32 {
    input.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(url_hash(""), 0);
    }

    #[test]
    fn matches_polynomial_for_short_input() {
        // 'a' = 97, 'b' = 98
        assert_eq!(url_hash("a"), 97);
        assert_eq!(url_hash("ab"), 97 * 31 + 98);
    }

    #[test]
    fn wraps_on_long_input() {
        let long = "https://example.com/".repeat(50);
        // Must not panic in debug builds and must be deterministic.
        assert_eq!(url_hash(&long), url_hash(&long));
    }

    #[test]
    fn astral_chars_hash_as_surrogate_pairs() {
        // U+1F600 is D83D DE00 in UTF-16.
        let expected = 0xD83Di32.wrapping_mul(31).wrapping_add(0xDE00);
        assert_eq!(url_hash("\u{1F600}"), expected);
    }
}
