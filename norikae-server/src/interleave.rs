//! Character-by-character interleaving of two strings.
//!
//! Works on Unicode scalar values, never on bytes, so multi-byte text like
//! Japanese merges one character at a time.

/// Merge `a` and `b` by alternating characters.
///
/// While both strings have characters left the output takes one from `a`
/// then one from `b`. Once either runs out, the rest of the other is
/// appended unchanged.
///
/// # Examples
///
/// ```
/// use norikae_server::interleave::interleave;
///
/// assert_eq!(interleave("ab", "CD"), "aCbD");
/// assert_eq!(interleave("a", "XYZ"), "aXYZ");
/// assert_eq!(interleave("日本", "AB"), "日A本B");
/// ```
pub fn interleave(a: &str, b: &str) -> String {
    let mut merged = String::with_capacity(a.len() + b.len());
    let mut a_chars = a.chars();
    let mut b_chars = b.chars();

    loop {
        let next_a = a_chars.next();
        let next_b = b_chars.next();
        if next_a.is_none() && next_b.is_none() {
            break;
        }
        merged.extend(next_a);
        merged.extend(next_b);
    }

    merged
}
