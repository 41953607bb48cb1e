/// Whether `instance` ends with `suffix`.
///
/// A suffix longer than the string never matches; the empty suffix always
/// does.
pub fn ends_with(instance: &str, suffix: &str) -> bool {
    suffix.len() <= instance.len() && instance.ends_with(suffix)
}

/// Position of the first `needle` in `haystack` at or after `from`, counted
/// in UTF-16 code units like the browser's `String.prototype.indexOf`.
///
/// `from` is clamped to `0..=haystack_len`, so a negative start searches the
/// whole string and an empty needle is found at the clamped start.
pub fn index_of_from(haystack: &str, needle: &str, from: isize) -> Option<usize> {
    let haystack: Vec<u16> = haystack.encode_utf16().collect();
    let needle: Vec<u16> = needle.encode_utf16().collect();

    let len = isize::try_from(haystack.len()).unwrap_or(isize::MAX);
    let start = usize::try_from(from.clamp(0, len)).unwrap_or(0);

    if needle.is_empty() {
        return Some(start);
    }
    haystack[start..]
        .windows(needle.len())
        .position(|window| window == needle.as_slice())
        .map(|pos| pos + start)
}

/// Suffix test phrased as a search from `len(instance) - len(suffix)`.
///
/// This is how the dashboard scripts historically checked suffixes. It
/// agrees with [`ends_with`]: when the suffix is longer, the start clamps to
/// 0 and the search cannot fit the needle.
pub fn ends_with_by_search(instance: &str, suffix: &str) -> bool {
    let instance_len = isize::try_from(instance.encode_utf16().count()).unwrap_or(isize::MAX);
    let suffix_len = isize::try_from(suffix.encode_utf16().count()).unwrap_or(isize::MAX);
    index_of_from(instance, suffix, instance_len - suffix_len).is_some()
}
