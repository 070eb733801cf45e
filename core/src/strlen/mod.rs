//! Length of a sentinel-terminated string.

/// Terminating marker. Rust strings carry their own length, so the end of
/// the slice also terminates.
pub const SENTINEL: char = '\0';

/// Number of chars before the first sentinel.
pub fn string_length(input: &str) -> usize {
    let len = input.chars().take_while(|&c| c != SENTINEL).count();
    tracing::debug!(target: "archtools.strlen", len, unit = "chars", "measured");
    len
}

/// Number of bytes before the first sentinel, as C's `strlen` reports it.
pub fn byte_length(input: &str) -> usize {
    let len = input
        .bytes()
        .position(|b| b == SENTINEL as u8)
        .unwrap_or(input.len());
    tracing::debug!(target: "archtools.strlen", len, unit = "bytes", "measured");
    len
}
