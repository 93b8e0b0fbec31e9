//! Binary-to-text encodings used when synthesizing identifiers.
//!
//! Two textual forms exist for the same 16 random bytes: a 32-character
//! lowercase hex string (trace/span style) and the hyphen-grouped
//! 8-4-4-4-12 UUID form (correlation/request/session style). Everything
//! here is pure and side-effect free.

/// Byte-to-hex lookup table: 256 two-character lowercase entries, computed
/// at compile time and shared across all invocations without synchronization.
const BYTE_TO_HEX: [[u8; 2]; 256] = {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    let mut table = [[0u8; 2]; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = [DIGITS[i >> 4], DIGITS[i & 0x0f]];
        i += 1;
    }
    table
};

/// Encode a byte slice as a lowercase hex string.
///
/// Any length is accepted; callers that feed the result into
/// [`format_hex_as_uuid`] are expected to pass 16 bytes (32 hex chars).
pub fn bytes_to_hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        let pair = BYTE_TO_HEX[b as usize];
        out.push(pair[0] as char);
        out.push(pair[1] as char);
    }
    out
}

/// Regroup a 32-character hex string into the hyphenated 8-4-4-4-12 form.
///
/// Inputs shorter than 32 characters are not an error: groups past the end
/// of the input come out truncated or empty. Inbound identifier strings are
/// deliberately not validated (see crate docs), so this stays permissive.
pub fn format_hex_as_uuid(hex: &str) -> String {
    format!(
        "{}-{}-{}-{}-{}",
        group(hex, 0, 8),
        group(hex, 8, 12),
        group(hex, 12, 16),
        group(hex, 16, 20),
        group(hex, 20, 32),
    )
}

fn group(hex: &str, start: usize, end: usize) -> &str {
    let end = end.min(hex.len());
    let start = start.min(end);
    // Non-ASCII input can land off a char boundary; treat that as empty
    // rather than panicking, consistent with the no-validation stance.
    hex.get(start..end).unwrap_or("")
}

/// Encode 16 bytes directly into the hyphenated UUID form.
pub fn bytes_to_uuid(bytes: &[u8]) -> String {
    format_hex_as_uuid(&bytes_to_hex_string(bytes))
}

/// Strip the hyphens from a UUID-form identifier, yielding its hex form.
///
/// Returns `None` for an absent or empty input so fallback chains can move
/// on to their next candidate. All hyphens are removed, making this a true
/// inverse of [`format_hex_as_uuid`].
pub fn uuid_to_hex_string(value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v.replace('-', "")),
        _ => None,
    }
}

/// Re-hyphenate a hex-form identifier into the UUID form.
///
/// Returns `None` for an absent or empty input.
pub fn hex_string_to_uuid(value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(format_hex_as_uuid(v)),
        _ => None,
    }
}
