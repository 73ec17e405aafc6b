//! Log sanitization utilities
//!
//! Keeps API keys and large response bodies out of debug/error logs.

/// Maximum number of bytes of a response body to include in a log line.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret that stay visible.
const SECRET_VISIBLE_PREFIX: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` bytes (on a char boundary) followed by the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a credential for logging: `pk1_abcdef` -> `pk1_******`.
///
/// Secrets no longer than the visible prefix are masked entirely.
pub fn mask_secret(secret: &str) -> String {
    let total = secret.chars().count();
    if total <= SECRET_VISIBLE_PREFIX {
        return "*".repeat(total);
    }
    let prefix: String = secret.chars().take(SECRET_VISIBLE_PREFIX).collect();
    format!("{prefix}{}", "*".repeat(total - SECRET_VISIBLE_PREFIX))
}
