//! Pure helpers for downloads: cache keys, URI redaction, and timing text.

use std::time::Duration;

use sha2::{Digest, Sha256};

/// Encode bytes as lowercase hex string.
#[must_use]
pub fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(char::from(HEX[(b >> 4) as usize]));
        out.push(char::from(HEX[(b & 0xf) as usize]));
    }
    out
}

/// Cache key for a URI: the SHA-256 of the URI text.
#[must_use]
pub fn cache_key(uri: &str) -> String {
    hex_encode(&Sha256::digest(uri.as_bytes()))
}

/// Remove `user:password@` credentials from a URI before it is displayed.
#[must_use]
pub fn sanitize_uri(uri: &str) -> String {
    let Some(scheme_end) = uri.find("://") else {
        return uri.to_string();
    };
    let authority_start = scheme_end + 3;
    let rest = &uri[authority_start..];
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{}{}", &uri[..authority_start], &rest[at + 1..]),
        None => uri.to_string(),
    }
}

/// Render elapsed time the way build logs show it: `4.2s`, `3m 7s`, `1h 2m`.
#[must_use]
pub fn format_duration(elapsed: Duration) -> String {
    let tenths = elapsed.as_millis() / 100;
    let total_secs = tenths / 10;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}.{}s", tenths % 10)
    }
}
