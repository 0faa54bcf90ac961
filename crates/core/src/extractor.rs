use crate::domain::{ExtractedContent, LineClassification};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, info, warn};
use regex::Regex;
use std::sync::OnceLock;

static LINK_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
static BASE64_PATTERN: OnceLock<Regex> = OnceLock::new();
static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn link_patterns() -> &'static [Regex] {
    LINK_PATTERNS.get_or_init(|| {
        [r"^ss://", r"^vmess://", r"^vless://", r"^trojan://", r"^https?://"]
            .iter()
            .map(|pattern| Regex::new(pattern).expect("valid link regex"))
            .collect()
    })
}

fn base64_pattern() -> &'static Regex {
    BASE64_PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9+/]+={0,2}$").expect("valid base64 regex"))
}

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
    })
}

fn is_plain_link(line: &str) -> bool {
    link_patterns().iter().any(|pattern| pattern.is_match(line))
}

/// True when the line is a link, Base64-looking data, or an email-style key.
pub fn is_valid_subscription_line(line: &str) -> bool {
    let line = line.trim();
    is_plain_link(line) || base64_pattern().is_match(line) || email_pattern().is_match(line)
}

/// Decodes a line only when it is canonical Base64: the alphabet must match
/// and re-encoding the bytes must give back the exact input.
fn decode_canonical(line: &str) -> Option<Vec<u8>> {
    if !base64_pattern().is_match(line) {
        return None;
    }
    let bytes = STANDARD.decode(line).ok()?;
    (STANDARD.encode(&bytes) == line).then_some(bytes)
}

/// Canonical Base64 check.
///
/// Arbitrary byte strings round-trip too, so this is a best-effort
/// classifier rather than proof that the payload is meaningful.
pub fn is_base64(line: &str) -> bool {
    decode_canonical(line).is_some()
}

/// Classifies a trimmed candidate line. `None` means the line is dropped.
pub fn classify(line: &str) -> Option<LineClassification> {
    if is_plain_link(line) {
        Some(LineClassification::PlainLink)
    } else if is_base64(line) {
        Some(LineClassification::Base64Wrapped)
    } else if is_valid_subscription_line(line) {
        Some(LineClassification::Opaque)
    } else {
        None
    }
}

/// Picks the decoded payload when it looks like a link list,
/// otherwise hands back the encoded line as it was.
fn unwrap_payload(line: &str, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(decoded) if decoded.contains("ss://") || decoded.contains("http") => decoded,
        Ok(_) => line.to_string(),
        Err(err) => {
            warn!("Keeping line unchanged, decoded payload is not UTF-8: {}", err);
            line.to_string()
        }
    }
}

// U+FEFF trims like whitespace so a byte order mark never sticks to the first link
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Filters raw file content down to subscription lines, unwrapping Base64
/// bundles that contain links.
///
/// Returns `None` when nothing is left after dropping blank and comment
/// lines. If every remaining line is rejected individually, the raw content
/// comes back untouched, comments included.
pub fn extract(raw: &str) -> Option<ExtractedContent> {
    let candidates: Vec<&str> = raw
        .split('\n')
        .map(trim_line)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with("//"))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let mut result = String::new();
    for &line in &candidates {
        let emitted = if is_plain_link(line) {
            debug!("{:?}: {}", LineClassification::PlainLink, line);
            line.to_string()
        } else if let Some(bytes) = decode_canonical(line) {
            debug!("{:?}: {}", LineClassification::Base64Wrapped, line);
            unwrap_payload(line, bytes)
        } else if is_valid_subscription_line(line) {
            debug!("{:?}: {}", LineClassification::Opaque, line);
            line.to_string()
        } else {
            debug!("Dropping line: {}", line);
            continue;
        };
        result.push_str(&emitted);
        result.push('\n');
    }

    let trimmed = result.trim();
    if trimmed.is_empty() {
        info!(
            "All {} candidate lines were rejected, keeping the original content",
            candidates.len()
        );
        return Some(ExtractedContent::new(raw.to_string()));
    }

    info!("Extracted subscription content from {} candidate lines", candidates.len());
    Some(ExtractedContent::new(trimmed.to_string()))
}
