//! JAR manifest (`META-INF/MANIFEST.MF`) parsing.

use std::collections::HashMap;

/// Parse the main section of a JAR manifest into attribute pairs.
///
/// Lines starting with a single space continue the previous value. Parsing
/// stops at the first blank line, which ends the main section.
#[must_use]
pub fn parse_manifest(content: &str) -> HashMap<String, String> {
    let mut attributes = HashMap::new();
    let mut current: Option<(String, String)> = None;

    for line in content.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if let Some(rest) = line.strip_prefix(' ') {
            if let Some((_, value)) = current.as_mut() {
                value.push_str(rest);
            }
            continue;
        }
        if let Some((key, value)) = current.take() {
            attributes.insert(key, value);
        }
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            current = Some((key.trim().to_string(), value.trim_start().to_string()));
        }
    }
    if let Some((key, value)) = current {
        attributes.insert(key, value);
    }
    attributes
}

/// The `Main-Class` attribute, if present and non-blank.
#[must_use]
pub fn main_class(content: &str) -> Option<String> {
    parse_manifest(content)
        .remove("Main-Class")
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
