//! PII masking for log output.

use std::fmt;

/// Display wrapper that masks a value before it reaches a log line.
///
/// Emails keep the first character of the local part and the full domain
/// (`a***@example.com`); anything else is fully masked.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.split_once('@') {
            Some((local, domain)) if !local.is_empty() => {
                let mut chars = local.chars();
                let first = chars.next().unwrap_or('?');
                write!(f, "{first}***@{domain}")
            }
            _ => f.write_str("***"),
        }
    }
}
