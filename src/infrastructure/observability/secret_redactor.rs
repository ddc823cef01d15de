const REDACTED: &str = "[REDACTED]";

/// Scrubs credentials from error text before it is logged or shown to a user.
///
/// Covers Telegram bot tokens inside API URLs (`/bot<token>/`), `key=` and
/// `token=` query parameters, and bearer tokens.
pub fn redact_secrets(text: &str) -> String {
    let mut result = redact_bot_paths(text);

    for pattern in ["key=", "token=", "api_key=", "Bearer "] {
        result = redact_after(&result, pattern);
    }

    result
}

fn redact_bot_paths(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find("/bot") {
        let start = idx + "/bot".len();
        let end = rest[start..]
            .find(|c: char| c == '/' || c.is_whitespace() || c == '"' || c == ')')
            .map(|i| start + i)
            .unwrap_or(rest.len());

        result.push_str(&rest[..start]);
        if rest[start..end].contains(':') {
            result.push_str(REDACTED);
        } else {
            result.push_str(&rest[start..end]);
        }
        rest = &rest[end..];
    }

    result.push_str(rest);
    result
}

fn redact_after(text: &str, pattern: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find(pattern) {
        let start = idx + pattern.len();
        let end = rest[start..]
            .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'' || c == ')')
            .map(|i| start + i)
            .unwrap_or(rest.len());

        result.push_str(&rest[..start]);
        if start < end && &rest[start..end] != REDACTED {
            result.push_str(REDACTED);
        } else {
            result.push_str(&rest[start..end]);
        }
        rest = &rest[end..];
    }

    result.push_str(rest);
    result
}

