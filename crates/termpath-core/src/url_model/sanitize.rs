//! Plain-text sanitization of query values.

/// Sanitizes a user-supplied query value as plain text.
///
/// - Removes HTML tags (`<...>`); a lone `<` is kept
/// - Removes leftover percent-encoded octets (`%2F`, `%3C`, ...)
/// - Collapses runs of whitespace and control characters to one space
/// - Trims the result
pub fn sanitize_text_field(input: &str) -> String {
    let untagged = strip_tags(input);
    let plain = strip_percent_octets(&untagged);

    let mut out = String::with_capacity(plain.len());
    let mut prev_space = false;
    for c in plain.chars() {
        if c.is_whitespace() || c.is_control() {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.push(c);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let opens_tag = after
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'));
        match after.find('>') {
            Some(end) if opens_tag => rest = &after[end + 1..],
            // Unterminated tag: drop everything after it.
            None if opens_tag => return out,
            _ => {
                out.push('<');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn strip_percent_octets(input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let next = strip_octets_once(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn strip_octets_once(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
        {
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
