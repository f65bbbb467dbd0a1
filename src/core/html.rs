// src/core/html.rs
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Byte span of the next `<o …>…</c>` block at or after `from`.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Opening tag of a block, up to the first '>'.
pub fn opener(block: &str) -> &str {
    &block[..block.find('>').unwrap_or(block.len())]
}

/// Value of `name=…` in a tag opener; attribute name matched case-insensitively,
/// value returned verbatim. Tolerates double quotes, single quotes, no quotes.
pub fn attr_value_ci<'a>(opener: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(opener);
    let pat = format!("{}=", to_lower(name));
    let mut from = 0usize;
    loop {
        let at = lc.get(from..)?.find(&pat)? + from;
        // Must start an attribute, not the tail of a longer one (data-href=…)
        if at > 0 && !lc.as_bytes()[at - 1].is_ascii_whitespace() {
            from = at + pat.len();
            continue;
        }
        let val = &opener[at + pat.len()..];
        let (quote, off) = match val.as_bytes().first() {
            Some(b'"') => (Some('"'), 1),
            Some(b'\'') => (Some('\''), 1),
            _ => (None, 0),
        };
        let end = match quote {
            Some(q) => val[off..].find(q).map(|e| off + e).unwrap_or(val.len()),
            None => val[off..]
                .find(|c: char| c.is_ascii_whitespace() || c == '>')
                .map(|e| off + e)
                .unwrap_or(val.len()),
        };
        return Some(&val[off..end]);
    }
}

/// Class tokens of a tag opener, in document order.
pub fn opener_classes(opener: &str) -> Vec<String> {
    attr_value_ci(opener, "class")
        .map(|v| v.split_whitespace().map(|t| t.to_string()).collect())
        .unwrap_or_default()
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Escape text for literal inclusion in markup (element text or quoted attribute).
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
