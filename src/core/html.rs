// src/core/html.rs
// Minimal HTML block scanning, tailored to the tag reference pages.
// Case-insensitive on ASCII tag names. Depth-aware, because the listing
// table is nested inside a cell of the page's layout table: matching the
// first closing tag would cut the outer block short.

/// Byte ranges of the top-level `<tag ...>…</tag>` blocks inside `s`.
/// A nested block of the same tag name stays inside its parent's range and
/// is not reported separately. Each range spans from the start of the
/// opening tag to the end of the matching closing tag.
pub fn tag_blocks(s: &str, tag: &str) -> Vec<(usize, usize)> {
    let lc = to_lowercase_fast(s);
    let open = format!("<{}", tag.to_ascii_lowercase());
    let close = format!("</{}", tag.to_ascii_lowercase());

    let mut out = Vec::new();
    let mut pos = 0usize;
    let mut depth = 0usize;
    let mut start = 0usize;

    loop {
        let next_open = find_tag_at(&lc, &open, pos);
        let next_close = find_tag_at(&lc, &close, pos);
        match (next_open, next_close) {
            (Some(o), Some(c)) if o < c => {
                if depth == 0 {
                    start = o;
                }
                depth += 1;
                pos = o + open.len();
            }
            (_, Some(c)) => {
                if depth > 0 {
                    depth -= 1;
                    if depth == 0 {
                        // End of a top-level block: include the closing tag.
                        let end = match lc[c..].find('>') {
                            Some(g) => c + g + 1,
                            None => lc.len(),
                        };
                        out.push((start, end));
                        pos = end;
                        continue;
                    }
                }
                pos = c + close.len();
            }
            (Some(o), None) => {
                // Opened but never closed; scan on so siblings still match.
                if depth == 0 {
                    start = o;
                }
                depth += 1;
                pos = o + open.len();
            }
            (None, None) => break,
        }
    }
    out
}

/// First occurrence of `pat` at or after `from` that ends on a tag-name
/// boundary, so `<td` does not match inside `<table`.
fn find_tag_at(lc: &str, pat: &str, from: usize) -> Option<usize> {
    let mut at = from;
    loop {
        let rel = lc.get(at..)?.find(pat)?;
        let idx = at + rel;
        match lc.as_bytes().get(idx + pat.len()) {
            Some(b) if b.is_ascii_alphanumeric() => at = idx + 1,
            _ => return Some(idx),
        }
    }
}

/// Given a complete tag block like `<td ...>INNER</td>`,
/// return INNER without the wrapping tags (may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> &str {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return &block[open_end + 1..close_start];
            }
        }
    }
    ""
}

/// Remove all HTML tags `<...>` from the string.
pub fn strip_tags(s: &str) -> String {
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
    out
}

/// Fast ASCII-only lowercasing for tag matching. Byte-length preserving,
/// so indices into the lowered copy are valid in the original.
pub fn to_lowercase_fast(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}
