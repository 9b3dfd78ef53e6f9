// src/core/markdown.rs
//
// Scraped HTML fragments (names, taglines, description blocks) are stored
// as Markdown. Conversion failure degrades to tag-stripped text, never an
// error: a malformed fragment yields an ugly value, not a failed run.

pub fn from_html(fragment: &str) -> String {
    match htmd::convert(fragment) {
        Ok(md) => md.trim().to_string(),
        Err(_) => strip_tags(fragment),
    }
}

fn strip_tags(s: &str) -> String {
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
    normalize_ws(&out)
}

/// Collapse runs of whitespace to single spaces and trim the ends.
fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_ws = true;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !last_ws {
                out.push(' ');
            }
            last_ws = true;
        } else {
            out.push(ch);
            last_ws = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(from_html("Growbot"), "Growbot");
    }

    #[test]
    fn bold_fragment_becomes_markdown() {
        assert_eq!(from_html("<b>Growbot</b>"), "**Growbot**");
    }

    #[test]
    fn strip_tags_collapses_whitespace() {
        assert_eq!(strip_tags("<p>a\n  b</p> <span>c</span>"), "a b c");
    }
}
