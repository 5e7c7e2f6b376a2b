//! Syntax highlighting for the read-only schema preview.
//!
//! Produces HTML with one `<span class="json-...">` per token. Works on any
//! text, valid JSON or not: unknown characters pass through escaped, and an
//! unterminated string runs to the end of the input.

/// Highlight `text` as JSON and return escaped HTML.
pub fn highlight_json(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '"' => {
                let end = string_end(&chars, i);
                let token: String = chars[i..end].iter().collect();
                let class = if next_non_space(&chars, end) == Some(':') {
                    "json-key"
                } else {
                    "json-string"
                };
                push_span(&mut out, class, &token);
                i = end;
            }
            '{' | '}' | '[' | ']' | ',' | ':' => {
                push_span(&mut out, "json-punct", &c.to_string());
                i += 1;
            }
            '-' | '0'..='9' => {
                let end = scan_while(&chars, i + 1, |ch| {
                    ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-')
                });
                let token: String = chars[i..end].iter().collect();
                push_span(&mut out, "json-number", &token);
                i = end;
            }
            ch if ch.is_ascii_alphabetic() => {
                let end = scan_while(&chars, i, |ch| ch.is_ascii_alphanumeric());
                let word: String = chars[i..end].iter().collect();
                if matches!(word.as_str(), "true" | "false" | "null") {
                    push_span(&mut out, "json-literal", &word);
                } else {
                    out.push_str(&html_escape(&word));
                }
                i = end;
            }
            _ => {
                out.push_str(&html_escape(&c.to_string()));
                i += 1;
            }
        }
    }

    out
}

/// Index just past the closing quote of the string starting at `start`.
fn string_end(chars: &[char], start: usize) -> usize {
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '"' => return i + 1,
            _ => i += 1,
        }
    }
    chars.len()
}

fn scan_while(chars: &[char], start: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut i = start;
    while i < chars.len() && pred(chars[i]) {
        i += 1;
    }
    i
}

fn next_non_space(chars: &[char], start: usize) -> Option<char> {
    chars.iter().skip(start).copied().find(|c| !c.is_whitespace())
}

fn push_span(out: &mut String, class: &str, token: &str) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    out.push_str(&html_escape(token));
    out.push_str("</span>");
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
