//! Self-closing custom elements
//!
//! HTML only honours `/>` on void elements. The tree builder reads `<Pattern slug="a" />` as an
//! open tag, so every following sibling would end up inside the pattern, and custom handlers drop
//! children. Before parsing, self-closing tags of registered handlers are expanded to an explicit
//! `<Tag ...></Tag>` pair. Other tags are left to the parser.

use crate::handlers::HandlerRegistry;
use std::borrow::Cow;

/// Expand `<Tag ... />` into `<Tag ...></Tag>` for every tag with a registered handler
pub(crate) fn expand_self_closing<'a>(
    source: &'a str,
    handlers: &HandlerRegistry,
) -> Cow<'a, str> {
    let mut output = String::new();
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = source[pos..].find('<') {
        let start = pos + offset;
        let rest = &source[start..];

        if rest.starts_with("<!--") {
            match rest.find("-->") {
                Some(close) => {
                    pos = start + close + 3;
                    continue;
                }
                None => break,
            }
        }

        let name_start = start + 1;
        if !source[name_start..].starts_with(|c: char| c.is_ascii_alphabetic()) {
            pos = name_start;
            continue;
        }
        let name_end = source[name_start..]
            .find(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
            .map_or(source.len(), |i| name_start + i);
        let Some((end, self_closing)) = scan_tag(source, name_end) else {
            break;
        };

        let name = &source[name_start..name_end];
        if self_closing && handlers.lookup_by_tag(&name.to_ascii_lowercase()).is_some() {
            // `end` is the `>`, the `/` sits right before it
            output.push_str(&source[copied..end - 1]);
            output.push_str("></");
            output.push_str(name);
            output.push('>');
            copied = end + 1;
        }
        pos = end + 1;
    }

    if copied == 0 {
        Cow::Borrowed(source)
    } else {
        output.push_str(&source[copied..]);
        Cow::Owned(output)
    }
}

/// Find the `>` closing a start tag whose attributes begin at `from`.
///
/// Returns its byte offset and whether the tag ends in `/>`. Quoted values may contain `>` and
/// `/`; a slash inside an unquoted value (`a=b/>`) belongs to the value, as in the HTML tokenizer.
fn scan_tag(source: &str, from: usize) -> Option<(usize, bool)> {
    let mut quote: Option<char> = None;
    let mut unquoted = false;
    let mut expecting_value = false;
    let mut self_closing = false;

    for (offset, c) in source[from..].char_indices() {
        let index = from + offset;
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        if unquoted {
            match c {
                '>' => return Some((index, false)),
                c if c.is_ascii_whitespace() => unquoted = false,
                _ => {}
            }
            continue;
        }
        match c {
            '>' => return Some((index, self_closing)),
            '/' => {
                self_closing = true;
                expecting_value = false;
                continue;
            }
            '=' => expecting_value = true,
            '"' | '\'' if expecting_value => {
                quote = Some(c);
                expecting_value = false;
            }
            c if c.is_ascii_whitespace() => {}
            _ => {
                if expecting_value {
                    unquoted = true;
                    expecting_value = false;
                }
            }
        }
        self_closing = false;
    }
    None
}
