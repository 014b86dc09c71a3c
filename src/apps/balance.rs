use tracing::trace;

use crate::stack::Stack;

/// Checks that every `(` has a matching `)` after it. Other characters are
/// ignored, so the empty string is balanced.
pub fn is_balanced_parens(text: &str) -> bool {
    let mut open = Stack::new();

    for c in text.chars() {
        match c {
            '(' => open.push(c),
            ')' => {
                if open.pop().is_none() {
                    return false;
                }
            }
            _ => {}
        }
    }

    open.is_empty()
}

fn opener_for(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// Like [`is_balanced_parens`] for `()`, `[]` and `{}`: each closer must
/// match the most recent unclosed opener.
pub fn is_balanced(text: &str) -> bool {
    let mut open = Stack::new();

    for (pos, c) in text.char_indices() {
        match c {
            '(' | '[' | '{' => open.push(c),
            ')' | ']' | '}' => {
                let expected = opener_for(c);
                let found = open.pop();
                if found != expected {
                    trace!(pos, closer = %c, ?found, "unmatched delimiter");
                    return false;
                }
            }
            _ => {}
        }
    }

    open.is_empty()
}

#[derive(Debug, PartialEq, Eq)]
enum Tag<'a> {
    Open(&'a str),
    Close(&'a str),
}

/// Splits markup into its tags. Returns `None` for a `<` that never closes
/// or a tag without a name. Comments, doctypes and self-closing tags are
/// skipped.
fn tags(code: &str) -> Option<Vec<Tag<'_>>> {
    let mut found = Vec::new();
    let mut rest = code;

    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let end = after.find('>')?;
        let inner = after[..end].trim();
        rest = &after[end + 1..];

        if inner.starts_with('!') || inner.ends_with('/') {
            continue;
        }

        let tag = match inner.strip_prefix('/') {
            Some(name) => Tag::Close(name.trim()),
            None => Tag::Open(inner.split_whitespace().next().unwrap_or_default()),
        };

        match tag {
            Tag::Open("") | Tag::Close("") => return None,
            tag => found.push(tag),
        }
    }

    Some(found)
}

/// Checks that `<tag>` / `</tag>` pairs are balanced and properly nested.
/// Tag names compare case-insensitively; attributes are ignored.
pub fn is_balanced_html(code: &str) -> bool {
    let Some(tags) = tags(code) else {
        return false;
    };

    let mut open = Stack::new();

    for tag in tags {
        match tag {
            Tag::Open(name) => open.push(name),
            Tag::Close(name) => match open.pop() {
                Some(top) if top.eq_ignore_ascii_case(name) => {}
                top => {
                    trace!(closing = name, ?top, "tag mismatch");
                    return false;
                }
            },
        }
    }

    open.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("()", true)]
    #[case("(())", true)]
    #[case("(()())", true)]
    #[case("(()", false)]
    #[case("())", false)]
    #[case(")(", false)]
    #[case("", true)]
    #[case("f(x) * (y + 1)", true)]
    fn parens(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_balanced_parens(text), expected);
    }

    #[rstest]
    #[case("{[()]}", true)]
    #[case("{[(])}", false)]
    #[case("{[}", false)]
    #[case("a[i] = {b: (c)}", true)]
    #[case("]", false)]
    #[case("((", false)]
    fn delimiters(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_balanced(text), expected);
    }

    #[rstest]
    #[case("<html><body><h1>Título</h1></body></html>", true)]
    #[case("<html><body></html></body>", false)]
    #[case("<div class=\"x\"><p>hi<br/></p></DIV>", true)]
    #[case("<!DOCTYPE html><p></p>", true)]
    #[case("<p>", false)]
    #[case("</p>", false)]
    #[case("<p", false)]
    #[case("<>", false)]
    #[case("plain text", true)]
    fn html(#[case] code: &str, #[case] expected: bool) {
        assert_eq!(is_balanced_html(code), expected);
    }

    #[test]
    fn tag_extraction() {
        assert_eq!(
            tags("<a href='x'>link</a>"),
            Some(vec![Tag::Open("a"), Tag::Close("a")])
        );
    }
}
