use winnow::{
    combinator::{alt, delimited, opt},
    stream::AsChar,
    token::take_while,
    PResult, Parser,
};

/// A recognized section header, recorded at its first divider's line index.
///
/// The scanner appends one synthetic record at `(line_count, "END")` so the
/// last real header has a closing boundary to pair with.
#[derive(Debug, PartialEq)]
pub struct HeaderMatch<'s> {
    pub line: usize,
    pub raw_name: &'s str,
}

fn ws<'s>(input: &mut &'s str) -> PResult<&'s str> {
    take_while(0.., (AsChar::is_space, '\n', '\r')).parse_next(input)
}

/// ```text
/// /* ==============
///    ============== */
/// ```
/// Both the opening and the closing form of a divider line: a run of `=`
/// with a comment marker on at least one side, nothing else. A bare `=` run
/// (a decorative line inside an ordinary comment block) is not a divider.
fn divider(input: &mut &str) -> PResult<()> {
    delimited(
        ws,
        alt((
            ("/*", ws, take_while(1.., '='), ws, opt("*/")).void(),
            (take_while(1.., '='), ws, "*/").void(),
        )),
        ws,
    )
    .parse_next(input)
}

pub fn is_divider(line: &str) -> bool {
    divider.parse(line).is_ok()
}

/// The title on a header's middle line: leading whitespace, a non-empty
/// title, an optional trailing `COMPONENT` word.
pub fn header_title(line: &str) -> Option<&str> {
    if !line.starts_with(char::is_whitespace) {
        return None;
    }

    let title = line.trim();
    if title.is_empty() {
        return None;
    }

    Some(match title.strip_suffix("COMPONENT") {
        Some(rest) if rest.ends_with(char::is_whitespace) => rest.trim_end(),
        _ => title,
    })
}

/// Single forward pass over the source lines collecting every
/// (divider, title, divider) triplet.
pub fn scan_headers<'s>(lines: &[&'s str]) -> Vec<HeaderMatch<'s>> {
    let mut headers = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if is_divider(lines[i]) {
            if let Some(raw_name) = lines.get(i + 1).and_then(|l| header_title(l)) {
                if lines.get(i + 2).is_some_and(|l| is_divider(l)) {
                    headers.push(HeaderMatch { line: i, raw_name });
                }
            }
        }
        // Advance one line even after a match, so degenerate overlapping
        // triplets behave the same as a plain linear scan.
        i += 1;
    }

    headers.push(HeaderMatch {
        line: lines.len(),
        raw_name: "END",
    });
    headers
}
