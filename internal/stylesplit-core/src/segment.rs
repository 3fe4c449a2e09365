use crate::scan::HeaderMatch;

/// One named section's contiguous slice of the source, header lines
/// included. Consecutive segments share a boundary: `segment[i].end ==
/// segment[i + 1].start`.
#[derive(Debug, PartialEq)]
pub struct Segment<'s> {
    pub start: usize,
    pub end: usize,
    pub raw_name: &'s str,
    pub lines: &'s [&'s str],
}

/// Pair every header with the next one's start. With no real headers only
/// the synthetic boundary exists and the result is empty.
pub fn split_segments<'s>(lines: &'s [&'s str], headers: &[HeaderMatch<'s>]) -> Vec<Segment<'s>> {
    headers
        .windows(2)
        .map(|pair| Segment {
            start: pair[0].line,
            end: pair[1].line,
            raw_name: pair[0].raw_name,
            lines: &lines[pair[0].line..pair[1].line],
        })
        .collect()
}
