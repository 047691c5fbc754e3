/// Source document loading
///
/// A VoidScript file is read once and kept as an ordered list of raw lines.
/// Line order drives emission order but never nesting.

/// An immutable, ordered view over the lines of a VoidScript file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument<'input> {
    lines: Vec<&'input str>,
}

impl<'input> SourceDocument<'input> {
    /// Split source text into lines terminated by `\n`, `\r\n` or a bare `\r`
    pub fn new(input: &'input str) -> Self {
        Self {
            lines: split_lines(input),
        }
    }

    /// Raw lines, untrimmed, in source order
    pub fn lines(&self) -> &[&'input str] {
        &self.lines
    }
}

/// Universal-newline split; a terminator at the very end adds no empty line
fn split_lines(input: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                lines.push(&rest[..end]);
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}
