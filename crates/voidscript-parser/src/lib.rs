pub mod classify;
pub mod directive;
pub mod dump;
pub mod metadata;
pub mod patterns;
pub mod source;

pub use classify::classify;
pub use directive::*;
pub use metadata::{extract_metadata, PluginMetadata, DEFAULT_PLUGIN_NAME};
pub use source::SourceDocument;

/// A VoidScript file after metadata extraction and per-line classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script<'input> {
    pub metadata: PluginMetadata,
    pub lines: Vec<Line<'input>>,
}

/// Parse a VoidScript file from a string
///
/// Never fails: lines that match no pattern are kept as passthrough text or
/// recorded as dropped.
pub fn parse(input: &str) -> Script<'_> {
    let document = SourceDocument::new(input);
    let metadata = extract_metadata(document.lines().iter().copied());

    let lines = document
        .lines()
        .iter()
        .enumerate()
        .map(|(i, &raw)| Line {
            number: i + 1,
            directive: classify(raw.trim()),
        })
        .collect();

    Script { metadata, lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let script = parse("");
        assert_eq!(script.metadata.name, DEFAULT_PLUGIN_NAME);
        assert!(script.lines.is_empty());
    }

    #[test]
    fn test_header_lines_are_still_classified() {
        let script = parse("#info\nname: \"Greeter\"\nprint(\"hi\")\n");
        assert_eq!(script.metadata.name, "Greeter");
        assert_eq!(script.lines.len(), 3);
        assert_eq!(script.lines[0].directive, Directive::Comment("#info"));
        assert_eq!(
            script.lines[1].directive,
            Directive::Passthrough("name: \"Greeter\"")
        );
        assert_eq!(
            script.lines[2].directive,
            Directive::Broadcast { message: "\"hi\"" }
        );
    }

    #[test]
    fn test_lines_are_trimmed_before_classification() {
        let script = parse("    func [int x](tick):\n\tprint(x)");
        assert_eq!(
            script.lines[0].directive,
            Directive::Function { params: "int x", name: "tick" }
        );
        assert_eq!(script.lines[1].directive, Directive::Broadcast { message: "x" });
    }

    #[test]
    fn test_carriage_return_only_source() {
        let script = parse("name: \"A\"\rprint(1)\r");
        assert_eq!(script.metadata.name, "A");
        assert_eq!(script.lines.len(), 2);
        assert_eq!(script.lines[1].directive, Directive::Broadcast { message: "1" });
    }

    #[test]
    fn test_line_numbers_follow_source_order() {
        let script = parse("a\n\nb");
        let numbers: Vec<_> = script.lines.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_nested_lines_are_not_grouped() {
        let script = parse("loop(i):\n    print(i)\nelse:");
        assert_eq!(script.lines[0].directive, Directive::Loop { label: "i" });
        assert_eq!(script.lines[1].directive, Directive::Broadcast { message: "i" });
        assert_eq!(script.lines[2].directive, Directive::Else);
    }
}
