/// Plugin header extraction
///
/// Header directives (`name:`, `version:`, `author:`) are read in a single
/// pass over the raw lines before any code is generated. The lines stay in
/// the document and are classified again like any other line.

/// Plugin name used when the script has no `name:` header
pub const DEFAULT_PLUGIN_NAME: &str = "UnnamedPlugin";

const INFO_MARKER: &str = "#info";
const NAME_KEY: &str = "name:";
const VERSION_KEY: &str = "version:";
const AUTHOR_KEY: &str = "author:";

/// Values read from the script header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginMetadata {
    /// Class and artifact name
    pub name: String,
    pub version: Option<String>,
    pub author: Option<String>,
}

impl Default for PluginMetadata {
    fn default() -> Self {
        Self {
            name: DEFAULT_PLUGIN_NAME.to_string(),
            version: None,
            author: None,
        }
    }
}

/// Scan every line for header directives.
///
/// Keys are matched against the untrimmed line, so an indented `name:` is not
/// a header. When a key repeats, the last occurrence wins.
pub fn extract_metadata<'a>(lines: impl IntoIterator<Item = &'a str>) -> PluginMetadata {
    let mut metadata = PluginMetadata::default();

    for line in lines {
        if line.starts_with(INFO_MARKER) {
            continue;
        } else if line.starts_with(NAME_KEY) {
            metadata.name = header_value(line, NAME_KEY);
        } else if line.starts_with(VERSION_KEY) {
            metadata.version = Some(header_value(line, VERSION_KEY));
        } else if line.starts_with(AUTHOR_KEY) {
            metadata.author = Some(header_value(line, AUTHOR_KEY));
        }
    }

    metadata
}

/// Text between the first and second occurrence of `key`, with whitespace
/// and then double quotes stripped from both ends.
fn header_value(line: &str, key: &str) -> String {
    line.split(key)
        .nth(1)
        .unwrap_or_default()
        .trim()
        .trim_matches('"')
        .to_string()
}
