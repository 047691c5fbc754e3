/// Code generation module
///
/// Turns classified VoidScript lines into Java fragments and assembles them
/// into a single Bukkit plugin class.

use crate::error::Result;
use std::fmt::Write as _;
use tracing::debug;
use voidscript_parser::{CollectionKind, Directive, Script};

/// The generated plugin class: a fixed lifecycle method followed by one
/// fragment per emitting source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    class_name: String,
    fragments: Vec<String>,
}

impl GeneratedUnit {
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Fragments in source order
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// `<ClassName>.java`
    pub fn file_name(&self) -> String {
        format!("{}.java", self.class_name)
    }

    /// Render the complete compilation unit
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "public class {} extends JavaPlugin {{", self.class_name)?;
        out.push_str("    @Override\n");
        out.push_str("    public void onEnable() {\n");
        writeln!(out, "        getLogger().info(\"{} Enabled\");", self.class_name)?;
        // `main` is written by the plugin author, never generated
        out.push_str("        main();\n");
        out.push_str("    }\n\n");

        for fragment in &self.fragments {
            out.push_str(fragment);
            out.push('\n');
        }

        out.push_str("}\n");
        Ok(out)
    }
}

/// Java code generator
pub struct CodeGenerator {
    /// Fragments emitted so far
    fragments: Vec<String>,
}

impl CodeGenerator {
    /// Create a new code generator
    pub fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Generate the plugin class for a parsed script
    pub fn generate(&mut self, script: &Script) -> GeneratedUnit {
        for line in &script.lines {
            match emit_directive(&line.directive) {
                Some(fragment) => self.fragments.push(fragment),
                None => debug!(line = line.number, "no fragment emitted"),
            }
        }

        debug!(
            class = %script.metadata.name,
            fragments = self.fragments.len(),
            "generated plugin class"
        );

        GeneratedUnit {
            class_name: script.metadata.name.clone(),
            fragments: std::mem::take(&mut self.fragments),
        }
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Produce the Java fragment for one classified line, or `None` when the
/// line was dropped
pub fn emit_directive(directive: &Directive) -> Option<String> {
    let fragment = match directive {
        Directive::Function { params, name } => function_stub(params, name),
        Directive::Loop { .. } => loop_stub(),
        Directive::If { left, right } => format!(
            "    if ({} == {}) {{\n        // If logic here\n    }}",
            left, right
        ),
        Directive::Elif { condition } => format!(
            "    else if ({}) {{\n        // Else if logic here\n    }}",
            condition
        ),
        Directive::Else => "    else {\n        // Else logic here\n    }".to_string(),
        Directive::EventHook { event, param } => event_hook(event, param),
        Directive::CollectionLiteral(kind) => collection_declaration(*kind).to_string(),
        Directive::Broadcast { message } => broadcast(message),
        Directive::Comment(text) => format!("    // {}", text),
        Directive::Passthrough(text) => format!("    {}", text),
        Directive::Dropped(_) => return None,
    };
    Some(fragment)
}

fn function_stub(params: &str, name: &str) -> String {
    format!(
        "    public void {}({}) {{\n        // Function logic here\n        return;\n    }}",
        name, params
    )
}

/// The loop label is not used by the generated code
fn loop_stub() -> String {
    "    while (true) {\n        // Looping logic here\n        // break;\n    }".to_string()
}

fn event_hook(event: &str, param: &str) -> String {
    format!(
        "    public void on{}({}) {{\n        // Event handling logic here\n    }}",
        capitalize(event),
        param
    )
}

fn collection_declaration(kind: CollectionKind) -> &'static str {
    match kind {
        CollectionKind::List => "    List<String> list = new ArrayList<>(); // List initialization",
        CollectionKind::Dict => {
            "    Map<String, String> dict = new HashMap<>(); // Dictionary initialization"
        }
        CollectionKind::Set => "    Set<String> set = new HashSet<>(); // Set initialization",
        CollectionKind::Tuple => "    Object[] tuple = new Object[3]; // Tuple initialization",
    }
}

/// The message is copied as a raw Java expression, no escaping
fn broadcast(message: &str) -> String {
    format!(
        "    for (Player p : Bukkit.getOnlinePlayers()) {{\n        p.sendMessage({});\n    }}",
        message
    )
}

/// Title-case the first character and lower-case the rest
///
/// The rest is lower-cased in the context of the whole word, so a final
/// sigma after a cased first letter still becomes `ς`.
fn capitalize(word: &str) -> String {
    let Some(first) = word.chars().next() else {
        return String::new();
    };

    // Lowercasing the first char never depends on context, so its mapping
    // is a prefix of the whole word's lowercase form
    let first_lower_len: usize = first.to_lowercase().map(char::len_utf8).sum();
    let word_lower = word.to_lowercase();

    let mut out = titlecase(first);
    out.push_str(&word_lower[first_lower_len..]);
    out
}

/// Unicode titlecase mapping of one character
///
/// Only characters whose titlecase differs from their uppercase are listed;
/// everything else falls back to `char::to_uppercase`.
fn titlecase(c: char) -> String {
    let mapped = match c {
        '\u{01C4}'..='\u{01C6}' => "\u{01C5}",
        '\u{01C7}'..='\u{01C9}' => "\u{01C8}",
        '\u{01CA}'..='\u{01CC}' => "\u{01CB}",
        '\u{01F1}'..='\u{01F3}' => "\u{01F2}",
        '\u{00DF}' => "Ss",
        '\u{FB00}' => "Ff",
        '\u{FB01}' => "Fi",
        '\u{FB02}' => "Fl",
        '\u{FB03}' => "Ffi",
        '\u{FB04}' => "Ffl",
        '\u{FB05}' | '\u{FB06}' => "St",
        '\u{0587}' => "\u{0535}\u{0582}",
        '\u{FB13}' => "\u{0544}\u{0576}",
        '\u{FB14}' => "\u{0544}\u{0565}",
        '\u{FB15}' => "\u{0544}\u{056B}",
        '\u{FB16}' => "\u{054E}\u{0576}",
        '\u{FB17}' => "\u{0544}\u{056D}",
        '\u{1FB2}' => "\u{1FBA}\u{0345}",
        '\u{1FB4}' => "\u{0386}\u{0345}",
        '\u{1FB7}' => "\u{0391}\u{0342}\u{0345}",
        '\u{1FC2}' => "\u{1FCA}\u{0345}",
        '\u{1FC4}' => "\u{0389}\u{0345}",
        '\u{1FC7}' => "\u{0397}\u{0342}\u{0345}",
        '\u{1FF2}' => "\u{1FFA}\u{0345}",
        '\u{1FF4}' => "\u{038F}\u{0345}",
        '\u{1FF7}' => "\u{03A9}\u{0342}\u{0345}",
        // Greek letters with ypogegrammeni title-case to the prosgegrammeni form
        '\u{1F80}'..='\u{1FAF}' => {
            return char::from_u32(c as u32 | 0x8).map(String::from).unwrap_or_default();
        }
        '\u{1FB3}' | '\u{1FBC}' => "\u{1FBC}",
        '\u{1FC3}' | '\u{1FCC}' => "\u{1FCC}",
        '\u{1FF3}' | '\u{1FFC}' => "\u{1FFC}",
        _ => return c.to_uppercase().collect(),
    };
    mapped.to_string()
}
