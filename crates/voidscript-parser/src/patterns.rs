/// Keyword prefixes and capture patterns for each directive family
///
/// Dispatch uses plain prefix tests; the regexes only extract captures once a
/// family has been chosen.

use regex::Regex;
use std::sync::LazyLock;

pub const FUNC_KEYWORD: &str = "func";
pub const LOOP_KEYWORD: &str = "loop";
pub const IF_KEYWORD: &str = "if";
pub const ELIF_KEYWORD: &str = "elif";
pub const ELSE_KEYWORD: &str = "else";
pub const DEF_KEYWORD: &str = "def";
pub const PRINT_CALL: &str = "print(";
pub const COMMENT_MARKER: &str = "#";

/// `func [<params>](<name>):`
/// Group 1: parameter text, group 2: function name
pub static FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^func\s+\[(.*?)\]\s*\((.*?)\):").expect("function pattern is valid")
});

/// `loop(<label>):`
pub static LOOP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^loop\((.*?)\):").expect("loop pattern is valid"));

/// `if [<a>] = [<b>]:`
pub static IF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^if\s+\[(.*?)\]\s*=\s*\[(.*?)\]:").expect("if pattern is valid")
});

/// `elif [<cond>]:`
pub static ELIF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^elif\s+\[(.*?)\]:").expect("elif pattern is valid"));

/// `def on_<event>(<param>):`
/// Group 1: event name without the `on_` prefix, group 2: parameter
pub static EVENT_HOOK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^def\s+on_(\w+)\((.*?)\):").expect("event hook pattern is valid")
});

/// `<ident> = [ ... ]`, anchored at both ends
pub static COLLECTION_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+\s*=\s*\[.*\]$").expect("collection literal pattern is valid")
});

/// `print(<expr>)`, shortest match
pub static BROADCAST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^print\((.*?)\)").expect("broadcast pattern is valid"));
