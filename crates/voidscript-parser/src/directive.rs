/// Classified line types for VoidScript
///
/// Each source line becomes exactly one `Directive`. Captures borrow from the
/// source text.

/// Result of classifying a single trimmed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive<'input> {
    /// Function declaration: `func [String s](greet):`
    Function {
        params: &'input str,
        name: &'input str,
    },
    /// Loop: `loop(i):`
    Loop { label: &'input str },
    /// Equality test: `if [a] = [b]:`
    If {
        left: &'input str,
        right: &'input str,
    },
    /// `elif [cond]:`
    Elif { condition: &'input str },
    /// `else:`
    Else,
    /// Event hook: `def on_join(PlayerJoinEvent e):`
    EventHook {
        event: &'input str,
        param: &'input str,
    },
    /// Bracketed literal assignment: `x = [list]`
    CollectionLiteral(CollectionKind),
    /// Broadcast to every online player: `print("hi")`
    Broadcast { message: &'input str },
    /// Blank line or `#` comment, text kept as written
    Comment(&'input str),
    /// Unrecognized line, emitted verbatim
    Passthrough(&'input str),
    /// Line routed to a handler whose pattern did not match
    Dropped(DirectiveFamily),
}

/// Handler a line was routed to by its leading keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveFamily {
    Function,
    Loop,
    If,
    Elif,
    EventHook,
    CollectionLiteral,
    Broadcast,
}

/// Container category named inside a collection literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    List,
    Dict,
    Set,
    Tuple,
}

impl CollectionKind {
    /// Keywords in detection order
    pub const ALL: [CollectionKind; 4] = [
        CollectionKind::List,
        CollectionKind::Dict,
        CollectionKind::Set,
        CollectionKind::Tuple,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            CollectionKind::List => "list",
            CollectionKind::Dict => "dict",
            CollectionKind::Set => "set",
            CollectionKind::Tuple => "tuple",
        }
    }
}

/// A classified line with its 1-based position in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'input> {
    pub number: usize,
    pub directive: Directive<'input>,
}
