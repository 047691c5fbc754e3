/// Line dispatcher
///
/// Routes a trimmed line to the first matching directive family. Order
/// matters because several keywords share prefixes (`if`/`ifdef`,
/// `loop`/`looper`), so the checks below must stay in this sequence.

use crate::directive::{CollectionKind, Directive, DirectiveFamily};
use crate::patterns::{self, *};
use tracing::debug;

/// Classify one trimmed line
pub fn classify(line: &str) -> Directive<'_> {
    let directive = if line.starts_with(FUNC_KEYWORD) {
        classify_function(line)
    } else if line.starts_with(LOOP_KEYWORD) {
        classify_loop(line)
    } else if line.starts_with(IF_KEYWORD) {
        classify_if(line)
    } else if line.starts_with(ELIF_KEYWORD) {
        classify_elif(line)
    } else if line.starts_with(ELSE_KEYWORD) {
        Directive::Else
    } else if line.starts_with(DEF_KEYWORD) {
        classify_event_hook(line)
    } else if patterns::COLLECTION_LITERAL.is_match(line) {
        classify_collection(line)
    } else if line.starts_with(PRINT_CALL) {
        classify_broadcast(line)
    } else if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        Directive::Comment(line)
    } else {
        Directive::Passthrough(line)
    };

    if let Directive::Dropped(family) = directive {
        debug!(?family, line, "directive did not match its pattern, dropping");
    }

    directive
}

fn classify_function(line: &str) -> Directive<'_> {
    match patterns::FUNCTION.captures(line) {
        Some(caps) => Directive::Function {
            params: caps.get(1).map_or("", |m| m.as_str()),
            name: caps.get(2).map_or("", |m| m.as_str()),
        },
        None => Directive::Dropped(DirectiveFamily::Function),
    }
}

fn classify_loop(line: &str) -> Directive<'_> {
    match patterns::LOOP.captures(line) {
        Some(caps) => Directive::Loop {
            label: caps.get(1).map_or("", |m| m.as_str()),
        },
        None => Directive::Dropped(DirectiveFamily::Loop),
    }
}

fn classify_if(line: &str) -> Directive<'_> {
    match patterns::IF.captures(line) {
        Some(caps) => Directive::If {
            left: caps.get(1).map_or("", |m| m.as_str()),
            right: caps.get(2).map_or("", |m| m.as_str()),
        },
        None => Directive::Dropped(DirectiveFamily::If),
    }
}

fn classify_elif(line: &str) -> Directive<'_> {
    match patterns::ELIF.captures(line) {
        Some(caps) => Directive::Elif {
            condition: caps.get(1).map_or("", |m| m.as_str()),
        },
        None => Directive::Dropped(DirectiveFamily::Elif),
    }
}

fn classify_event_hook(line: &str) -> Directive<'_> {
    match patterns::EVENT_HOOK.captures(line) {
        Some(caps) => Directive::EventHook {
            event: caps.get(1).map_or("", |m| m.as_str()),
            param: caps.get(2).map_or("", |m| m.as_str()),
        },
        None => Directive::Dropped(DirectiveFamily::EventHook),
    }
}

/// The category comes from keyword containment anywhere in the line, not
/// from the assigned identifier.
fn classify_collection(line: &str) -> Directive<'_> {
    CollectionKind::ALL
        .into_iter()
        .find(|kind| line.contains(kind.keyword()))
        .map_or(
            Directive::Dropped(DirectiveFamily::CollectionLiteral),
            Directive::CollectionLiteral,
        )
}

fn classify_broadcast(line: &str) -> Directive<'_> {
    match patterns::BROADCAST.captures(line) {
        Some(caps) => Directive::Broadcast {
            message: caps.get(1).map_or("", |m| m.as_str()),
        },
        None => Directive::Dropped(DirectiveFamily::Broadcast),
    }
}
