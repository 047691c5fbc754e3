/// Classification dumping utilities for testing and debugging
///
/// Provides a human-readable listing of a parsed script.

use crate::directive::*;
use crate::Script;
use std::fmt::Write as FmtWrite;

/// Dump a parsed script as one line per source line
pub fn dump_script(script: &Script) -> String {
    let mut out = String::new();
    write_script(&mut out, script).unwrap();
    out
}

fn write_script(out: &mut String, script: &Script) -> std::fmt::Result {
    writeln!(out, "Script:")?;
    writeln!(out, "  Metadata:")?;
    writeln!(out, "    name: {}", script.metadata.name)?;
    if let Some(version) = &script.metadata.version {
        writeln!(out, "    version: {}", version)?;
    }
    if let Some(author) = &script.metadata.author {
        writeln!(out, "    author: {}", author)?;
    }
    writeln!(out, "  Lines:")?;
    for line in &script.lines {
        write!(out, "    {:>4}: ", line.number)?;
        write_directive(out, &line.directive)?;
        out.push('\n');
    }
    Ok(())
}

fn write_directive(out: &mut String, directive: &Directive) -> std::fmt::Result {
    match directive {
        Directive::Function { params, name } => write!(out, "Function {} [{}]", name, params),
        Directive::Loop { label } => write!(out, "Loop ({})", label),
        Directive::If { left, right } => write!(out, "If [{}] = [{}]", left, right),
        Directive::Elif { condition } => write!(out, "Elif [{}]", condition),
        Directive::Else => write!(out, "Else"),
        Directive::EventHook { event, param } => write!(out, "EventHook on_{} ({})", event, param),
        Directive::CollectionLiteral(kind) => write!(out, "CollectionLiteral {}", kind.keyword()),
        Directive::Broadcast { message } => write!(out, "Broadcast {}", message),
        Directive::Comment(text) => write!(out, "Comment {:?}", text),
        Directive::Passthrough(text) => write!(out, "Passthrough {:?}", text),
        Directive::Dropped(family) => write!(out, "Dropped ({:?})", family),
    }
}
