use voidscript_parser::{dump::dump_script, parse};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <file.void>", args[0]);
        eprintln!();
        eprintln!("Classify every line of a VoidScript file and dump the result");
        process::exit(1);
    }

    let filename = &args[1];

    // Read file
    let input = match fs::read_to_string(filename) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", filename, e);
            process::exit(1);
        }
    };

    let script = parse(&input);
    println!("{}", dump_script(&script));
}
