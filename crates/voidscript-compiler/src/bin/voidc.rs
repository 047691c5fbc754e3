/// VoidScript compiler CLI

use std::path::PathBuf;
use std::process;
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use voidscript_compiler::{Compiler, CompileOptions};

#[derive(Parser, Debug)]
#[command(name = "voidc")]
#[command(about = "VoidScript compiler - turns VoidScript into a packaged Bukkit plugin")]
#[command(version)]
struct Args {
    /// Input VoidScript source file
    #[arg(value_name = "FILE", default_value = "main.void")]
    input: PathBuf,

    /// Output directory for generated files
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Print the generated Java and exit without writing files
    #[arg(long)]
    emit_only: bool,

    /// Write the Java file but skip javac and jar
    #[arg(long)]
    no_package: bool,

    /// Also write plugin.yml and add it to the jar
    #[arg(long)]
    descriptor: bool,

    /// Classpath passed to javac (e.g. the Bukkit API jar)
    #[arg(long, value_name = "CLASSPATH")]
    classpath: Option<String>,

    /// javac executable
    #[arg(long, env = "VOIDC_JAVAC", default_value = "javac")]
    javac: PathBuf,

    /// jar executable
    #[arg(long, env = "VOIDC_JAR", default_value = "jar")]
    jar: PathBuf,

    /// Exit with an error when javac or jar fails
    #[arg(long)]
    strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Compilation failed: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut options = CompileOptions::new(&args.input)
        .package(!args.no_package)
        .descriptor(args.descriptor)
        .javac(args.javac)
        .jar(args.jar)
        .strict(args.strict);

    if let Some(output) = args.output {
        options = options.output_dir(output);
    }
    if let Some(classpath) = args.classpath {
        options = options.classpath(classpath);
    }

    let compiler = Compiler::new(options);

    if args.emit_only {
        let output = compiler
            .compile()
            .with_context(|| format!("translating {}", args.input.display()))?;
        print!("{}", output.java);
        return Ok(());
    }

    let artifacts = compiler
        .run()
        .with_context(|| format!("building {}", args.input.display()))?;

    tracing::info!(file = %artifacts.java_file.display(), "generated plugin source");
    if let Some(report) = &artifacts.toolchain {
        if report.is_success() {
            tracing::info!(jar = %artifacts.jar_file.display(), "packaged plugin");
        } else {
            tracing::warn!(
                compile = %report.compile,
                archive = %report.archive,
                "packaging did not complete cleanly"
            );
        }
    }

    Ok(())
}
