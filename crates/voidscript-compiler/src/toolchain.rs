/// JDK toolchain invocation
///
/// Runs `javac` and then `jar` in the output directory. A failing step never
/// stops the next one; every outcome is recorded in a `ToolchainReport` and
/// callers decide whether a failure is fatal.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{info, warn};

use crate::error::{CompileError, Result};

pub const DEFAULT_JAVAC: &str = "javac";
pub const DEFAULT_JAR: &str = "jar";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStep {
    Compile,
    Archive,
}

impl fmt::Display for ToolStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolStep::Compile => write!(f, "compile"),
            ToolStep::Archive => write!(f, "archive"),
        }
    }
}

/// Result of a single toolchain step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    /// The tool ran and exited unsuccessfully; `None` when killed by a signal
    Failed { code: Option<i32> },
    /// The tool could not be located or spawned
    Unavailable(String),
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Succeeded)
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Succeeded => write!(f, "succeeded"),
            StepOutcome::Failed { code: Some(code) } => write!(f, "failed with exit code {}", code),
            StepOutcome::Failed { code: None } => write!(f, "was terminated by a signal"),
            StepOutcome::Unavailable(reason) => write!(f, "could not run: {}", reason),
        }
    }
}

/// Outcomes of the compile and archive steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainReport {
    pub compile: StepOutcome,
    pub archive: StepOutcome,
}

impl ToolchainReport {
    pub fn is_success(&self) -> bool {
        self.compile.is_success() && self.archive.is_success()
    }

    /// Turn the first failed step into an error
    pub fn ensure_success(&self) -> Result<()> {
        if !self.compile.is_success() {
            return Err(CompileError::toolchain(ToolStep::Compile, self.compile.clone()));
        }
        if !self.archive.is_success() {
            return Err(CompileError::toolchain(ToolStep::Archive, self.archive.clone()));
        }
        Ok(())
    }
}

/// Locations and flags for the JDK tools
#[derive(Debug, Clone)]
pub struct Toolchain {
    javac: PathBuf,
    jar: PathBuf,
    classpath: Option<String>,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self::new(DEFAULT_JAVAC, DEFAULT_JAR)
    }
}

impl Toolchain {
    pub fn new(javac: impl Into<PathBuf>, jar: impl Into<PathBuf>) -> Self {
        Self {
            javac: javac.into(),
            jar: jar.into(),
            classpath: None,
        }
    }

    /// Classpath handed to `javac` via `-cp`, typically the Bukkit API jar
    pub fn classpath(mut self, classpath: impl Into<String>) -> Self {
        self.classpath = Some(classpath.into());
        self
    }

    pub fn compile_args(&self, source_file: &str) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(classpath) = &self.classpath {
            args.push("-cp".to_string());
            args.push(classpath.clone());
        }
        args.push(source_file.to_string());
        args
    }

    /// `cvf <Class>.jar <Class>.class [extra...]`
    pub fn archive_args(&self, class_name: &str, extra_files: &[&str]) -> Vec<String> {
        let mut args = vec![
            "cvf".to_string(),
            format!("{}.jar", class_name),
            format!("{}.class", class_name),
        ];
        args.extend(extra_files.iter().map(|f| f.to_string()));
        args
    }

    /// Compile `<Class>.java` and archive the result, both inside `dir`
    ///
    /// The archive step runs even when compilation failed.
    pub fn build(&self, dir: &Path, class_name: &str, extra_files: &[&str]) -> ToolchainReport {
        let source_file = format!("{}.java", class_name);

        let compile = run_step(
            ToolStep::Compile,
            &self.javac,
            &self.compile_args(&source_file),
            dir,
        );
        let archive = run_step(
            ToolStep::Archive,
            &self.jar,
            &self.archive_args(class_name, extra_files),
            dir,
        );

        ToolchainReport { compile, archive }
    }
}

fn run_step(step: ToolStep, program: &Path, args: &[String], dir: &Path) -> StepOutcome {
    let resolved = match which::which(program) {
        Ok(path) => path,
        Err(e) => {
            let outcome = StepOutcome::Unavailable(format!("{}: {}", program.display(), e));
            warn!(%step, %outcome, "toolchain step skipped");
            return outcome;
        }
    };

    info!(%step, program = %resolved.display(), ?args, "running toolchain step");

    let outcome = match Command::new(&resolved).args(args).current_dir(dir).status() {
        Ok(status) if status.success() => StepOutcome::Succeeded,
        Ok(status) => StepOutcome::Failed {
            code: status.code(),
        },
        Err(e) => StepOutcome::Unavailable(e.to_string()),
    };

    if !outcome.is_success() {
        warn!(%step, %outcome, "toolchain step failed");
    }
    outcome
}
