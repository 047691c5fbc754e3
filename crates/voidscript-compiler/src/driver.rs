/// Compiler driver that orchestrates the compilation pipeline

use std::path::PathBuf;
use tracing::info;
use voidscript_parser::PluginMetadata;

use crate::codegen::{CodeGenerator, GeneratedUnit};
use crate::error::{CompileError, Result};
use crate::manifest::{PluginDescriptor, DESCRIPTOR_FILE};
use crate::toolchain::{Toolchain, ToolchainReport, DEFAULT_JAR, DEFAULT_JAVAC};

/// Source file name used when none is given
pub const DEFAULT_SOURCE_FILE: &str = "main.void";

/// Compilation output structure
pub struct CompileOutput {
    /// Source file that was compiled
    pub source_file: PathBuf,
    /// Header values read from the source
    pub metadata: PluginMetadata,
    /// The plugin class as a fragment list
    pub unit: GeneratedUnit,
    /// Rendered Java source
    pub java: String,
}

/// Files written by a build, plus the toolchain outcome when packaging ran
#[derive(Debug)]
pub struct BuildArtifacts {
    pub java_file: PathBuf,
    pub descriptor_file: Option<PathBuf>,
    pub jar_file: PathBuf,
    pub toolchain: Option<ToolchainReport>,
}

/// Options for compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Input source file
    pub input: PathBuf,
    /// Output directory (optional, defaults to the current directory)
    pub output_dir: Option<PathBuf>,
    /// Run `javac` and `jar` after writing the Java file
    pub package: bool,
    /// Write `plugin.yml` and include it in the jar
    pub descriptor: bool,
    /// Classpath for `javac`
    pub classpath: Option<String>,
    pub javac: PathBuf,
    pub jar: PathBuf,
    /// Treat a failed toolchain step as a compile error
    pub strict: bool,
}

impl CompileOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: None,
            package: true,
            descriptor: false,
            classpath: None,
            javac: PathBuf::from(DEFAULT_JAVAC),
            jar: PathBuf::from(DEFAULT_JAR),
            strict: false,
        }
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn package(mut self, package: bool) -> Self {
        self.package = package;
        self
    }

    pub fn descriptor(mut self, descriptor: bool) -> Self {
        self.descriptor = descriptor;
        self
    }

    pub fn classpath(mut self, classpath: impl Into<String>) -> Self {
        self.classpath = Some(classpath.into());
        self
    }

    pub fn javac(mut self, javac: impl Into<PathBuf>) -> Self {
        self.javac = javac.into();
        self
    }

    pub fn jar(mut self, jar: impl Into<PathBuf>) -> Self {
        self.jar = jar.into();
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    fn toolchain(&self) -> Toolchain {
        let toolchain = Toolchain::new(self.javac.clone(), self.jar.clone());
        match &self.classpath {
            Some(classpath) => toolchain.classpath(classpath.clone()),
            None => toolchain,
        }
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_FILE)
    }
}

/// The VoidScript compiler
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    /// Create a new compiler with the given options
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Translate the source file into Java without touching the filesystem
    pub fn compile(&self) -> Result<CompileOutput> {
        let source = self.read_source()?;
        info!(source = %self.options.input.display(), "compiling");

        let script = voidscript_parser::parse(&source);
        info!(
            plugin = %script.metadata.name,
            lines = script.lines.len(),
            "classified source lines"
        );

        let unit = CodeGenerator::new().generate(&script);
        let java = unit.render()?;

        Ok(CompileOutput {
            source_file: self.options.input.clone(),
            metadata: script.metadata,
            unit,
            java,
        })
    }

    /// Compile, write the generated files and, unless disabled, package them
    pub fn run(&self) -> Result<BuildArtifacts> {
        let output = self.compile()?;
        self.write_outputs(&output)
    }

    /// Write `<Class>.java` (and `plugin.yml`) then run the toolchain
    pub fn write_outputs(&self, output: &CompileOutput) -> Result<BuildArtifacts> {
        let dir = self.get_output_dir()?;
        let class_name = output.unit.class_name();

        let java_file = dir.join(output.unit.file_name());
        std::fs::write(&java_file, &output.java)?;
        info!(file = %java_file.display(), bytes = output.java.len(), "wrote Java source");

        let descriptor_file = if self.options.descriptor {
            let path = dir.join(DESCRIPTOR_FILE);
            let yaml = PluginDescriptor::from_metadata(&output.metadata).to_yaml()?;
            std::fs::write(&path, yaml)?;
            info!(file = %path.display(), "wrote plugin descriptor");
            Some(path)
        } else {
            None
        };

        let toolchain = if self.options.package {
            let extra_files: &[&str] = if descriptor_file.is_some() {
                &[DESCRIPTOR_FILE]
            } else {
                &[]
            };
            let report = self.options.toolchain().build(&dir, class_name, extra_files);
            if self.options.strict {
                report.ensure_success()?;
            }
            Some(report)
        } else {
            None
        };

        Ok(BuildArtifacts {
            java_file,
            descriptor_file,
            jar_file: dir.join(format!("{}.jar", class_name)),
            toolchain,
        })
    }

    /// Read the source file
    fn read_source(&self) -> Result<String> {
        if !self.options.input.exists() {
            return Err(CompileError::FileNotFound(self.options.input.clone()));
        }

        std::fs::read_to_string(&self.options.input).map_err(CompileError::from)
    }

    /// Get the output directory (creates if needed)
    fn get_output_dir(&self) -> Result<PathBuf> {
        let dir = self
            .options
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        if !dir.exists() {
            std::fs::create_dir_all(&dir)?;
        }

        Ok(dir)
    }
}

/// Translate VoidScript source text straight to Java source text
pub fn translate(source: &str) -> Result<String> {
    let script = voidscript_parser::parse(source);
    CodeGenerator::new().generate(&script).render()
}
