/// VoidScript compiler
///
/// Translates VoidScript plugin scripts into a Bukkit plugin class and
/// packages it with the JDK toolchain.

pub mod driver;
pub mod error;
pub mod codegen;
pub mod manifest;
pub mod toolchain;

pub use driver::{translate, BuildArtifacts, Compiler, CompileOptions, CompileOutput};
pub use error::{CompileError, Result};
pub use codegen::{emit_directive, CodeGenerator, GeneratedUnit};
pub use manifest::{PluginDescriptor, DESCRIPTOR_FILE};
pub use toolchain::{StepOutcome, ToolStep, Toolchain, ToolchainReport};
