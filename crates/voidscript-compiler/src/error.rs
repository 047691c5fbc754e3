/// Error types for the VoidScript compiler

use std::path::PathBuf;
use thiserror::Error;

use crate::toolchain::{StepOutcome, ToolStep};

pub type Result<T> = std::result::Result<T, CompileError>;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("Could not serialize plugin descriptor: {0}")]
    Descriptor(#[from] serde_yaml::Error),

    #[error("{step} step {outcome}")]
    Toolchain { step: ToolStep, outcome: StepOutcome },
}

impl CompileError {
    pub fn toolchain(step: ToolStep, outcome: StepOutcome) -> Self {
        CompileError::Toolchain { step, outcome }
    }
}
