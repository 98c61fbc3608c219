//! Generation pipeline
//!
//! Orchestrates one synchronous generation attempt: request parameters are
//! validated first, then the kernel builds a solid, the exporter writes it to
//! a transient file, and the bytes are read back into memory. The transient
//! file is removed on every exit path. Kernel and exporter failures are
//! classified at this boundary; nothing below it terminates the session.

mod filename;

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use mc_cad::{ExportFormat, GeometryKernel, KernelError, StepExporter};

use crate::artifact::{Artifact, with_transient_file};
use crate::constants::DOWNLOAD_LABEL;
use crate::request::{ComponentRequest, RequestError};
use crate::validate::validate;

pub use filename::{sanitize_label, suggested_name};

/// Classified generation failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    /// The request is missing required fields (caller-side precondition)
    #[error("Request is not complete")]
    Incomplete,

    /// A closed-form feasibility check failed; generation was not attempted
    #[error("{message}")]
    Infeasible {
        /// The violated numeric bound, when applicable
        bound: Option<f64>,
        /// User-facing description of the violation
        message: String,
    },

    /// Kernel, exporter or transient-file failure for a feasibility-passing
    /// request
    #[error("An error occurred during generation: {0}")]
    Generation(String),
}

impl From<RequestError> for GenerateError {
    fn from(_: RequestError) -> Self {
        GenerateError::Incomplete
    }
}

impl From<KernelError> for GenerateError {
    fn from(e: KernelError) -> Self {
        GenerateError::Generation(e.to_string())
    }
}

/// One generation attempt's collaborators and scratch area
pub struct Pipeline {
    kernel: Box<dyn GeometryKernel>,
    exporter: Box<dyn StepExporter>,
    temp_dir: PathBuf,
}

impl Pipeline {
    /// Create a pipeline using the shared OS temporary area
    pub fn new(kernel: Box<dyn GeometryKernel>, exporter: Box<dyn StepExporter>) -> Self {
        Self {
            kernel,
            exporter,
            temp_dir: std::env::temp_dir(),
        }
    }

    /// Override the temporary-storage area
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    /// Generate an artifact for a complete request
    ///
    /// Validation runs before the kernel is invoked. On success the artifact
    /// holds the full exported bytes and its deterministic filename; on any
    /// failure the transient file has already been removed.
    pub fn generate(&self, request: &ComponentRequest) -> Result<Artifact, GenerateError> {
        let params = request.params()?;

        let feasibility = validate(&params);
        if !feasibility.ok {
            return Err(GenerateError::Infeasible {
                bound: feasibility.bound,
                message: feasibility
                    .message
                    .unwrap_or_else(|| "Parameters are not feasible".to_string()),
            });
        }

        let file_name = suggested_name(&params);
        tracing::debug!(kind = params.kind_name(), file = %file_name, "generating component");

        let bytes = with_transient_file(&self.temp_dir, &file_name, |path| {
            let solid = self.kernel.build(&params)?;
            self.exporter.export(&solid, path, ExportFormat::Step)?;
            fs::read(path).map_err(|e| GenerateError::Generation(e.to_string()))
        })?;

        tracing::debug!(file = %file_name, size = bytes.len(), "artifact ready");

        Ok(Artifact {
            bytes,
            suggested_name: file_name,
            download_label: DOWNLOAD_LABEL.to_string(),
        })
    }
}
