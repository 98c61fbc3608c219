//! Geometry kernel trait definitions
//!
//! These traits define the interface the generation pipeline expects from a
//! modeling kernel and its exporter. The actual geometry construction lives
//! behind implementations of these traits.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::params::ComponentParams;

/// Error type for kernel and exporter operations
#[derive(Debug, Clone, Error)]
pub enum KernelError {
    #[error("Kernel not available: {0}")]
    NotAvailable(String),

    #[error("Model construction failed: {0}")]
    BuildFailed(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),
}

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

/// A 3D solid body handle
///
/// The handle is opaque: the geometric data itself is owned by the kernel
/// that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solid {
    /// Unique identifier
    pub id: Uuid,
    /// Marker for kernel data (actual data stored in the kernel)
    #[serde(skip)]
    has_kernel_data: bool,
}

impl Solid {
    /// Create a new solid with a fresh ID
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            has_kernel_data: false,
        }
    }

    /// Mark that this solid has kernel data
    pub fn with_kernel_data(mut self) -> Self {
        self.has_kernel_data = true;
        self
    }

    /// Check if this solid has kernel data
    pub fn has_kernel_data(&self) -> bool {
        self.has_kernel_data
    }
}

impl Default for Solid {
    fn default() -> Self {
        Self::new()
    }
}

/// Interchange format for exported models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExportFormat {
    /// STEP (ISO 10303)
    #[default]
    Step,
}

impl ExportFormat {
    /// File extension for this format, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Step => "step",
        }
    }
}

/// The geometry kernel trait
///
/// Implementations construct a solid model from a component parameter set.
pub trait GeometryKernel: Send + Sync {
    /// Get the name of this kernel
    fn name(&self) -> &str;

    /// Check if the kernel is available
    fn is_available(&self) -> bool;

    /// Build a solid model for the given component parameters
    ///
    /// # Arguments
    /// * `params` - The validated parameter set for one component
    fn build(&self, params: &ComponentParams) -> KernelResult<Solid>;
}

/// The exporter trait
///
/// Implementations serialize a solid handle to durable storage in the
/// requested interchange format.
pub trait StepExporter: Send + Sync {
    /// Export a solid to a file
    ///
    /// # Arguments
    /// * `solid` - The solid to export
    /// * `path` - Output file path
    /// * `format` - Target interchange format
    fn export(&self, solid: &Solid, path: &Path, format: ExportFormat) -> KernelResult<()>;
}

/// A null kernel that always returns errors (used when no kernel is available)
#[derive(Debug, Default)]
pub struct NullKernel;

impl GeometryKernel for NullKernel {
    fn name(&self) -> &str {
        "null"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn build(&self, _params: &ComponentParams) -> KernelResult<Solid> {
        Err(KernelError::NotAvailable(
            "No geometry kernel available".into(),
        ))
    }
}

/// A null exporter that always returns errors
#[derive(Debug, Default)]
pub struct NullExporter;

impl StepExporter for NullExporter {
    fn export(&self, _solid: &Solid, _path: &Path, _format: ExportFormat) -> KernelResult<()> {
        Err(KernelError::NotAvailable(
            "No exporter available".into(),
        ))
    }
}
