//! Geometry kernel abstraction

mod traits;

pub use traits::{
    ExportFormat, GeometryKernel, KernelError, KernelResult, NullExporter, NullKernel, Solid,
    StepExporter,
};
