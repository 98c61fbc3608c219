//! Session state machine
//!
//! One `SessionState` per user session holds the current component request
//! and the single artifact slot. Presentation layers dispatch `SessionEvent`s
//! and render the resulting state; they never mutate selection state
//! directly. The reducer applies the cascade-reset rule (changing a level
//! unsets every dependent level) and invalidates the artifact on any
//! selection change.

use serde::{Deserialize, Serialize};

use mc_core::artifact::ArtifactSlot;
use mc_core::pipeline::{GenerateError, Pipeline};
use mc_core::request::{Category, ComponentRequest, FastenerKind, GearKind};
use mc_core::resolver::{SelectionLevel, options_for};

pub use mc_cad::{Catalog, CatalogResult, StaticCatalog};

/// A user-driven change to the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Change the component category
    SelectCategory(Option<Category>),
    /// Change the gear kind
    SelectGearKind(Option<GearKind>),
    /// Change the fastener kind
    SelectFastenerKind(Option<FastenerKind>),
    /// Change the catalog class
    SelectClass(Option<String>),
    /// Change the catalog type
    SelectType(Option<String>),
    /// Change the catalog size
    SelectSize(Option<String>),
    /// Change one numeric dimension
    SetDimension { name: String, value: f64 },
    /// Toggle thread suppression for nuts and screws
    SetSimpleThreads(bool),
    /// Explicitly drop the current artifact
    ClearArtifact,
}

/// Session-private mutable state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// The component being configured
    pub request: ComponentRequest,
    /// The last generated artifact, if still valid
    pub artifact: ArtifactSlot,
}

impl SessionState {
    /// Create a fresh session
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event
    ///
    /// Selection events clear the artifact slot; dimension edits leave it in
    /// place (only an explicit regeneration replaces it).
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::SelectCategory(category) => {
                self.request.set_category(category);
                self.artifact.clear();
            }
            SessionEvent::SelectGearKind(kind) => {
                self.request.set_gear_kind(kind);
                self.artifact.clear();
            }
            SessionEvent::SelectFastenerKind(kind) => {
                self.request.set_fastener_kind(kind);
                self.artifact.clear();
            }
            SessionEvent::SelectClass(class) => {
                self.request.select_class(class);
                self.artifact.clear();
            }
            SessionEvent::SelectType(fastener_type) => {
                self.request.select_type(fastener_type);
                self.artifact.clear();
            }
            SessionEvent::SelectSize(size) => {
                self.request.select_size(size);
                self.artifact.clear();
            }
            SessionEvent::SetDimension { name, value } => {
                if !self.request.dimensions.set(&name, value) {
                    tracing::debug!(name = %name, "ignoring unknown dimension");
                }
            }
            SessionEvent::SetSimpleThreads(simple) => {
                self.request.simple_threads = simple;
            }
            SessionEvent::ClearArtifact => {
                self.artifact.clear();
            }
        }
    }

    /// Whether the generate trigger should be enabled
    pub fn can_generate(&self) -> bool {
        self.request.is_complete()
    }

    /// Run one generation attempt
    ///
    /// The slot is cleared before the attempt starts, so a failed
    /// regeneration never leaves a stale artifact behind.
    pub fn generate(&mut self, pipeline: &Pipeline) -> Result<(), GenerateError> {
        self.artifact.clear();
        let artifact = pipeline.generate(&self.request)?;
        self.artifact.set(artifact);
        Ok(())
    }

    /// Class options for the current request
    pub fn class_options(&self, catalog: &dyn Catalog) -> CatalogResult<Vec<String>> {
        options_for(catalog, &self.request, SelectionLevel::Class)
    }

    /// Type options for the current request
    pub fn type_options(&self, catalog: &dyn Catalog) -> CatalogResult<Vec<String>> {
        options_for(catalog, &self.request, SelectionLevel::Type)
    }

    /// Size options for the current request
    pub fn size_options(&self, catalog: &dyn Catalog) -> CatalogResult<Vec<String>> {
        options_for(catalog, &self.request, SelectionLevel::Size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::path::Path;

    use mc_cad::{
        ComponentParams, ExportFormat, GeometryKernel, KernelError, KernelResult, Solid,
        StepExporter,
    };
    use mc_core::artifact::Artifact;

    struct StubKernel;

    impl GeometryKernel for StubKernel {
        fn name(&self) -> &str {
            "stub"
        }

        fn is_available(&self) -> bool {
            true
        }

        fn build(&self, _params: &ComponentParams) -> KernelResult<Solid> {
            Ok(Solid::new().with_kernel_data())
        }
    }

    struct StubExporter {
        fail: bool,
    }

    impl StepExporter for StubExporter {
        fn export(&self, _solid: &Solid, path: &Path, _format: ExportFormat) -> KernelResult<()> {
            if self.fail {
                return Err(KernelError::ExportFailed("disk full".into()));
            }
            fs::write(path, b"ISO-10303-21;").map_err(|e| KernelError::ExportFailed(e.to_string()))
        }
    }

    fn pipeline(exporter_fails: bool, temp_dir: &Path) -> Pipeline {
        Pipeline::new(
            Box::new(StubKernel),
            Box::new(StubExporter {
                fail: exporter_fails,
            }),
        )
        .with_temp_dir(temp_dir)
    }

    fn seeded_artifact() -> Artifact {
        Artifact {
            bytes: vec![0],
            suggested_name: "old.step".to_string(),
            download_label: "Download STEP File".to_string(),
        }
    }

    fn nut_session() -> SessionState {
        let mut session = SessionState::new();
        session.apply(SessionEvent::SelectCategory(Some(Category::Fastener)));
        session.apply(SessionEvent::SelectFastenerKind(Some(FastenerKind::Nut)));
        session.apply(SessionEvent::SelectClass(Some("Hex Nut".to_string())));
        session.apply(SessionEvent::SelectType(Some("iso4032".to_string())));
        session.apply(SessionEvent::SelectSize(Some("M5-0.8".to_string())));
        session
    }

    #[test]
    fn test_class_change_resets_dependents() {
        let mut session = nut_session();
        session.apply(SessionEvent::SelectClass(Some("Square Nut".to_string())));
        assert!(session.request.selection.fastener_type.is_none());
        assert!(session.request.selection.size.is_none());
        assert!(!session.can_generate());
    }

    #[test]
    fn test_type_change_resets_size() {
        let mut session = nut_session();
        session.apply(SessionEvent::SelectType(Some("iso4035".to_string())));
        assert!(session.request.selection.size.is_none());
    }

    #[test]
    fn test_selection_change_invalidates_artifact() {
        let mut session = nut_session();
        session.artifact.set(seeded_artifact());

        session.apply(SessionEvent::SelectSize(Some("M6-1".to_string())));
        assert!(session.artifact.current().is_none());

        session.artifact.set(seeded_artifact());
        session.apply(SessionEvent::SelectCategory(Some(Category::Gear)));
        assert!(session.artifact.current().is_none());
    }

    #[test]
    fn test_dimension_edit_keeps_artifact() {
        let mut session = SessionState::new();
        session.apply(SessionEvent::SelectCategory(Some(Category::Gear)));
        session.apply(SessionEvent::SelectGearKind(Some(GearKind::Spur)));
        session.artifact.set(seeded_artifact());

        session.apply(SessionEvent::SetDimension {
            name: "bore_d".to_string(),
            value: 6.0,
        });
        assert!(session.artifact.current().is_some());
    }

    #[test]
    fn test_cascade_options_walkthrough() {
        // selecting class populates types; selecting type populates sizes;
        // selecting size enables generation
        let catalog = StaticCatalog::new();
        let mut session = SessionState::new();
        session.apply(SessionEvent::SelectCategory(Some(Category::Fastener)));
        session.apply(SessionEvent::SelectFastenerKind(Some(FastenerKind::Nut)));

        assert!(session.type_options(&catalog).unwrap().is_empty());

        session.apply(SessionEvent::SelectClass(Some("Hex Nut".to_string())));
        let types = session.type_options(&catalog).unwrap();
        assert!(!types.is_empty());

        session.apply(SessionEvent::SelectType(Some(types[0].clone())));
        let sizes = session.size_options(&catalog).unwrap();
        assert!(!sizes.is_empty());

        assert!(!session.can_generate());
        session.apply(SessionEvent::SelectSize(Some(sizes[0].clone())));
        assert!(session.can_generate());
    }

    #[test]
    fn test_generate_stores_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = pipeline(false, dir.path());
        let mut session = nut_session();

        session.generate(&pipeline).unwrap();
        let artifact = session.artifact.current().unwrap();
        assert_eq!(artifact.suggested_name, "Hex Nut_M5-0.8.step");
        assert_eq!(artifact.bytes, b"ISO-10303-21;");
    }

    #[test]
    fn test_failed_generation_leaves_slot_empty() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = pipeline(true, dir.path());
        let mut session = nut_session();
        session.artifact.set(seeded_artifact());

        let err = session.generate(&pipeline).unwrap_err();
        assert!(matches!(err, GenerateError::Generation(_)));
        assert!(session.artifact.current().is_none());
    }

    #[test]
    fn test_infeasible_generation_clears_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = pipeline(false, dir.path());
        let mut session = SessionState::new();
        session.apply(SessionEvent::SelectCategory(Some(Category::Gear)));
        session.apply(SessionEvent::SelectGearKind(Some(GearKind::Spur)));
        session.artifact.set(seeded_artifact());
        session.apply(SessionEvent::SetDimension {
            name: "teeth_number".to_string(),
            value: 5.0,
        });

        let err = session.generate(&pipeline).unwrap_err();
        assert!(matches!(err, GenerateError::Infeasible { .. }));
        assert!(session.artifact.current().is_none());
    }
}
