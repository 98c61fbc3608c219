//! Artifact lifecycle
//!
//! An artifact is the in-memory byte stream plus filename produced by one
//! successful generation attempt. Exactly one optional artifact exists per
//! session, held in an `ArtifactSlot`. The transient on-disk file used to
//! bridge the exporter and the pipeline is managed by `with_transient_file`,
//! which guarantees removal on every exit path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An in-memory export artifact, ready for download
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Full file contents
    pub bytes: Vec<u8>,
    /// Deterministic filename derived from the request
    pub suggested_name: String,
    /// Label for the download trigger
    pub download_label: String,
}

/// The single session-scoped artifact slot
///
/// The slot never holds two artifacts and never keeps a stale artifact next
/// to a failed regeneration: callers clear it on any selection change and at
/// the start of every generation attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSlot {
    current: Option<Artifact>,
}

impl ArtifactSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the artifact unconditionally
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Replace the artifact
    pub fn set(&mut self, artifact: Artifact) {
        self.current = Some(artifact);
    }

    /// The present artifact, if any
    pub fn current(&self) -> Option<&Artifact> {
        self.current.as_ref()
    }

    /// Take the artifact out of the slot
    pub fn take(&mut self) -> Option<Artifact> {
        self.current.take()
    }
}

/// Removes the guarded path when dropped, surviving panics in the body
struct TransientGuard {
    path: PathBuf,
}

impl Drop for TransientGuard {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            // The body may never have created the file; removal is idempotent
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                // Best effort: a cleanup failure must not mask the body's result
                tracing::warn!(path = %self.path.display(), error = %e, "failed to remove transient file");
            }
        }
    }
}

/// Run `body` with a uniquely named path in `dir`, removing any file at that
/// path on every exit path (return, error, or panic)
///
/// The path combines a per-attempt UUID with the request-derived file name,
/// so sequential attempts and concurrent sessions never share a path.
pub fn with_transient_file<T, E, F>(dir: &Path, file_name: &str, body: F) -> Result<T, E>
where
    F: FnOnce(&Path) -> Result<T, E>,
{
    let path = dir.join(format!("{}-{}", Uuid::new_v4(), file_name));
    let _guard = TransientGuard { path: path.clone() };
    body(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(name: &str) -> Artifact {
        Artifact {
            bytes: vec![1, 2, 3],
            suggested_name: name.to_string(),
            download_label: "Download STEP File".to_string(),
        }
    }

    #[test]
    fn test_slot_set_replaces() {
        let mut slot = ArtifactSlot::new();
        assert!(slot.current().is_none());

        slot.set(artifact("a.step"));
        slot.set(artifact("b.step"));
        assert_eq!(slot.current().unwrap().suggested_name, "b.step");
    }

    #[test]
    fn test_slot_clear() {
        let mut slot = ArtifactSlot::new();
        slot.set(artifact("a.step"));
        slot.clear();
        assert!(slot.current().is_none());
        // clearing an empty slot is fine
        slot.clear();
    }

    #[test]
    fn test_transient_file_removed_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let mut used = PathBuf::new();
        let result: Result<Vec<u8>, std::io::Error> =
            with_transient_file(dir.path(), "part.step", |path| {
                used = path.to_path_buf();
                fs::write(path, b"step data")?;
                fs::read(path)
            });
        assert_eq!(result.unwrap(), b"step data");
        assert!(!used.exists());
    }

    #[test]
    fn test_transient_file_removed_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut used = PathBuf::new();
        let result: Result<(), String> = with_transient_file(dir.path(), "part.step", |path| {
            used = path.to_path_buf();
            fs::write(path, b"partial").unwrap();
            Err("exporter failed".to_string())
        });
        assert!(result.is_err());
        assert!(!used.exists());
    }

    #[test]
    fn test_transient_file_removed_on_panic() {
        let dir = tempfile::tempdir().unwrap();
        let used = std::sync::Mutex::new(PathBuf::new());
        let outcome = std::panic::catch_unwind(|| {
            let _: Result<(), ()> = with_transient_file(dir.path(), "part.step", |path| {
                *used.lock().unwrap() = path.to_path_buf();
                fs::write(path, b"partial").unwrap();
                panic!("kernel aborted");
            });
        });
        assert!(outcome.is_err());
        assert!(!used.lock().unwrap().exists());
    }

    #[test]
    fn test_body_need_not_create_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<(), String> =
            with_transient_file(dir.path(), "part.step", |_path| Err("early".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_paths_are_unique_per_attempt() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = PathBuf::new();
        let mut second = PathBuf::new();
        let _: Result<(), ()> = with_transient_file(dir.path(), "part.step", |p| {
            first = p.to_path_buf();
            Ok(())
        });
        let _: Result<(), ()> = with_transient_file(dir.path(), "part.step", |p| {
            second = p.to_path_buf();
            Ok(())
        });
        assert_ne!(first, second);
    }
}
