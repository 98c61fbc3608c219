//! Global constants for mc-core

/// Catalog standard all bearing size tables belong to
pub const BEARING_STANDARD: &str = "SKT";

/// MIME type for delivered artifacts
pub const ARTIFACT_MIME: &str = "application/octet-stream";

/// Label shown on the download trigger for a ready artifact
pub const DOWNLOAD_LABEL: &str = "Download STEP File";

/// Replacement for path-unsafe separator characters in size labels
pub const SAFE_SEPARATOR: &str = "_";
