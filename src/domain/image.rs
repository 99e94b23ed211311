//! Image references
//!
//! Images are never read or stored. An upload only mints a session-local
//! `blob:` reference naming the picked file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        ImageRef(reference.into())
    }

    /// Create a session-local reference for a picked file
    pub fn upload(path: &Path) -> Self {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("image");
        ImageRef(format!("blob:session/{}/{}", Uuid::new_v4(), name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_session_local(&self) -> bool {
        self.0.starts_with("blob:")
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
