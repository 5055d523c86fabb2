use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use log::debug;

use crate::runtime::Error;

pub const RESOURCES_PATH_FILE: &str = "Resources_Path.txt";

/// Content of the resources path file. The configured path is kept exactly
/// as written, trailing whitespace and newlines included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourcesEntry {
    Unset,
    Path(PathBuf),
}

impl ResourcesEntry {
    pub fn from_content(content: String) -> Self {
        if content.is_empty() {
            ResourcesEntry::Unset
        } else {
            ResourcesEntry::Path(PathBuf::from(content))
        }
    }

    /// The configured directory, resolved against the working directory if relative
    pub fn resolve(&self, working_dir: &Path) -> Option<PathBuf> {
        match self {
            ResourcesEntry::Unset => None,
            ResourcesEntry::Path(p) => Some(working_dir.join(p)),
        }
    }
}

/// Touch the file: open for append, creating it if absent, and close it again.
/// Existing content is left untouched.
pub fn ensure_config_file(path: &Path) -> Result<(), Error> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::config_file(path, e))?;
    Ok(())
}

pub fn read_entry(path: &Path) -> Result<ResourcesEntry, Error> {
    let content = fs::read_to_string(path).map_err(|e| Error::config_read(path, e))?;
    debug!("Read {} bytes from {:?}", content.len(), path);
    Ok(ResourcesEntry::from_content(content))
}
