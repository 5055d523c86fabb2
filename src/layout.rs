use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::runtime::Error;

pub const DIR_DATA_INPUT: &str = "Data Input";
pub const DIR_DATA_PROCESSED: &str = "Data Processed";
pub const DIR_PHOTO_RELATED: &str = "Photo Related Files";
pub const DIR_VIDEO_RELATED: &str = "Video Related Files";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    Existed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnsuredDir {
    pub path: PathBuf,
    pub status: DirStatus,
}

///////////////////////////////
/// Create a single directory unless something already sits at that path.
///
/// Parents are never created: a missing parent is an error. Already-exists is
/// detected from the create call itself, so two processes racing on the same
/// path both succeed.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<EnsuredDir, Error> {
    let path = path.as_ref();
    let status = match fs::create_dir(path) {
        Ok(()) => {
            info!("Created directory {:?}", path);
            DirStatus::Created
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            if !path.is_dir() {
                warn!("{:?} exists but is not a directory", path);
            }
            debug!("Directory {:?} already exists", path);
            DirStatus::Existed
        }
        Err(e) => return Err(Error::create_dir(path, e)),
    };

    Ok(EnsuredDir {
        path: path.to_path_buf(),
        status,
    })
}

/// Ensure "Data Input" and "Data Processed" under the working directory
pub fn ensure_project_dirs(working_dir: &Path) -> Result<Vec<EnsuredDir>, Error> {
    [DIR_DATA_INPUT, DIR_DATA_PROCESSED]
        .iter()
        .map(|name| ensure_dir(working_dir.join(name)))
        .collect()
}

/// Ensure the resources directory itself, then its photo and video subfolders
pub fn ensure_resources_dirs(resources_dir: &Path) -> Result<Vec<EnsuredDir>, Error> {
    let mut ensured = vec![ensure_dir(resources_dir)?];
    for name in [DIR_PHOTO_RELATED, DIR_VIDEO_RELATED] {
        ensured.push(ensure_dir(resources_dir.join(name))?);
    }
    Ok(ensured)
}
