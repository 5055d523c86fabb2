use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to resolve the current working directory: {source}")]
    CurrentDir {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {:?}: {source}", path)]
    CreateDir {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open resources path file {:?}: {source}", path)]
    ConfigFile {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read resources path file {:?}: {source}", path)]
    ConfigRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    #[cold]
    pub fn current_dir(source: std::io::Error) -> Self {
        Error::CurrentDir { source }
    }

    #[cold]
    pub fn create_dir<P: AsRef<std::path::Path>>(path: P, source: std::io::Error) -> Self {
        Error::CreateDir {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    #[cold]
    pub fn config_file<P: AsRef<std::path::Path>>(path: P, source: std::io::Error) -> Self {
        Error::ConfigFile {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    #[cold]
    pub fn config_read<P: AsRef<std::path::Path>>(path: P, source: std::io::Error) -> Self {
        Error::ConfigRead {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
