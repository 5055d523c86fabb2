use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use log::info;

use crate::layout::{ensure_project_dirs, ensure_resources_dirs, DirStatus, EnsuredDir};
use crate::resources::{ensure_config_file, read_entry, ResourcesEntry, RESOURCES_PATH_FILE};
use crate::runtime::Error;

#[derive(Args)]
pub struct SetupCMD {
    /// Directory to set up; defaults to the current directory
    #[arg(short = 'C', long = "working-dir", value_parser = clap::value_parser!(PathBuf))]
    pub working_dir: Option<PathBuf>,

    /// File holding the resources directory path. Relative to the working directory
    #[arg(short = 'r', long = "resources-file", value_parser = clap::value_parser!(PathBuf), default_value = RESOURCES_PATH_FILE)]
    pub resources_file: PathBuf,
}
impl SetupCMD {
    /// Run the commandline option
    pub fn try_execute(&mut self) -> Result<()> {
        let working_dir = match &self.working_dir {
            Some(p) => p.clone(),
            None => std::env::current_dir().map_err(Error::current_dir)?,
        };

        let report = Setup::run(&SetupParams {
            working_dir,
            resources_file: self.resources_file.clone(),
        })?;

        println!("{}", report.console_message());

        info!(
            "Setup has finished successfully, {} directories created",
            report.created().count()
        );
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct SetupParams {
    pub working_dir: PathBuf,
    pub resources_file: PathBuf,
}

#[derive(Clone, Debug)]
pub struct SetupReport {
    pub project_dirs: Vec<EnsuredDir>,
    pub resources_file: PathBuf,
    pub entry: ResourcesEntry,
    pub resources_dirs: Vec<EnsuredDir>,
}

impl SetupReport {
    pub fn console_message(&self) -> String {
        match &self.entry {
            ResourcesEntry::Path(p) => format!("Resources Directory: {}", p.display()),
            ResourcesEntry::Unset => "No Directory".to_string(),
        }
    }

    pub fn created(&self) -> impl Iterator<Item = &EnsuredDir> {
        self.project_dirs
            .iter()
            .chain(self.resources_dirs.iter())
            .filter(|d| d.status == DirStatus::Created)
    }
}

pub struct Setup {}

impl Setup {
    pub fn run(params: &SetupParams) -> Result<SetupReport, Error> {
        let project_dirs = ensure_project_dirs(&params.working_dir)?;

        let resources_file = params.working_dir.join(&params.resources_file);
        ensure_config_file(&resources_file)?;
        let entry = read_entry(&resources_file)?;

        let resources_dirs = match entry.resolve(&params.working_dir) {
            Some(dir) => {
                info!("Using resources directory {:?}", dir);
                ensure_resources_dirs(&dir)?
            }
            None => {
                info!("No resources directory configured in {:?}", resources_file);
                Vec::new()
            }
        };

        Ok(SetupReport {
            project_dirs,
            resources_file,
            entry,
            resources_dirs,
        })
    }
}
