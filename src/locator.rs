use std::{fs, io, path::{Path, PathBuf}};

use crate::Error;

/// Where packaged apps live on each drive.
pub const WINDOWS_APPS_DIR: &str = "Program Files/WindowsApps";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Strategy {
    /// A path known ahead of time. Not checked; a bad path fails at launch.
    Static(PathBuf),
    Search {
        file_name: String
    }
}

impl Strategy {
    /// Resolves the target. `drives` is only consulted by the search strategy.
    pub fn locate(&self, drives: impl FnOnce() -> Vec<PathBuf>) -> Result<PathBuf, Error> {
        match self {
            Strategy::Static(path) => Ok(path.clone()),
            Strategy::Search { file_name } => {
                let report = search(&drives(), file_name);
                report.found()
                    .map(Path::to_path_buf)
                    .ok_or_else(|| Error::TargetNotFound(file_name.clone()))
            }
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProbeOutcome {
    Found(PathBuf),
    Absent,
    /// The apps directory exists but couldn't be read.
    Skipped(String)
}

#[derive(Clone, Debug)]
pub struct DriveProbe {
    pub drive: PathBuf,
    pub outcome: ProbeOutcome
}

#[derive(Debug, Default)]
pub struct SearchReport {
    probes: Vec<DriveProbe>
}

impl SearchReport {
    pub fn found(&self) -> Option<&Path> {
        self.probes.iter().find_map(|probe| match &probe.outcome {
            ProbeOutcome::Found(path) => Some(path.as_path()),
            _ => None
        })
    }

    pub fn probes(&self) -> &[DriveProbe] {
        &self.probes
    }
}

pub fn windows_apps_dir(drive: &Path) -> PathBuf {
    WINDOWS_APPS_DIR.split('/').fold(drive.to_path_buf(), |dir, part| dir.join(part))
}

/// Looks for `file_name` in each immediate child of the drive's apps directory.
pub fn probe_drive(drive: &Path, file_name: &str) -> DriveProbe {
    let apps_dir = windows_apps_dir(drive);
    let outcome = match fs::read_dir(&apps_dir) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .map(|entry| entry.path().join(file_name))
            .find(|candidate| candidate.is_file())
            .map_or(ProbeOutcome::Absent, ProbeOutcome::Found),
        Err(e) if e.kind() == io::ErrorKind::NotFound => ProbeOutcome::Absent,
        Err(e) => ProbeOutcome::Skipped(e.to_string())
    };

    DriveProbe {
        drive: drive.to_path_buf(),
        outcome
    }
}

/// Probes drives in order and stops at the first match.
pub fn search(drives: &[PathBuf], file_name: &str) -> SearchReport {
    let mut report = SearchReport::default();

    for drive in drives {
        let probe = probe_drive(drive, file_name);
        match &probe.outcome {
            ProbeOutcome::Found(path) => tracing::debug!(drive = %drive.display(), path = %path.display(), "found"),
            ProbeOutcome::Absent => tracing::debug!(drive = %drive.display(), "absent"),
            ProbeOutcome::Skipped(error) => tracing::debug!(drive = %drive.display(), %error, "skipped"),
        }

        let found = matches!(probe.outcome, ProbeOutcome::Found(_));
        report.probes.push(probe);
        if found {
            break;
        }
    }

    report
}
