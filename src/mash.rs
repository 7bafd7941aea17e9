use std::path::PathBuf;
use std::process::Command;

use camino::Utf8Path;

use crate::error::FinderError;

/// Boundary around the external `mash` binary.
///
/// Both calls return the raw stdout text for the parsers in [`crate::parse`];
/// a nonzero exit becomes [`FinderError::ExternalTool`] with the captured
/// stderr. Tests inject a fake implementation instead of spawning processes.
pub trait MashClient {
    fn sketch_info(&self, sketches_path: &Utf8Path) -> Result<String, FinderError>;
    fn distances(
        &self,
        query: &Utf8Path,
        reference: &Utf8Path,
        max_dist: f64,
    ) -> Result<String, FinderError>;
}

#[derive(Clone)]
pub struct SystemMashClient {
    mash: Option<PathBuf>,
}

impl SystemMashClient {
    pub fn new() -> Self {
        Self {
            mash: find_in_path("mash"),
        }
    }

    fn require_mash(&self) -> Result<&PathBuf, FinderError> {
        self.mash
            .as_ref()
            .ok_or_else(|| FinderError::MissingTool("mash".to_string()))
    }

    fn run_cmd(&self, subcommand: &str, args: &[String]) -> Result<String, FinderError> {
        let mash = self.require_mash()?;
        let output = Command::new(mash)
            .arg(subcommand)
            .args(args)
            .output()
            .map_err(|err| FinderError::Filesystem(format!("spawn mash {subcommand}: {err}")))?;
        if !output.status.success() {
            return Err(FinderError::ExternalTool {
                tool: subcommand.to_string(),
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for SystemMashClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MashClient for SystemMashClient {
    fn sketch_info(&self, sketches_path: &Utf8Path) -> Result<String, FinderError> {
        let args = vec!["-t".to_string(), sketches_path.to_string()];
        self.run_cmd("info", &args)
    }

    fn distances(
        &self,
        query: &Utf8Path,
        reference: &Utf8Path,
        max_dist: f64,
    ) -> Result<String, FinderError> {
        let args = vec![
            "-d".to_string(),
            max_dist.to_string(),
            reference.to_string(),
            query.to_string(),
        ];
        self.run_cmd("dist", &args)
    }
}

fn find_in_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for path in std::env::split_paths(&path_var) {
        let exe = path.join(format!("{name}.exe"));
        if exe.exists() {
            return Some(exe);
        }
        let plain = path.join(name);
        if plain.exists() {
            return Some(plain);
        }
    }
    None
}
