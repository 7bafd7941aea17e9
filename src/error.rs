use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FinderError {
    #[error("mash info output not formatted as expected (tabular format): {0}")]
    InfoFormat(String),

    #[error("mash dist output not formatted as expected (standard output format): {0}")]
    DistFormat(String),

    #[error("mash {tool} returned non-zero exit status {status}.\nCaptured stderr: {stderr}")]
    ExternalTool {
        tool: String,
        status: i32,
        stderr: String,
    },

    #[error(
        "for the following references, no gene model was found in {models_path} \
         (showing the first 10):\n{}",
        .missing.join("\n")
    )]
    MissingModels {
        models_path: Utf8PathBuf,
        missing: Vec<String>,
    },

    #[error("unknown selection mode: {0}")]
    InvalidMode(String),

    #[error("required tool not found: {0}")]
    MissingTool(String),

    #[error("filesystem error: {0}")]
    Filesystem(String),
}
