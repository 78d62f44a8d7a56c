//! Dependency parsing model seam

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const INPUT_PLACEHOLDER: &str = "{input}";
pub const OUTPUT_PLACEHOLDER: &str = "{output}";
pub const MODEL_PLACEHOLDER: &str = "{model}";

/// Fills UPOS, lemma, features and dependencies of a CoNLL-U skeleton
pub trait ParsingModel: Send + Sync {
    /// Take skeleton CoNLL-U text and return the predicted CoNLL-U text
    fn predict(&self, skeleton: &str) -> Result<String>;

    fn name(&self) -> &str {
        "model"
    }
}

/// Parsing model run as an external program
///
/// The command template is split on whitespace and each argument gets
/// `{input}`, `{output}` and `{model}` substituted. The skeleton is written
/// to `{input}`; the prediction is read from `{output}`, or from standard
/// output when the template has no `{output}`.
#[derive(Debug, Clone)]
pub struct CommandModel {
    template: Vec<String>,
    model: Option<PathBuf>,
}

impl CommandModel {
    pub fn new(template: &str) -> Result<Self> {
        let template: Vec<String> = template.split_whitespace().map(String::from).collect();
        if template.is_empty() {
            return Err(Error::Config("model command must not be empty".into()));
        }
        Ok(Self {
            template,
            model: None,
        })
    }

    pub fn with_model(mut self, model: impl Into<PathBuf>) -> Self {
        self.model = Some(model.into());
        self
    }

    fn program(&self) -> &str {
        &self.template[0]
    }

    fn arguments(&self, input: &Path, output: &Path) -> Vec<String> {
        let model = self
            .model
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        self.template[1..]
            .iter()
            .map(|arg| {
                arg.replace(INPUT_PLACEHOLDER, &input.display().to_string())
                    .replace(OUTPUT_PLACEHOLDER, &output.display().to_string())
                    .replace(MODEL_PLACEHOLDER, &model)
            })
            .collect()
    }

    fn writes_output_file(&self) -> bool {
        self.template.iter().any(|arg| arg.contains(OUTPUT_PLACEHOLDER))
    }

    fn failure(&self, status: impl ToString) -> Error {
        Error::ExternalTool {
            tool: self.program().to_string(),
            status: status.to_string(),
        }
    }
}

impl ParsingModel for CommandModel {
    fn predict(&self, skeleton: &str) -> Result<String> {
        let workdir = tempfile::tempdir()?;
        let input = workdir.path().join("input.conllu");
        let output = workdir.path().join("predicted.conllu");
        fs::write(&input, skeleton)?;

        let arguments = self.arguments(&input, &output);
        log::debug!("Running {} {}", self.program(), arguments.join(" "));

        let result = Command::new(self.program())
            .args(&arguments)
            .output()
            .map_err(|e| self.failure(e))?;
        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            if !stderr.trim().is_empty() {
                log::warn!("{} stderr: {}", self.program(), stderr.trim());
            }
            return Err(self.failure(result.status));
        }

        if self.writes_output_file() {
            Ok(fs::read_to_string(&output)?)
        } else {
            String::from_utf8(result.stdout)
                .map_err(|_| self.failure("output is not valid UTF-8"))
        }
    }

    fn name(&self) -> &str {
        self.program()
    }
}
