use std::env;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, ensure};

use crate::backend::fixture::DEFAULT_FIXTURE_PATH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Html,
    Json,
}

impl OutputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

impl Display for OutputMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(anyhow!(
                "invalid CAMPUS_NAV_OUTPUT `{other}`; expected `html` or `json`"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSettings {
    pub fixture_path: PathBuf,
    pub output: OutputMode,
}

impl NavSettings {
    pub fn from_env() -> Result<Self> {
        // Load .env if present, but do not fail if file does not exist.
        let _ = dotenvy::dotenv();

        let fixture_path = read_optional_env("CAMPUS_NAV_FIXTURE")
            .unwrap_or_else(|| DEFAULT_FIXTURE_PATH.to_owned());

        let output = match read_optional_env("CAMPUS_NAV_OUTPUT") {
            Some(raw) => raw
                .parse::<OutputMode>()
                .context("failed to parse CAMPUS_NAV_OUTPUT")?,
            None => OutputMode::default(),
        };

        Ok(Self {
            fixture_path: PathBuf::from(fixture_path),
            output,
        })
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(mut self, fixture_path: Option<PathBuf>, json: bool) -> Result<Self> {
        if let Some(path) = fixture_path {
            ensure!(
                !path.as_os_str().is_empty(),
                "--fixture cannot be an empty path"
            );
            self.fixture_path = path;
        }
        if json {
            self.output = OutputMode::Json;
        }
        Ok(self)
    }
}

fn read_optional_env(name: &str) -> Option<String> {
    env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}
