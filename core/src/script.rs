use std::path::PathBuf;

use crate::PalErrorExt;

/// A PAL source file loaded into memory.
#[derive(Debug, Clone)]
pub struct Script {
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

impl Script {
    /// Reads the program at `path`. This is the only fatal failure of a run:
    /// if it fails no analysis takes place.
    pub fn new(path: PathBuf) -> Result<Self, Box<dyn PalErrorExt>> {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let content = std::fs::read_to_string(&path).map_err(|e| -> Box<dyn PalErrorExt> {
            Box::new(ScriptReadError {
                path: path.clone(),
                cause: e.to_string(),
            })
        })?;
        log::debug!("loaded {} ({} bytes)", path.display(), content.len());
        Ok(Script {
            name,
            path,
            content,
        })
    }

    /// Wraps in-memory source text, mostly for tests and embedding.
    pub fn from_source(name: &str, content: &str) -> Self {
        Script {
            name: name.to_string(),
            path: PathBuf::from(name),
            content: content.to_string(),
        }
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Script: {} at {:?}", self.name, self.path)
    }
}

#[derive(Debug, Clone)]
pub struct ScriptReadError {
    pub path: PathBuf,
    pub cause: String,
}

impl std::fmt::Display for ScriptReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "An I/O error occurred opening file {}. {}",
            self.path.display(),
            self.cause
        )
    }
}

impl std::error::Error for ScriptReadError {}

impl PalErrorExt for ScriptReadError {
    fn level(&self) -> crate::Level {
        crate::Level::Critical
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn issuer(&self) -> String {
        "pal.script".to_string()
    }

    fn location(&self) -> Option<crate::location::Location> {
        None
    }
}
