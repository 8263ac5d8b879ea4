// File: crates/script-logistics/src/script_info.rs
// Summary: File name and home-relative location of the running script, for the housekeeping banners.

use std::path::Path;

use anyhow::{Context, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptInfo {
    pub filename: Option<String>,
    /// Parent directory, written as `~/…` when under the home directory.
    pub location: Option<String>,
}

impl ScriptInfo {
    pub fn new(filename: impl Into<String>, location: impl Into<String>) -> Self {
        Self { filename: Some(filename.into()), location: Some(location.into()) }
    }

    pub fn from_path(path: &Path) -> Self {
        let filename = path.file_name().map(|f| f.to_string_lossy().into_owned());
        let location = path.parent().filter(|p| !p.as_os_str().is_empty()).map(|parent| {
            match dirs::home_dir().and_then(|home| parent.strip_prefix(&home).ok().map(Path::to_path_buf)) {
                Some(rel) if rel.as_os_str().is_empty() => "~".to_string(),
                Some(rel) => format!("~/{}", rel.display()),
                None => parent.display().to_string(),
            }
        });
        Self { filename, location }
    }

    /// Info for the running executable.
    pub fn current_exe() -> Result<Self> {
        let exe = std::env::current_exe().context("resolving current executable")?;
        Ok(Self::from_path(&exe))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_relative_location() {
        let Some(home) = dirs::home_dir() else { return };
        let info = ScriptInfo::from_path(&home.join("scripts").join("run.rs"));
        assert_eq!(info.filename.as_deref(), Some("run.rs"));
        assert_eq!(info.location.as_deref(), Some("~/scripts"));

        let top = ScriptInfo::from_path(&home.join("run.rs"));
        assert_eq!(top.location.as_deref(), Some("~"));
    }

    #[test]
    fn outside_home_keeps_parent() {
        if dirs::home_dir().is_some_and(|h| Path::new("/opt/tools").starts_with(h)) {
            return;
        }
        let info = ScriptInfo::from_path(Path::new("/opt/tools/plot.rs"));
        assert_eq!(info.filename.as_deref(), Some("plot.rs"));
        assert_eq!(info.location.as_deref(), Some("/opt/tools"));
    }

    #[test]
    fn bare_file_name_has_no_location() {
        let info = ScriptInfo::from_path(Path::new("plot.rs"));
        assert_eq!(info, ScriptInfo { filename: Some("plot.rs".into()), location: None });
    }
}
