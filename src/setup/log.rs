use std::fs;
use std::path::Path;

use crate::core::package::PackageName;
use crate::setup::SetupError;

const INSTALLED_MARKER: &str = "Dependency order of packages: ";

pub fn load_installed(path: &Path) -> Result<Vec<PackageName>, SetupError> {
    if !path.is_file() {
        return Err(SetupError::LogNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    parse_installed(path, &content)
}

pub fn parse_installed(path: &Path, content: &str) -> Result<Vec<PackageName>, SetupError> {
    for line in content.lines() {
        if let Some(rest) = line.strip_prefix(INSTALLED_MARKER) {
            return Ok(rest.split_whitespace().map(PackageName::new).collect());
        }
    }

    Err(SetupError::InstalledListNotFound(path.to_path_buf()))
}
