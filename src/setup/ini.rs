use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::package::{Package, PackageName};
use crate::setup::SetupError;

pub fn load_packages(path: &Path) -> Result<HashMap<PackageName, Package>, SetupError> {
    if !path.is_file() {
        return Err(SetupError::IniNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    parse_packages(path, &content)
}

pub fn parse_packages(
    path: &Path,
    content: &str,
) -> Result<HashMap<PackageName, Package>, SetupError> {
    let mut packages: HashMap<PackageName, Package> = HashMap::new();
    let mut current: Option<PackageName> = None;

    for (number, line) in content.lines().enumerate() {
        if let Some(rest) = line.strip_prefix('@') {
            if rest.starts_with(char::is_whitespace) {
                if let Some(first) = rest.split_whitespace().next() {
                    let name = PackageName::new(first);
                    packages
                        .entry(name.clone())
                        .or_insert_with(|| Package::new(name.clone()));
                    current = Some(name);
                }
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("category:") {
            if rest.split_whitespace().any(|category| category == "Base") {
                let name = current
                    .as_ref()
                    .ok_or_else(|| orphan_entry(path, number, "category"))?;
                if let Some(package) = packages.get_mut(name) {
                    package.base = true;
                }
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("requires:") {
            let name = current
                .as_ref()
                .ok_or_else(|| orphan_entry(path, number, "requires"))?;
            if let Some(package) = packages.get_mut(name) {
                package.requires = rest.split_whitespace().map(PackageName::new).collect();
            }
        }
    }

    Ok(packages)
}

fn orphan_entry(path: &Path, number: usize, field: &str) -> SetupError {
    SetupError::Malformed {
        path: path.to_path_buf(),
        line: number + 1,
        reason: format!("{field} entry before any package"),
    }
}
