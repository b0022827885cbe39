use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;

use crate::error::CygrootsError;
use crate::setup::SetupError;

#[derive(Debug, Clone)]
pub struct SetupRc {
    pub cache: String,
    pub mirror: String,
}

pub fn load_setup_rc(path: &Path) -> Result<SetupRc, SetupError> {
    if !path.is_file() {
        return Err(SetupError::RcNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    parse_setup_rc(path, &String::from_utf8_lossy(&bytes))
}

pub fn parse_setup_rc(path: &Path, content: &str) -> Result<SetupRc, SetupError> {
    let mut lines = content.lines();

    let mut cache = None;
    while let Some(line) = lines.next() {
        if line.starts_with("last-cache") {
            cache = lines.next().map(|value| value.trim().to_string());
            break;
        }
    }
    let cache = cache.ok_or_else(|| SetupError::LastCacheNotFound(path.to_path_buf()))?;

    let mut mirror = None;
    while let Some(line) = lines.next() {
        if line.starts_with("last-mirror") {
            mirror = lines.next().map(|value| value.trim().to_string());
            break;
        }
    }
    let mirror = mirror.ok_or_else(|| SetupError::LastMirrorNotFound(path.to_path_buf()))?;

    Ok(SetupRc { cache, mirror })
}

pub fn mirror_directory(mirror: &str) -> String {
    let mut encoded = String::new();
    for byte in mirror.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'.' | b'~' | b'-') {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded.to_ascii_lowercase()
}

pub fn locate_setup_ini(setup_rc: &Path) -> crate::error::Result<PathBuf> {
    let rc = load_setup_rc(setup_rc)?;
    let cache = cygpath_unix(&rc.cache.replace('\\', "/"))?;
    let mirror_dir = mirror_directory(&rc.mirror);

    Ok(PathBuf::from(cache)
        .join(mirror_dir)
        .join(env::consts::ARCH)
        .join("setup.ini"))
}

pub fn cygpath_unix(path: &str) -> crate::error::Result<String> {
    let output = Command::new("cygpath")
        .arg("-u")
        .arg(path)
        .output()
        .with_context(|| format!("failed to run cygpath -u {path}"))?;
    if !output.status.success() {
        return Err(CygrootsError::Other(anyhow::anyhow!(format!(
            "cygpath -u {path} failed"
        ))));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
