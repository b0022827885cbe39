use std::env;
use std::path::PathBuf;

use crate::error::Result;
use crate::setup::rc::locate_setup_ini;

pub const DEFAULT_SETUP_RC: &str = "/etc/setup/setup.rc";
pub const DEFAULT_SETUP_LOG: &str = "/var/log/setup.log.full";

pub fn resolve_inifile(inifile: Option<PathBuf>, setup_rc: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = inifile {
        return Ok(path);
    }

    if let Ok(path) = env::var("CYGROOTS_INIFILE") {
        return Ok(PathBuf::from(path));
    }

    locate_setup_ini(&resolve_setup_rc(setup_rc))
}

pub fn resolve_setup_rc(setup_rc: Option<PathBuf>) -> PathBuf {
    if let Some(path) = setup_rc {
        return path;
    }

    if let Ok(path) = env::var("CYGROOTS_SETUP_RC") {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_SETUP_RC)
}

pub fn resolve_setup_log(setup_log: Option<PathBuf>) -> PathBuf {
    if let Some(path) = setup_log {
        return path;
    }

    if let Ok(path) = env::var("CYGROOTS_SETUP_LOG") {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_SETUP_LOG)
}
