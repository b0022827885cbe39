use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TestInstall {
    root: PathBuf,
}

impl TestInstall {
    fn new(prefix: &str, setup_ini: &str, setup_log: &str) -> Self {
        let root = unique_temp_dir(prefix);
        fs::create_dir_all(&root).expect("create install dir");
        fs::write(root.join("setup.ini"), setup_ini).expect("write setup.ini");
        fs::write(root.join("setup.log.full"), setup_log).expect("write setup.log.full");
        Self { root }
    }

    fn run(&self) -> Output {
        Command::new(cygroots_bin())
            .arg("--inifile")
            .arg(self.root.join("setup.ini"))
            .arg("--setup-log")
            .arg(self.root.join("setup.log.full"))
            .output()
            .expect("run cygroots")
    }

    fn roots(&self) -> String {
        let output = self.run();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        assert!(
            output.status.success(),
            "cygroots failed\nstdout:\n{stdout}\nstderr:\n{stderr}"
        );
        stdout.trim_end().to_string()
    }
}

impl Drop for TestInstall {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

fn cygroots_bin() -> PathBuf {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_cygroots") {
        return PathBuf::from(path);
    }

    let current_exe = std::env::current_exe().expect("resolve current test binary path");
    let target_dir = current_exe
        .parent()
        .and_then(|path| path.parent())
        .expect("derive cargo target dir from test binary path");
    let bin_name = if cfg!(windows) {
        "cygroots.exe"
    } else {
        "cygroots"
    };
    let fallback = target_dir.join(bin_name);

    if fallback.is_file() {
        fallback
    } else {
        panic!(
            "CARGO_BIN_EXE_cygroots is not set and fallback binary not found at {}",
            fallback.display()
        );
    }
}

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_nanos();
    let pid = std::process::id();
    std::env::temp_dir().join(format!("cygroots-{prefix}-{pid}-{nanos}"))
}

const WORKSTATION_INI: &str = r#"release: cygwin
arch: x86_64

@ cygwin
sdesc: "The UNIX emulation engine"
category: Base

@ bash
sdesc: "The GNU Bourne Again SHell"
category: Base Shells
requires: cygwin

@ libncursesw10
sdesc: "Terminal display library"
category: Libs
requires: cygwin

@ libcurl4
sdesc: "Multi-protocol file transfer library"
category: Libs
requires: cygwin

@ vim
sdesc: "Vi IMproved"
category: Editors
requires: bash libncursesw10

@ git
sdesc: "Distributed version control system"
category: Devel
requires: bash libcurl4
"#;

const WORKSTATION_LOG: &str =
    "Dependency order of packages: cygwin bash libncursesw10 libcurl4 vim git\n";

#[test]
fn reports_explicitly_installed_packages() {
    let install = TestInstall::new("roots-basic", WORKSTATION_INI, WORKSTATION_LOG);
    assert_eq!(install.roots(), "git,vim");
}

#[test]
fn requirement_cycle_collapses_to_one_root() {
    let install = TestInstall::new(
        "roots-cycle",
        "@ autoconf\ncategory: Devel\nrequires: automake\n\n@ automake\ncategory: Devel\nrequires: autoconf\n",
        "Dependency order of packages: autoconf automake\n",
    );
    assert_eq!(install.roots(), "autoconf");
}

#[test]
fn base_packages_are_excluded_from_roots() {
    let install = TestInstall::new(
        "roots-base",
        "@ base-files\ncategory: Base\n\n@ xterm\ncategory: X11\n",
        "Dependency order of packages: base-files xterm\n",
    );
    assert_eq!(install.roots(), "xterm");
}

#[test]
fn uninstalled_requirements_are_skipped_with_a_warning() {
    let install = TestInstall::new(
        "roots-missing",
        "@ vim\ncategory: Editors\nrequires: bash libfoo\n\n@ bash\ncategory: Shells\n",
        "Dependency order of packages: bash vim\n",
    );

    let output = install.run();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    assert!(output.status.success(), "cygroots failed\nstderr:\n{stderr}");
    assert_eq!(stdout.trim_end(), "vim");
    assert!(
        stderr.contains("libfoo"),
        "expected warning about libfoo, got:\n{stderr}"
    );
}

#[test]
fn fully_base_installation_has_no_roots() {
    let install = TestInstall::new(
        "roots-empty",
        "@ cygwin\ncategory: Base\n\n@ base-files\ncategory: Base\nrequires: cygwin\n",
        "Dependency order of packages: cygwin base-files\n",
    );
    assert_eq!(install.roots(), "");
}
