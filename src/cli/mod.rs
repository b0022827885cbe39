use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use serde::Serialize;

use crate::core::installation::Installation;
use crate::error::{CygrootsError, Result};
use crate::graph::roots::find_roots;
use crate::setup::resolve::{resolve_inifile, resolve_setup_log};
use crate::util::output;

#[derive(Parser, Debug)]
#[command(name = "cygroots")]
#[command(about = "Find the root packages of a Cygwin installation", long_about = None)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub inifile: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    pub setup_rc: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    pub setup_log: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

pub fn run() {
    let cli = Cli::parse();
    if let Err(err) = dispatch(cli) {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "cygroots", &mut std::io::stdout());
        return Ok(());
    }

    let inifile = resolve_inifile(cli.inifile, cli.setup_rc)?;
    let setup_log = resolve_setup_log(cli.setup_log);
    let installation = Installation::load(&inifile, &setup_log)?;

    for missing in &installation.missing {
        output::warn(&format!(
            "{} requires {} which is not installed",
            missing.from.as_str(),
            missing.to.as_str()
        ));
    }

    let base = installation.base_packages();
    let roots = find_roots(&installation.graph, &base)?;
    let names: Vec<String> = roots
        .iter()
        .map(|name| name.as_str().to_string())
        .collect();

    if cli.json {
        let report = RootsJson {
            roots: names,
            missing: installation
                .missing
                .iter()
                .map(|entry| MissingRequireJson {
                    from: entry.from.as_str().to_string(),
                    to: entry.to.as_str().to_string(),
                })
                .collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report)
                .map_err(|err| CygrootsError::Other(anyhow::Error::new(err)))?
        );
        return Ok(());
    }

    println!("{}", names.join(","));
    Ok(())
}

#[derive(Serialize)]
struct RootsJson {
    roots: Vec<String>,
    missing: Vec<MissingRequireJson>,
}

#[derive(Serialize)]
struct MissingRequireJson {
    from: String,
    to: String,
}
