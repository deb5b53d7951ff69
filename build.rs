//! Build script rendering the `fragmentator(1)` man page from the CLI
//! definition.
//!
//! The page lands in `target/generated-man` unless `FRAGMENTATOR_MAN_DIR`
//! names another directory.

use std::{env, fs, path::PathBuf};

use clap::CommandFactory;
use clap_mangen::Man;

#[path = "src/cli.rs"]
mod cli;

const MAN_DIR_VAR: &str = "FRAGMENTATOR_MAN_DIR";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-env-changed={MAN_DIR_VAR}");

    let out_dir = env::var_os(MAN_DIR_VAR)
        .map_or_else(|| PathBuf::from("target/generated-man"), PathBuf::from);
    fs::create_dir_all(&out_dir)?;

    let page = Man::new(cli::Cli::command()).manual("Fragmentator Manual");
    let mut rendered = Vec::new();
    page.render(&mut rendered)?;
    fs::write(out_dir.join("fragmentator.1"), rendered)?;

    Ok(())
}
