//! Renders `vigil.1` plus one page per command group into `$OUT_DIR/man`.

use std::env;
use std::fs;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_mangen::Man;

#[path = "src/cli.rs"]
#[allow(dead_code)]
mod cli;

fn main() -> io::Result<()> {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let Some(out_dir) = env::var_os("OUT_DIR") else {
        return Ok(());
    };
    let man_dir = Path::new(&out_dir).join("man");
    fs::create_dir_all(&man_dir)?;

    let vigil = cli::Cli::command();
    write_page(&vigil, &man_dir)?;
    for group in vigil.get_subcommands() {
        let page = group.clone().name(format!("vigil-{}", group.get_name()));
        write_page(&page, &man_dir)?;
    }
    Ok(())
}

fn write_page(cmd: &clap::Command, dir: &Path) -> io::Result<()> {
    let mut page = Vec::new();
    Man::new(cmd.clone()).render(&mut page)?;
    fs::write(dir.join(format!("{}.1", cmd.get_name())), page)
}
