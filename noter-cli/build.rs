use clap::{Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the user-facing surface from src/main.rs.
// We need to duplicate this here since build scripts can't access src/ modules.
fn completion_cli() -> Command {
    Command::new("noter")
        .about("A tool for importing and exporting noter documents")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("import")
                .about("Convert source markup into a note")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("from").long("from"))
                .arg(
                    Arg::new("ref-map")
                        .long("ref-map")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Render a stored note as flat text")
                .arg(
                    Arg::new("input")
                        .help("Stored note JSON file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("to").long("to"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = completion_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "noter", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "noter", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "noter", &outdir)?;

    Ok(())
}
