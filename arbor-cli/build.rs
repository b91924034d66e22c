use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    // Mirror of build_cli() from src/main.rs
    // Build scripts can't access src/ modules, so the arguments are repeated here.
    // Format names are free text in both: the registry validates them at run time.
    let mut cmd = Command::new("arbor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert documents between XML, JSON and YAML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Input file path")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("Output file path (defaults to stdout)")
                .index(2)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("FORMAT")
                .help("Source format (auto-detected from the input extension if not specified)")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_name("FORMAT")
                .help("Target format (auto-detected from the output extension if not specified)")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an arbor.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("PATH")
                .help("Append the diagnostic log to this file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("no-log")
                .long("no-log")
                .help("Do not write the diagnostic log")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "arbor", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "arbor", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "arbor", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
