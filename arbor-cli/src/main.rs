// Command-line interface for arbor
//
// This binary converts a document between XML, JSON and YAML. All of the work happens in
// arbor-babel; this crate only parses arguments, loads configuration, writes the diagnostic
// log and maps the outcome to an exit status.
//
// Usage:
//  arbor <input> <output> [--from <format>] [--to <format>]   - Convert a file into another file
//  arbor <input> --to <format>                                - Convert and print to stdout
//  arbor --list-formats                                       - List available formats
//
// Formats are detected from the file extensions (.xml, .json, .yml, .yaml) and can be
// overridden with --from and --to.
//
// Extra Parameters:
//
// Serializer options can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the target format,
// on top of the defaults taken from the configuration.
// Example:
//  arbor data.json data.xml --extra-root-tag catalog --extra-indent "    "

mod logging;

use arbor_babel::formats::{KeyValueFormat, MarkupFormat};
use arbor_babel::{convert_file, ConvertArtifact, ConvertSpec, FormatError, FormatRegistry};
use arbor_config::{ArborConfig, LoadError, Loader};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::collections::HashMap;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};

/// Failures the shell reports before or around a conversion.
#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] LoadError),

    #[error(transparent)]
    Convert(#[from] FormatError),
}

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            // A following token that is not a flag is the value
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with("--"));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("arbor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert documents between XML, JSON and YAML")
        .long_about(
            "arbor converts hierarchical documents between three formats:\n\n  \
            - markup:   XML (.xml)\n  \
            - keyvalue: JSON (.json)\n  \
            - flow:     YAML (.yml, .yaml)\n\n\
            Formats are detected from the file extensions unless --from/--to are given.\n\
            Without an output path the result is printed to stdout and --to is required.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> <value> to pass serializer options to the target format.\n  \
            markup accepts root-tag, indent, declaration and sequence-tag; keyvalue accepts indent.\n\n\
            Examples:\n  \
            arbor catalog.xml catalog.json               # XML to JSON\n  \
            arbor catalog.json --to flow                 # JSON to YAML on stdout\n  \
            arbor data.yaml out.xml --extra-root-tag data",
        )
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
        )
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    let matches = match build_cli().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        // Help and version go to stdout with a zero status
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return ExitCode::SUCCESS;
    }

    let config = match load_cli_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if config.log.enabled {
        if let Err(e) = logging::init(&config.log) {
            eprintln!("Warning: diagnostic log disabled: {e}");
        }
    }

    let registry = build_registry(&config);
    match handle_convert_command(&registry, &matches, extra_params) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Handle the conversion, logging one record for its outcome
fn handle_convert_command(
    registry: &FormatRegistry,
    matches: &ArgMatches,
    extra_params: HashMap<String, String>,
) -> Result<(), CliError> {
    let input = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or_default();

    let spec = build_convert_spec(matches, extra_params);
    let result = convert_file(registry, &spec);

    match result {
        Ok(ConvertArtifact::File(path)) => {
            info!(input, output = %path.display(), "conversion succeeded");
            Ok(())
        }
        Ok(ConvertArtifact::InMemory(text)) => {
            info!(input, output = "stdout", "conversion succeeded");
            print!("{text}");
            Ok(())
        }
        Err(e) => {
            error!(input, error = %e, "conversion failed");
            Err(e.into())
        }
    }
}

/// Registry whose markup and keyvalue adapters carry the configured defaults
fn build_registry(config: &ArborConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::default();
    registry.register(MarkupFormat::new((&config.markup).into()));
    registry.register(KeyValueFormat::new(config.keyvalue.indent));
    registry
}

/// Assemble the conversion request from the arguments
///
/// The --extra-* parameters become per-call options, layered by the target adapter over
/// its configured defaults.
fn build_convert_spec(matches: &ArgMatches, extra_params: HashMap<String, String>) -> ConvertSpec {
    let input = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or_default();

    let mut spec = ConvertSpec::new(input);
    if let Some(path) = matches.get_one::<String>("output") {
        spec = spec.with_output_path(path);
    }
    if let Some(format) = matches.get_one::<String>("from") {
        spec = spec.with_from(format);
    }
    if let Some(format) = matches.get_one::<String>("to") {
        spec = spec.with_to(format);
    }
    spec.options = extra_params;
    spec
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();

    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let extensions: Vec<String> = format
                .file_extensions()
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect();
            println!(
                "  {:<10}{:<14}{}",
                name,
                extensions.join(", "),
                format.description()
            );
        }
    }
}

fn load_cli_config(matches: &ArgMatches) -> Result<ArborConfig, CliError> {
    let mut loader = Loader::new().with_optional_file("arbor.toml");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(path) = matches.get_one::<String>("log-file") {
        loader = loader.set_override("log.path", path.as_str())?;
    }
    if matches.get_flag("no-log") {
        loader = loader.set_override("log.enabled", false)?;
    }

    Ok(loader.build()?)
}
