// Command-line interface for blockmark
//
// Converts hand-written HTML templates into comment-delimited block markup that a block editor
// can load, and inspects the block trees along the way.
//
// Converting:
//
// The conversion needs a from and to pair. The from is auto-detected from the file extension,
// while being overwrittable by an explicit --from flag. The to defaults to block markup.
// Usage:
//  blockmark <input> [--to <format>] [--from <format>] [-o <path>]          - Convert (default)
//  blockmark convert <input> [--to <format>] [--from <format>] [-o <path>]  - Same as above
//  blockmark inspect <input> [--from <format>]                              - Print the block tree as JSON
//  blockmark --list-formats                                                  - List available formats
//
// A directory input converts every matching file below it into the -o directory. Failed files are
// reported and skipped; the exit status is non-zero if any file failed.
//
// Settings come from the embedded defaults, ./blockmark.toml, --config and finally the command
// line flags, in that order.

use anyhow::{bail, Context, Result};
use blockmark_babel::{ConversionContext, Format, FormatRegistry, HandlerRegistry};
use blockmark_cli::batch::{write_output, Conversion, HeaderSettings};
use blockmark_config::{BlockmarkConfig, Loader, LOCAL_CONFIG_FILE};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "help"];
const DEFAULT_TARGET: &str = "blocks";
const DEFAULT_DIRECTORY_SOURCE: &str = "html";

fn build_cli() -> Command {
    Command::new("blockmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert HTML templates into block editor markup")
        .long_about(
            "blockmark turns HTML templates, including <Pattern>, <TemplatePart> and\n\
            <Navigation> elements, into comment-delimited block markup.\n\n\
            Commands:\n  \
            - convert: Convert a file or directory (default command)\n  \
            - inspect: Print the block tree of a file as JSON\n\n\
            Examples:\n  \
            blockmark page.html                              # Block markup on stdout\n  \
            blockmark page.html -o page.blocks               # Write to a file\n  \
            blockmark templates/ -o patterns/ --pattern-header\n  \
            blockmark inspect page.html                      # Block tree as JSON",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a blockmark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug details to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a file or directory (default command)")
                .long_about(
                    "Convert between formats.\n\n\
                    Formats:\n  \
                    - html:   HTML templates (.html, .htm), input only\n  \
                    - blocks: Block markup (.blocks)\n  \
                    - json:   Block trees as JSON (.json)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\
                    Directory inputs require -o and keep the relative layout.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file or directory")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::AnyPath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .default_value(DEFAULT_TARGET)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file, or directory for directory inputs (defaults to stdout)")
                        .value_hint(ValueHint::AnyPath),
                )
                .arg(
                    Arg::new("destination")
                        .long("destination")
                        .help("Where the markup is stored: content doubles backslashes, page does not")
                        .value_parser(clap::builder::PossibleValuesParser::new([
                            "content", "page",
                        ])),
                )
                .arg(
                    Arg::new("pattern-header")
                        .long("pattern-header")
                        .help("Prefix output with a pattern registration header")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the block tree of a file as JSON")
                .arg(
                    Arg::new("input")
                        .help("Input file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let matches = parse_args(&args);

    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Parse arguments, treating a leading path as an implicit `convert`
fn parse_args(args: &[String]) -> ArgMatches {
    let cli = build_cli();
    match cli.clone().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => {
            if args.len() > 1
                && !args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&args[1].as_str())
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(matches) => matches,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit()
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "blockmark=debug"
    } else {
        "blockmark=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(matches: &ArgMatches) -> Result<ExitCode> {
    let formats = FormatRegistry::default();

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&formats);
        return Ok(ExitCode::SUCCESS);
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => handle_convert_command(matches, sub_matches, &formats),
        Some(("inspect", sub_matches)) => handle_inspect_command(matches, sub_matches, &formats),
        _ => bail!("Unknown subcommand. Use --help for usage information."),
    }
}

/// Embedded defaults, then ./blockmark.toml, then --config, then command line overrides
fn load_cli_config(
    matches: &ArgMatches,
    sub_matches: Option<&ArgMatches>,
) -> Result<BlockmarkConfig> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    if let Some(sub_matches) = sub_matches {
        if let Some(destination) = sub_matches.get_one::<String>("destination") {
            loader = loader.set_override("convert.destination", destination.as_str())?;
        }
        if sub_matches.get_flag("pattern-header") {
            loader = loader.set_override("pattern.header", true)?;
        }
    }

    loader.build().context("Failed to load configuration")
}

fn handler_registry(config: &BlockmarkConfig) -> Result<HandlerRegistry> {
    let handlers = config
        .handlers
        .registry()
        .context("Invalid [handlers] configuration")?;
    debug!(handlers = ?handlers.handlers(), "custom element handlers");
    Ok(handlers)
}

fn source_format(
    formats: &FormatRegistry,
    input: &str,
    explicit: Option<&String>,
) -> Result<String> {
    if let Some(from) = explicit {
        return Ok(from.clone());
    }
    if Path::new(input).is_dir() {
        return Ok(DEFAULT_DIRECTORY_SOURCE.to_string());
    }
    match formats.detect_format_from_filename(input) {
        Some(detected) => Ok(detected),
        None => bail!(
            "Could not detect format from filename '{input}'. Please specify --from explicitly"
        ),
    }
}

fn handle_convert_command(
    matches: &ArgMatches,
    sub_matches: &ArgMatches,
    formats: &FormatRegistry,
) -> Result<ExitCode> {
    let input = sub_matches
        .get_one::<String>("input")
        .expect("input is required");
    let to = sub_matches
        .get_one::<String>("to")
        .expect("to has a default value");
    let output = sub_matches.get_one::<String>("output");

    let config = load_cli_config(matches, Some(sub_matches))?;
    let handlers = handler_registry(&config)?;
    let from = source_format(formats, input, sub_matches.get_one::<String>("from"))?;

    // Check both ends before touching any file
    check_capability(formats.get(&from)?, Capability::Parse)?;
    check_capability(formats.get(to)?, Capability::Serialize)?;

    let header = if config.pattern.header {
        if to == DEFAULT_TARGET {
            Some(HeaderSettings {
                namespace: config.pattern.namespace.clone(),
                categories: config.pattern.categories.clone(),
            })
        } else {
            warn!("pattern header is only written for block markup, not '{to}'");
            None
        }
    } else {
        None
    };

    let conversion = Conversion {
        formats,
        ctx: ConversionContext::new(&handlers).with_escape(config.convert.escape_policy()),
        from,
        to: to.clone(),
        header,
    };
    debug!(
        from = %conversion.from,
        to = %conversion.to,
        destination = config.convert.destination.name(),
        "starting conversion"
    );

    let input_path = Path::new(input);
    if input_path.is_dir() {
        let Some(output) = output else {
            bail!("Converting a directory requires --output <DIR>");
        };
        let summary = conversion.convert_directory(input_path, Path::new(output))?;
        if summary.failed > 0 {
            eprintln!(
                "Error: {} of {} file(s) failed to convert",
                summary.failed,
                summary.converted + summary.failed
            );
            return Ok(ExitCode::FAILURE);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let converted = conversion.convert_file(input_path)?;
    match output {
        Some(path) => {
            write_output(Path::new(path), &converted)?;
            info!("wrote {path}");
        }
        None => print!("{converted}"),
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_inspect_command(
    matches: &ArgMatches,
    sub_matches: &ArgMatches,
    formats: &FormatRegistry,
) -> Result<ExitCode> {
    let input = sub_matches
        .get_one::<String>("input")
        .expect("input is required");

    let config = load_cli_config(matches, None)?;
    let handlers = handler_registry(&config)?;
    let from = source_format(formats, input, sub_matches.get_one::<String>("from"))?;

    let conversion = Conversion {
        formats,
        ctx: ConversionContext::new(&handlers).with_escape(config.convert.escape_policy()),
        from,
        to: "json".to_string(),
        header: None,
    };
    print!("{}", conversion.convert_file(Path::new(input))?);
    Ok(ExitCode::SUCCESS)
}

#[derive(Clone, Copy)]
enum Capability {
    Parse,
    Serialize,
}

fn check_capability(format: &dyn Format, capability: Capability) -> Result<()> {
    match capability {
        Capability::Parse if !format.supports_parsing() => {
            bail!("Format '{}' does not support parsing", format.name())
        }
        Capability::Serialize if !format.supports_serialization() => {
            bail!("Format '{}' does not support serialization", format.name())
        }
        _ => Ok(()),
    }
}

fn handle_list_formats_command(formats: &FormatRegistry) {
    println!("Available formats:\n");
    for name in formats.list_formats() {
        let Ok(format) = formats.get(&name) else {
            continue;
        };
        let capabilities = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "parse, serialize",
            (true, false) => "parse",
            (false, true) => "serialize",
            (false, false) => "",
        };
        println!(
            "  {:<8} {:<18} {} (.{})",
            name,
            capabilities,
            format.description(),
            format.file_extensions().join(", .")
        );
    }
}
