// Command-line interface for the noter format tools
//
// This binary provides commands for converting notes between external
// representations and the stored document JSON.
//
// The core capabilities use the noter-babel crate; this program is a thin
// shell over its FormatRegistry, adding file I/O, configuration layering and
// console error reporting (the library itself is shell agnostic).
//
// Importing:
//
//  noter import <input> [--from <format>] [--ref-map <file>] [--output <file>]
//
// Reads markup, converts it to the document tree, and writes the note JSON.
// The source format is auto-detected from the file extension and can be
// overridden with --from. A --ref-map JSON object maps attachment reference
// tokens to uploaded URLs so inline images survive the import.
//
// Exporting:
//
//  noter export <input> [--to <format>] [--output <file>]
//             [--metadata <bool>] [--attachments <bool>]
//
// Reads a stored note (title, timestamps, tags, content, attachments) as
// JSON and writes the flat-text rendition. Defaults for the metadata and
// attachments sections come from the configuration and can be overridden per
// invocation.

use clap::{Arg, ArgAction, Command, ValueHint};
use noter_babel::format::{ExportOptions, ImportOptions, NoteExport};
use noter_babel::formats::notestation::clean_markup;
use noter_babel::FormatRegistry;
use noter_config::{Loader, NoterConfig};
use std::collections::HashMap;
use std::fs;

fn build_cli() -> Command {
    Command::new("noter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for importing and exporting noter documents")
        .long_about(
            "noter converts notes between external formats and the stored\n\
            document JSON.\n\n\
            Commands:\n  \
            - import: Convert source markup into a note (document JSON)\n  \
            - export: Render a stored note as flat text (e.g. Markdown)\n\n\
            Examples:\n  \
            noter import backup.html                    # Note Station HTML to JSON (stdout)\n  \
            noter import note.md -o note.json           # Markdown to JSON file\n  \
            noter export note.json --to markdown        # Render note as Markdown\n  \
            noter export note.json --metadata false     # Without front matter",
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
                .help("Path to a noter.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("import")
                .about("Convert source markup into a note")
                .long_about(
                    "Convert an external document into the stored note JSON.\n\n\
                    Supported formats:\n  \
                    - notestation: Synology Note Station HTML (.html, .htm)\n  \
                    - markdown:    Markdown (.md, .markdown)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    noter import note.html                       # Convert to JSON (stdout)\n  \
                    noter import note.html --ref-map refs.json   # Resolve attachment refs\n  \
                    noter import note.md -o note.json            # Write to file",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("ref-map")
                        .long("ref-map")
                        .value_name("PATH")
                        .help("JSON file mapping attachment reference tokens to URLs")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Render a stored note as flat text")
                .long_about(
                    "Render a stored note JSON file in an export format.\n\n\
                    The input is the note as the backend stores it: title,\n\
                    createdAt/updatedAt timestamps, tags, content (document\n\
                    JSON) and attachments.\n\n\
                    Examples:\n  \
                    noter export note.json --to markdown         # Render as Markdown\n  \
                    noter export note.json -o note.md            # Write to file\n  \
                    noter export note.json --attachments false   # Skip the attachments section",
                )
                .arg(
                    Arg::new("input")
                        .help("Stored note JSON file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (defaults to markdown)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("metadata")
                        .long("metadata")
                        .value_name("BOOL")
                        .value_parser(clap::value_parser!(bool))
                        .help("Include the front-matter block (overrides config)"),
                )
                .arg(
                    Arg::new("attachments")
                        .long("attachments")
                        .value_name("BOOL")
                        .value_parser(clap::value_parser!(bool))
                        .help("Include the attachments section (overrides config)"),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("import", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            let ref_map = sub_matches.get_one::<String>("ref-map").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_import_command(input, from, ref_map, output, &config);
        }
        Some(("export", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches
                .get_one::<String>("to")
                .map(|s| s.as_str())
                .unwrap_or("markdown");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let metadata = sub_matches.get_one::<bool>("metadata").copied();
            let attachments = sub_matches.get_one::<bool>("attachments").copied();
            handle_export_command(input, to, output, metadata, attachments, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Load configuration, layering an explicit file or an optional ./noter.toml
/// over the embedded defaults.
fn load_cli_config(path: Option<&str>) -> NoterConfig {
    let loader = match path {
        Some(p) => Loader::new().with_file(p),
        None => Loader::new().with_optional_file("noter.toml"),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    })
}

/// Handle the import command
fn handle_import_command(
    input: &str,
    from: Option<&str>,
    ref_map_path: Option<&str>,
    output: Option<&str>,
    config: &NoterConfig,
) {
    let registry = FormatRegistry::default();

    // Auto-detect --from if not provided
    let from = match from {
        Some(f) => f.to_string(),
        None => match registry.detect_format_from_filename(input) {
            Some(detected) => detected,
            None => {
                eprintln!("Error: Could not detect format from filename '{input}'");
                eprintln!("Please specify --from explicitly");
                std::process::exit(1);
            }
        },
    };

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let source = if config.import.clean_markup && from == "notestation" {
        clean_markup(&source)
    } else {
        source
    };

    let mut options: ImportOptions = (&config.import).into();
    if let Some(path) = ref_map_path {
        let data = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file '{path}': {e}");
            std::process::exit(1);
        });
        let map: HashMap<String, String> = serde_json::from_str(&data).unwrap_or_else(|e| {
            eprintln!("Error parsing reference map '{path}': {e}");
            std::process::exit(1);
        });
        options.image_ref_map = map;
    }

    let note = registry.import(&source, &from, &options).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    let json = serde_json::to_string_pretty(&note).unwrap_or_else(|e| {
        eprintln!("Error serializing note: {e}");
        std::process::exit(1);
    });

    write_output(output, &json);
}

/// Handle the export command
fn handle_export_command(
    input: &str,
    to: &str,
    output: Option<&str>,
    metadata: Option<bool>,
    attachments: Option<bool>,
    config: &NoterConfig,
) {
    let registry = FormatRegistry::default();

    let data = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let note: NoteExport = serde_json::from_str(&data).unwrap_or_else(|e| {
        eprintln!("Error parsing note '{input}': {e}");
        std::process::exit(1);
    });

    let mut options: ExportOptions = (&config.export).into();
    if let Some(include) = metadata {
        options.include_metadata = include;
    }
    if let Some(include) = attachments {
        options.include_attachments = include;
    }

    let rendered = registry.export(&note, to, &options).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    write_output(output, &rendered);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();

    println!("Available formats:\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let directions = match (format.supports_import(), format.supports_export()) {
            (true, true) => "import, export",
            (true, false) => "import",
            (false, true) => "export",
            (false, false) => "-",
        };
        println!("  {name:<12} {:<40} [{directions}]", format.description());
    }
}

fn write_output(output: Option<&str>, contents: &str) {
    match output {
        Some(path) => {
            fs::write(path, contents).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            print!("{contents}");
        }
    }
}
