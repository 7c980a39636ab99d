/// Text3D - convert a line of text into a printable STL mesh
///
/// Usage:
///   text3d                       interactive: list fonts, prompt for input
///   text3d TEXT [OUTPUT] [FONT]  one-shot conversion
///
/// Set RUST_LOG=debug for pipeline details.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use text3d_core::{convert, ConvertError, ConvertSummary, TextConfig};

mod fonts;

const DEFAULT_OUTPUT: &str = "text_3d.stl";
const DEFAULT_FONT: &str = "/System/Library/Fonts/Helvetica.ttc";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let (text, output, config) = if args.is_empty() {
        match gather_interactive() {
            Ok(input) => input,
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        gather_from_args(&args)
    };

    report(convert(&text, &output, &config))
}

fn print_usage() {
    println!("Usage: text3d [TEXT] [OUTPUT] [FONT]");
    println!();
    println!("With no arguments the tool lists the fonts found on this system");
    println!("and prompts for text, font, size and letter spacing.");
}

fn report(result: Result<ConvertSummary, ConvertError>) -> ExitCode {
    match result {
        Ok(summary) => {
            println!("STL file has been created: {}", summary.path.display());
            ExitCode::SUCCESS
        }
        Err(ConvertError::EmptyResult) => {
            println!("No valid characters to create mesh");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn gather_from_args(args: &[String]) -> (String, PathBuf, TextConfig) {
    let text = args[0].clone();
    let output = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let font_path = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(default_font_path);

    let config = TextConfig {
        font_path,
        ..TextConfig::default()
    };
    (text, output, config)
}

/// Interactive flow: list fonts, then prompt for every parameter with the
/// defaults shown.
fn gather_interactive() -> io::Result<(String, PathBuf, TextConfig)> {
    let fonts = fonts::list_system_fonts();

    println!("Available fonts:");
    for name in fonts.keys() {
        println!("- {}", name);
    }
    println!();

    let text = prompt("Enter the text to convert to STL: ")?;
    let font_name = prompt("Enter font name (or press Enter for default): ")?;
    let font_size = prompt("Enter font size (default: 150): ")?
        .parse()
        .unwrap_or(150);
    let letter_spacing = prompt("Enter letter spacing (default: 50): ")?
        .parse()
        .unwrap_or(50.0);

    let font_path = match fonts.get(&font_name) {
        Some(path) => path.clone(),
        None => default_font_path(),
    };

    let config = TextConfig {
        font_path,
        font_size,
        letter_spacing,
        ..TextConfig::default()
    };
    Ok((text, PathBuf::from(DEFAULT_OUTPUT), config))
}

/// Default font, falling back to the first discovered system font on
/// platforms where the default path does not exist.
fn default_font_path() -> PathBuf {
    let default = PathBuf::from(DEFAULT_FONT);
    if default.exists() {
        return default;
    }
    fonts::list_system_fonts()
        .into_values()
        .next()
        .unwrap_or(default)
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
