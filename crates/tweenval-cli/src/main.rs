use indexmap::IndexMap;
use serde::Serialize;
use std::io::Read;
use tweenval::{camel_to_dash, is_hex, is_hsl, is_rgb, parse_color_checked, parse_float};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Color(tweenval::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Color(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<tweenval::Error> for CliError {
    fn from(value: tweenval::Error) -> Self {
        Self::Color(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Classify,
    Color,
    Dash,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    pretty: bool,
    values: Vec<String>,
}

#[derive(Serialize)]
struct ClassifyOut<'a> {
    value: &'a str,
    kind: &'a str,
}

#[derive(Serialize)]
struct ColorOut<'a> {
    value: &'a str,
    channels: IndexMap<String, f64>,
}

#[derive(Serialize)]
struct DashOut<'a> {
    value: &'a str,
    dash: String,
}

fn usage() -> &'static str {
    "tweenval-cli\n\
\n\
USAGE:\n\
  tweenval-cli [classify] [--pretty] [<value> ...]\n\
  tweenval-cli color [--pretty] [<value> ...]\n\
  tweenval-cli dash [--pretty] [<value> ...]\n\
\n\
NOTES:\n\
  - With no <value> arguments, values are read from stdin, one per line.\n\
  - classify prints the detected kind (hex|rgb|hsl|number|unit|string).\n\
  - color prints parsed channel maps; non-color input is an error.\n\
  - dash converts camelCase property names to dash-case.\n\
  - One JSON document is printed per input value.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut saw_command = false;

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "classify" if !saw_command && args.values.is_empty() => {
                args.command = Command::Classify;
                saw_command = true;
            }
            "color" if !saw_command && args.values.is_empty() => {
                args.command = Command::Color;
                saw_command = true;
            }
            "dash" if !saw_command && args.values.is_empty() => {
                args.command = Command::Dash;
                saw_command = true;
            }
            "--pretty" => args.pretty = true,
            "--" => {
                for rest in it.by_ref() {
                    args.values.push(rest.clone());
                }
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            value => args.values.push(value.to_string()),
        }
    }

    Ok(args)
}

fn read_values(args: &Args) -> Result<Vec<String>, CliError> {
    if !args.values.is_empty() {
        return Ok(args.values.clone());
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

fn classify(value: &str) -> &'static str {
    if is_hex(value) {
        "hex"
    } else if is_rgb(value) {
        "rgb"
    } else if is_hsl(value) {
        "hsl"
    } else if value.trim().parse::<f64>().is_ok() {
        "number"
    } else if !parse_float(value).is_nan() {
        "unit"
    } else {
        "string"
    }
}

fn emit<T: Serialize>(out: &T, pretty: bool) -> Result<(), CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(out)?
    } else {
        serde_json::to_string(out)?
    };
    println!("{json}");
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let values = read_values(&args)?;

    for value in &values {
        match args.command {
            Command::Classify => emit(
                &ClassifyOut {
                    value,
                    kind: classify(value),
                },
                args.pretty,
            )?,
            Command::Color => emit(
                &ColorOut {
                    value,
                    channels: parse_color_checked(value)?,
                },
                args.pretty,
            )?,
            Command::Dash => emit(
                &DashOut {
                    value,
                    dash: camel_to_dash(value),
                },
                args.pretty,
            )?,
        }
    }

    Ok(())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
