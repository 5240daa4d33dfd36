//! recfmt: Format network record values from the command line.
//!
//! Part of the netrec-fmt tools.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use netrec_fmt::cli::args::{ConfigArgs, LogArgs, load_enum, parse_value};
use netrec_fmt::cli::cases::{load_cases, render_cases};
use netrec_fmt::{EnumDefinition, Formatter};

/// Format typed network record values for display.
#[derive(Debug, Parser)]
#[command(name = "recfmt", version, about)]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(flatten)]
    log: LogArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Format a single value.
    Value {
        /// Field type, e.g. GummeiData or PercentData.
        #[arg(value_name = "FIELD_TYPE")]
        field_type: String,

        /// Raw value: a JSON literal or plain text.
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,

        /// Format pattern, e.g. 0.00 or 0000.
        #[arg(short = 'f', long = "format", default_value = "")]
        format: String,

        /// JSON enum definition for EnumData fields.
        #[arg(short = 'e', long = "enum-file", value_name = "FILE")]
        enum_file: Option<PathBuf>,
    },

    /// Format every entry of a case file.
    Cases {
        /// JSON object of field type to {format, val, enum}.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    args.log.init_tracing();

    let formatter = match args.config.formatter() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&formatter, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(formatter: &Formatter, args: &Args) -> netrec_fmt::Result<()> {
    match &args.command {
        Command::Value {
            field_type,
            value,
            format,
            enum_file,
        } => {
            let enum_def: Option<EnumDefinition> = enum_file.as_deref().map(load_enum).transpose()?;
            let raw = parse_value(value);
            if args.log.verbose {
                eprintln!("{} -> {:?} (value {:?})", field_type, formatter.handler(field_type), raw);
            }
            println!("{}", formatter.format(field_type, &raw, format, enum_def.as_ref()));
        }
        Command::Cases { file } => {
            let cases = load_cases(file)?;
            if args.log.verbose {
                for field_type in cases.keys() {
                    eprintln!("{} -> {:?}", field_type, formatter.handler(field_type));
                }
            }
            for line in render_cases(formatter, &cases) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
