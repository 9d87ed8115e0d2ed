use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod types;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a payload and print its readings.
    Decode(DecodeArgs),
    /// Encode readings given as JSON into a payload.
    Encode(EncodeArgs),
    /// List the known data types.
    Types(TypesArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Encode(args) => encode::run(args, format),
        Command::Types(args) => types::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Text encoding of a binary payload on the command line.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum PayloadEncoding {
    Hex,
    Base64,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Payload text, or `-` to read it from stdin.
    pub payload: String,
    /// Payload text encoding.
    #[arg(long, short = 'i', value_enum, default_value = "hex")]
    pub input: PayloadEncoding,
    /// Render types by name instead of numeric id in JSON output.
    #[arg(long)]
    pub type_names: bool,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Readings as a JSON array of {channel, type, value} objects.
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,
    /// Read the JSON array from a file.
    #[arg(long, conflicts_with = "json")]
    pub file: Option<PathBuf>,
    /// Payload text encoding.
    #[arg(long, short = 'o', value_enum, default_value = "hex")]
    pub output: PayloadEncoding,
    /// Maximum payload size in bytes (0 = unlimited).
    #[arg(long, env = "LPPKIT_MAX_SIZE", default_value_t = 0)]
    pub max_size: usize,
}

#[derive(Args, Debug, Default)]
pub struct TypesArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
