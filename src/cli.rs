use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "randkit",
    version,
    about = "Cryptographically secure random strings and hex tokens"
)]
pub struct Cli {
    /// Config file (defaults to <config dir>/randkit/config.json)
    #[arg(long, env = "RANDKIT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, env = "RANDKIT_LOG_LEVEL", default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Random string from a character set
    String(StringArgs),
    /// Lowercase hexadecimal token
    Token(TokenArgs),
    /// List the predefined character sets
    Presets,
}

#[derive(Debug, Args)]
pub struct StringArgs {
    #[arg(short = 'L', long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Predefined character set (see `randkit presets`)
    #[arg(short, long, conflicts_with = "charset")]
    pub preset: Option<String>,

    /// Custom character set, single-byte characters only
    #[arg(short, long)]
    pub charset: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct TokenArgs {
    #[arg(short = 'L', long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Number of values to generate, one per line
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub count: u32,

    /// Write values to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Copy the last value to the clipboard
    #[arg(long)]
    pub copy: bool,
}
