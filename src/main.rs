mod cli;
mod logging;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use copypasta_ext::prelude::*;
use tracing::{info, warn};

use randkit::charsets;
use randkit::config::Config;
use randkit::param::FileInfo;
use randkit::{RandomError, generate_string, generate_token};

use crate::cli::{Cli, Command, OutputArgs, StringArgs};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let load_config = || Config::load(cli.config.as_deref()).context("could not load config");

    let (values, output, config) = match cli.command {
        Command::Presets => {
            for (name, chars) in charsets::PRESETS {
                println!("{:<16}{}", name, chars);
            }
            return Ok(());
        }
        Command::String(args) => {
            let config = load_config()?;
            let charset = resolve_charset(&args, &config)?;
            let length = args.length.unwrap_or(config.string_length);
            let values = generate_many(args.output.count, || {
                generate_string(length, charset.as_deref())
            })?;
            (values, args.output, config)
        }
        Command::Token(args) => {
            let config = load_config()?;
            let length = args.length.unwrap_or(config.token_length);
            let values = generate_many(args.output.count, || generate_token(length))?;
            (values, args.output, config)
        }
    };

    emit(&values, &output, &config)
}

fn resolve_charset(args: &StringArgs, config: &Config) -> Result<Option<String>> {
    if let Some(charset) = &args.charset {
        return Ok(Some(charset.clone()));
    }

    if let Some(name) = &args.preset {
        let chars = charsets::preset(name).ok_or_else(|| anyhow!("unknown preset: {}", name))?;
        return Ok(Some(chars.to_string()));
    }

    Ok(config.charset.clone())
}

fn generate_many<F>(count: u32, mut generate: F) -> Result<Vec<String>, RandomError>
where
    F: FnMut() -> Result<String, RandomError>,
{
    (0..count).map(|_| generate()).collect()
}

fn emit(values: &[String], args: &OutputArgs, config: &Config) -> Result<()> {
    let target = args.output.clone().map(FileInfo::from).or_else(|| config.output.clone());

    match &target {
        Some(file) => {
            let handle = File::create(file.path())
                .with_context(|| format!("could not create {}", file.path().display()))?;
            write_lines(BufWriter::new(handle), values)?;
            info!(path = %file.path().display(), count = values.len(), "wrote values");
        }
        None => write_lines(io::stdout().lock(), values)?,
    }

    if args.copy
        && let Some(last) = values.last()
    {
        copy_to_clipboard(last);
    }

    Ok(())
}

fn write_lines<W: Write>(mut writer: W, values: &[String]) -> io::Result<()> {
    for value in values {
        writeln!(writer, "{}", value)?;
    }
    writer.flush()
}

fn copy_to_clipboard(value: &str) {
    match copypasta_ext::try_context() {
        Some(mut ctx) => match ctx.set_contents(value.to_string()) {
            Ok(()) => info!("copied to clipboard"),
            Err(e) => warn!(error = %e, "could not copy to clipboard"),
        },
        None => warn!("no clipboard available"),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn malformed_config(tag: &str) -> std::path::PathBuf {
        let name = format!("randkit-{}-{}.json", tag, std::process::id());
        let path = std::env::temp_dir().join(name);
        fs::write(&path, "{ not json").unwrap();
        path
    }

    #[test]
    fn presets_ignore_config_file() {
        let path = malformed_config("presets");
        let cli = Cli::try_parse_from(["randkit", "--config", path.to_str().unwrap(), "presets"])
            .unwrap();

        let result = run(cli);
        fs::remove_file(&path).unwrap();

        assert!(result.is_ok());
    }

    #[test]
    fn generators_report_malformed_config() {
        let path = malformed_config("token");
        let cli = Cli::try_parse_from(["randkit", "--config", path.to_str().unwrap(), "token"])
            .unwrap();

        let result = run(cli);
        fs::remove_file(&path).unwrap();

        assert!(result.unwrap_err().to_string().contains("could not load config"));
    }

    #[test]
    fn oversized_length_fails_cleanly() {
        let path = std::env::temp_dir().join(format!("randkit-empty-{}.json", std::process::id()));
        fs::write(&path, "{}").unwrap();
        let cli = Cli::try_parse_from([
            "randkit",
            "--config",
            path.to_str().unwrap(),
            "string",
            "-L",
            "9223372036854775807",
        ])
        .unwrap();

        let result = run(cli);
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }
}
