//! Command-line argument parsing
//!
//! Supports:
//! - Opening a file (created on save if it doesn't exist)
//! - Replaying a command script, or reading commands from stdin
//! - Saving to an output path and printing the final buffer

use clap::Parser;
use std::path::PathBuf;

/// A line editor driven by command scripts
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "A line editor driven by command scripts")]
pub struct CliArgs {
    /// File to open
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Read commands from this script instead of stdin
    #[arg(short = 's', long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Save the buffer here after the session
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the final buffer to stdout
    #[arg(short = 'p', long)]
    pub print: bool,

    /// Spaces per tab (overrides config.yaml)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub tab_width: Option<u16>,
}

/// Where commands come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSource {
    /// Whole script file, parsed up front
    Script(PathBuf),
    /// Interactive, one line at a time
    Stdin,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub file: Option<PathBuf>,
    pub source: CommandSource,
    pub output: Option<PathBuf>,
    pub print: bool,
    pub tab_width: Option<usize>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> StartupConfig {
        let source = match self.script {
            Some(path) => CommandSource::Script(path),
            None => CommandSource::Stdin,
        };

        StartupConfig {
            file: self.file,
            source,
            output: self.output,
            print: self.print,
            tab_width: self.tab_width.map(usize::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_reads_stdin() {
        let args = CliArgs::parse_from(["quill"]);
        let config = args.into_config();
        assert_eq!(config.source, CommandSource::Stdin);
        assert!(config.file.is_none());
        assert!(!config.print);
    }

    #[test]
    fn test_script_and_output() {
        let args = CliArgs::parse_from([
            "quill",
            "notes.txt",
            "--script",
            "edit.qs",
            "-o",
            "out.txt",
            "--print",
        ]);
        let config = args.into_config();
        assert_eq!(config.file, Some(PathBuf::from("notes.txt")));
        assert_eq!(
            config.source,
            CommandSource::Script(PathBuf::from("edit.qs"))
        );
        assert_eq!(config.output, Some(PathBuf::from("out.txt")));
        assert!(config.print);
    }

    #[test]
    fn test_tab_width_override() {
        let args = CliArgs::parse_from(["quill", "--tab-width", "8"]);
        assert_eq!(args.into_config().tab_width, Some(8));
    }

    #[test]
    fn test_zero_tab_width_is_rejected() {
        assert!(CliArgs::try_parse_from(["quill", "--tab-width", "0"]).is_err());
    }
}
