//! Command-line argument parsing and help for fcd.
//!
//! fcd takes at most one argument: a root path, `-s`/`--start` for the home
//! directory, or `-h`/`--help`. With no arguments the walk starts at the
//! current directory.
//!
//! Exit codes are part of the shell contract: 0 carries a resolved path on
//! stdout, 1 is any failure (including "no directory chosen"), and help exits
//! with 5 so wrappers like `cd "$(fcd)"` never treat usage text as a path.

use std::path::{Path, PathBuf};

/// Exit code for `-h`/`--help`.
pub const HELP_EXIT_CODE: i32 = 5;

/// What the process should do after argument parsing.
pub enum CliAction {
    /// Start the interactive session rooted at this path.
    Run(PathBuf),
    /// Print usage and exit with [HELP_EXIT_CODE].
    Help,
    /// Report the message on stderr and exit 1.
    Invalid(String),
}

/// Parse the process arguments.
pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        return CliAction::Invalid("Incorrect Amount of Arguments Given".to_string());
    }
    if args.len() < 2 {
        return CliAction::Run(PathBuf::from("."));
    }

    match args[1].as_str() {
        "-h" | "--help" => CliAction::Help,
        "-s" | "--start" => CliAction::Run(crate::utils::helpers::get_home()),
        arg => {
            if Path::new(arg).exists() {
                CliAction::Run(PathBuf::from(arg))
            } else {
                CliAction::Invalid(
                    "Unknown argument given -- Try using -h for help".to_string(),
                )
            }
        }
    }
}

pub fn print_help() {
    println!(
        r#"fcd - An interactive fuzzy path finder for the terminal

USAGE:
  fcd [PATH]
  cd "$(fcd)"

PATH:
  Directory to scan (defaults to the current directory)

OPTIONS:
  -s, --start             Scan from the home directory
  -h, --help              Print help information (exit code 5)

KEYS:
  type / backspace        Edit the search
  up / down / tab         Move the selection
  left / right            Shrink / grow the result window
  enter                   Print the selected directory and exit
  esc / ctrl-c            Exit without a selection (exit code 1)

ENVIRONMENT:
  FCD_CONFIG              Override the default config path
"#
    );
}
