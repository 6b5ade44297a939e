//! main.rs
//! Entry point for fcd

pub(crate) mod app;
pub(crate) mod config;
pub(crate) mod core;
pub(crate) mod ui;
pub(crate) mod utils;

use crate::app::session::NO_SELECTION;
use crate::config::Config;
use crate::core::terminal::run_terminal;
use crate::core::walk::spawn_walker;
use crate::utils::cli::{CliAction, HELP_EXIT_CODE, handle_args, print_help};
use crate::utils::helpers::resolve_selection;

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[fcd] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let root = match handle_args() {
        CliAction::Help => {
            print_help();
            std::process::exit(HELP_EXIT_CODE);
        }
        CliAction::Invalid(msg) => {
            eprintln!("[fcd] Error: {msg}");
            std::process::exit(1);
        }
        CliAction::Run(root) => root,
    };

    let config = Config::load();

    // The walk runs while the terminal is being set up; the event loop joins
    // it before accepting input.
    let corpus_rx = spawn_walker(root);

    match run_terminal(&config, corpus_rx)? {
        Some(selected) => {
            let resolved = resolve_selection(&selected)?;
            println!("{}", resolved.display());
            Ok(())
        }
        None => {
            println!("{NO_SELECTION}");
            std::process::exit(1);
        }
    }
}
