//! Terminal setup and the interactive event loop for fcd.
//!
//! Handles raw mode, the alternate screen, and redirection to the controlling
//! terminal when stdout is piped (the final printed path is the piped payload,
//! so the UI itself must not land on stdout). Teardown runs on every return
//! path; the panic hook in `main` is the last-resort restore.

use crate::app::keymap::map_key;
use crate::app::session::{Session, Transition};
use crate::config::Config;
use crate::ui;
use crossbeam_channel::Receiver;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::fs::File;
use std::io::{self, IsTerminal, Write};

/// Where the UI draws: stdout when it is a terminal, `/dev/tty` otherwise.
enum SessionOut {
    Stdout(io::Stdout),
    Tty(File),
}

impl Write for SessionOut {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            SessionOut::Stdout(out) => out.write(buf),
            SessionOut::Tty(tty) => tty.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            SessionOut::Stdout(out) => out.flush(),
            SessionOut::Tty(tty) => tty.flush(),
        }
    }
}

/// Open the drawing target. Failing to open the controlling terminal while
/// stdout is piped is fatal at startup.
fn session_out() -> io::Result<SessionOut> {
    let stdout = io::stdout();
    if stdout.is_terminal() {
        Ok(SessionOut::Stdout(stdout))
    } else {
        let tty = File::options().write(true).open("/dev/tty").map_err(|e| {
            io::Error::other(format!("cannot open controlling terminal /dev/tty: {e}"))
        })?;
        Ok(SessionOut::Tty(tty))
    }
}

/// Initializes the terminal in raw mode and the alternate screen, waits for
/// the walker to deliver the corpus, then runs the interactive loop.
///
/// Blocks until confirm or cancel. Returns the selected path, or `None` when
/// the session ended without a selection.
pub fn run_terminal(
    config: &Config,
    corpus_rx: Receiver<Vec<String>>,
) -> io::Result<Option<String>> {
    let mut out = session_out()?;
    enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(out))?;

    let result = event_loop(&mut terminal, config, corpus_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    result
}

/// Main event loop: show the loading placeholder, join the walker, then feed
/// keypresses through the session state machine, redrawing after every event.
///
/// Input is fully synchronous: each keystroke re-ranks the whole corpus before
/// the next one is read, so there is nothing to debounce or cancel.
fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    corpus_rx: Receiver<Vec<String>>,
) -> io::Result<Option<String>>
where
    io::Error: From<<B as Backend>::Error>,
{
    terminal.draw(|f| ui::render_loading(f))?;

    let corpus = corpus_rx
        .recv()
        .map_err(|_| io::Error::other("directory walker thread failed"))?;
    let mut session = Session::new(config, corpus);

    loop {
        terminal.draw(|f| ui::render(f, &session))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(input) = map_key(key) else {
                    continue;
                };
                match session.apply(input) {
                    Transition::Confirmed => {
                        return Ok(session.selected().map(str::to_string));
                    }
                    Transition::Cancelled => return Ok(None),
                    Transition::Continue => {}
                }
            }
            // Resize redraws at the top of the loop.
            _ => {}
        }
    }
}
