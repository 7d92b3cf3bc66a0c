//! Thinking indicator shown while waiting on the model.
//!
//! Braille frames on unicode-capable terminals, ASCII frames otherwise.
//! Piped output gets a single static line instead of redraw escapes.

use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

const BRAILLE_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const ASCII_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Redraw interval. One frame per tick.
const TICK: Duration = Duration::from_millis(160);

/// Erase the current line and return the cursor to column 0.
const ERASE_LINE: &str = "\r\x1b[2K";

/// Pick the frame set for the terminal's locale.
fn frames_for(unicode: bool) -> &'static [&'static str] {
    if unicode {
        &BRAILLE_FRAMES
    } else {
        &ASCII_FRAMES
    }
}

/// Locale check: any of LC_ALL / LC_CTYPE / LANG declaring UTF.
fn locale_is_unicode() -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .next()
        .map(|value| value.to_uppercase().contains("UTF"))
        .unwrap_or(false)
}

/// Animated thinking indicator.
///
/// The channel doubles as tick clock and stop signal: each timeout draws
/// one frame, the first message (or a dropped sender) ends the thread.
pub struct Spinner {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
    started: Instant,
}

impl Spinner {
    /// Start the indicator with a message.
    pub fn new(message: &str) -> Self {
        let started = Instant::now();

        if !io::stdout().is_terminal() {
            println!("[scout]  ... {message}");
            return Self {
                stop_tx: None,
                handle: None,
                started,
            };
        }

        let frames = frames_for(locale_is_unicode());
        let message = message.to_string();
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = std::thread::spawn(move || {
            for frame in frames.iter().cycle() {
                print!(
                    "{ERASE_LINE}{}  {} {}",
                    "[scout]".bright_cyan(),
                    frame.bright_yellow(),
                    message.dimmed()
                );
                let _ = io::stdout().flush();

                match stop_rx.recv_timeout(TICK) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    _ => break,
                }
            }
            print!("{ERASE_LINE}");
            let _ = io::stdout().flush();
        });

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
            started,
        }
    }

    /// Stop the indicator, clear its line, and return elapsed time.
    pub fn stop(mut self) -> Duration {
        self.halt();
        self.started.elapsed()
    }

    fn halt(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.halt();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_frames_are_plain_ascii() {
        for frame in frames_for(false) {
            assert!(frame.is_ascii(), "{frame:?} is not ASCII");
            assert_eq!(frame.chars().count(), 1);
        }
    }

    #[test]
    fn test_unicode_locale_gets_braille() {
        let braille = frames_for(true);
        assert!(braille.iter().all(|f| !f.is_ascii()));
        assert_ne!(braille, frames_for(false));
    }
}
