// Logbook - app/session.rs
//
// Interactive contact assistant session. Owns the contact store for the
// lifetime of the session and drives the read -> dispatch -> print loop.
//
// Generic over BufRead/Write so the same loop serves a terminal and the
// tests' in-memory buffers.

use crate::core::command::{self, Outcome};
use crate::core::contacts::ContactStore;
use crate::util::constants;
use std::io::{self, BufRead, Write};

/// One assistant session.
#[derive(Debug)]
pub struct Session {
    store: ContactStore,
    prompt: String,
}

impl Session {
    /// New session with an empty store.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            store: ContactStore::new(),
            prompt: prompt.into(),
        }
    }

    /// The contacts collected so far.
    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Handle one line of input.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        command::dispatch(&mut self.store, line)
    }

    /// Run until `close`/`exit` or end of input.
    ///
    /// End of input ends the session the same way `exit` does. Read and
    /// write errors are returned to the caller.
    pub fn run<R: BufRead, W: Write + ?Sized>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", constants::WELCOME)?;
        tracing::info!("Assistant session started");

        let mut line = String::new();
        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                // Prompt was left without a newline.
                writeln!(out)?;
                writeln!(out, "{}", constants::FAREWELL)?;
                tracing::info!(contacts = self.store.len(), "Input closed; session ended");
                break;
            }

            match self.handle_line(&line) {
                Outcome::Reply(text) => writeln!(out, "{text}")?,
                Outcome::Exit(text) => {
                    writeln!(out, "{text}")?;
                    tracing::info!(contacts = self.store.len(), "Session ended by user");
                    break;
                }
            }
        }

        out.flush()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(constants::DEFAULT_PROMPT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Session, String) {
        let mut session = Session::new("> ");
        let mut out = Vec::new();
        session.run(Cursor::new(script), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_exit_ends_session() {
        let (_, output) = run_script("hello\nexit\nhello\n");
        assert_eq!(
            output,
            "Welcome to the assistant bot!\n\
             > How can I help you?\n\
             > Good bye!\n"
        );
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (_, output) = run_script("hello\n");
        assert!(output.ends_with("> How can I help you?\n> \nGood bye!\n"));
    }

    #[test]
    fn test_store_persists_across_lines() {
        let (session, output) = run_script("add Alice 123\nadd Bob 456\nall\nclose\n");
        assert_eq!(session.store().len(), 2);
        assert!(output.contains("> Alice: 123\nBob: 456\n"));
    }

    #[test]
    fn test_blank_line_asks_for_command() {
        let (_, output) = run_script("\n   \nexit\n");
        assert_eq!(output.matches("Please enter a command.").count(), 2);
    }
}
