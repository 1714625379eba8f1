//! Console Callback Handler
//!
//! Answers callbacks by prompting on a writer and reading lines from a
//! reader. When built with [`ConsoleCallbackHandler::stdio`], secret prompts
//! go through `rpassword` so the terminal does not echo the input.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::callback::{Callback, CallbackError, CallbackHandler, MessageType};
use crate::password::ClearTextPassword;

/// Line-oriented callback handler
pub struct ConsoleCallbackHandler<R, W> {
    reader: R,
    writer: W,
    /// Read secrets from the controlling terminal with echo disabled
    terminal: bool,
}

impl ConsoleCallbackHandler<StdinLock<'static>, Stdout> {
    /// Handler bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self {
            reader: io::stdin().lock(),
            writer: io::stdout(),
            terminal: true,
        }
    }
}

impl<R: BufRead, W: Write> ConsoleCallbackHandler<R, W> {
    /// Handler over arbitrary streams; secrets are read as plain lines
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            terminal: false,
        }
    }

    /// Consume the handler, returning the writer (inspect prompts in tests)
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a response was entered",
            ));
        }
        // Strip the line terminator only; everything else is kept verbatim
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn read_secret(&mut self, prompt: &str) -> io::Result<ClearTextPassword> {
        if self.terminal {
            let secret = rpassword::prompt_password(format!("{}: ", prompt))?;
            return Ok(ClearTextPassword::new(secret));
        }
        self.prompt(prompt)?;
        self.read_line().map(ClearTextPassword::new)
    }
}

impl<R: BufRead, W: Write> CallbackHandler for ConsoleCallbackHandler<R, W> {
    fn handle(&mut self, callbacks: &mut [Callback]) -> Result<(), CallbackError> {
        for callback in callbacks.iter_mut() {
            match callback {
                Callback::Name(cb) => {
                    let prompt = match cb.default_name() {
                        Some(default) => format!("{} [{}]", cb.prompt(), default),
                        None => cb.prompt().to_owned(),
                    };
                    self.prompt(&prompt)?;
                    let line = self.read_line()?;
                    let name = match (line.is_empty(), cb.default_name()) {
                        (true, Some(default)) => default.to_owned(),
                        _ => line,
                    };
                    cb.set_name(name);
                }
                Callback::Password(cb) => {
                    let password = if cb.is_echo_on() {
                        self.prompt(cb.prompt())?;
                        ClearTextPassword::new(self.read_line()?)
                    } else {
                        let prompt = cb.prompt().to_owned();
                        self.read_secret(&prompt)?
                    };
                    cb.set_password(password);
                }
                Callback::TextOutput(cb) => {
                    let prefix = match cb.message_type() {
                        MessageType::Information => "",
                        MessageType::Warning => "Warning: ",
                        MessageType::Error => "Error: ",
                    };
                    writeln!(self.writer, "{}{}", prefix, cb.message())?;
                }
            }
        }
        self.writer.flush()?;
        tracing::trace!(count = callbacks.len(), "Console callbacks handled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::callback::{NameCallback, PasswordCallback, TextOutputCallback};

    fn handler(input: &str) -> ConsoleCallbackHandler<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleCallbackHandler::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_name_and_password() {
        let mut console = handler("snoopy\nwoodst0ck\n");
        let mut callbacks = [
            Callback::Name(NameCallback::new("username")),
            Callback::Password(PasswordCallback::new("password", false)),
        ];
        console.handle(&mut callbacks).unwrap();

        match &callbacks[0] {
            Callback::Name(cb) => assert_eq!(cb.name(), Some("snoopy")),
            other => panic!("unexpected callback {other:?}"),
        }
        match &callbacks[1] {
            Callback::Password(cb) => assert!(cb.password().unwrap().matches("woodst0ck")),
            other => panic!("unexpected callback {other:?}"),
        }

        let written = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(written, "username: password: ");
    }

    #[test]
    fn test_crlf_is_stripped_but_spaces_kept() {
        let mut console = handler(" snoopy \r\n");
        let mut callbacks = [Callback::Name(NameCallback::new("username"))];
        console.handle(&mut callbacks).unwrap();
        match &callbacks[0] {
            Callback::Name(cb) => assert_eq!(cb.name(), Some(" snoopy ")),
            other => panic!("unexpected callback {other:?}"),
        }
    }

    #[test]
    fn test_empty_line_uses_default_name() {
        let mut console = handler("\n");
        let mut callbacks = [Callback::Name(
            NameCallback::new("username").with_default("snoopy"),
        )];
        console.handle(&mut callbacks).unwrap();
        match &callbacks[0] {
            Callback::Name(cb) => assert_eq!(cb.name(), Some("snoopy")),
            other => panic!("unexpected callback {other:?}"),
        }
        let written = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(written, "username [snoopy]: ");
    }

    #[test]
    fn test_eof_is_io_error() {
        let mut console = handler("snoopy\n");
        let mut callbacks = [
            Callback::Name(NameCallback::new("username")),
            Callback::Password(PasswordCallback::new("password", false)),
        ];
        let err = console.handle(&mut callbacks).unwrap_err();
        assert!(matches!(err, CallbackError::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }

    #[test]
    fn test_text_output_is_written() {
        let mut console = handler("");
        let mut callbacks = [Callback::TextOutput(TextOutputCallback::new(
            MessageType::Warning,
            "three attempts left",
        ))];
        console.handle(&mut callbacks).unwrap();
        let written = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(written, "Warning: three attempts left\n");
    }
}
