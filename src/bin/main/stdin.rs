use std::{
    io::{self, BufRead},
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use log::{debug, warn};
use pacer_core::input::{InputEvent, InputProvider};
use thiserror::Error;

use crate::commands::{Command, HELP, parse_command};

/// The reader thread hit an I/O error; end of input is not an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("stdin read failed: {0}")]
pub struct StdinReadError(pub io::ErrorKind);

type Line = Result<String, io::ErrorKind>;

/// Line-command input fed by a blocking reader thread.
///
/// The executor only ever polls the channel, so a slow terminal never stalls
/// the word timer.
pub struct StdinInput {
    lines: Receiver<Line>,
    closed: bool,
}

impl StdinInput {
    pub fn spawn() -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("stdin".into())
            .spawn(move || {
                for line in io::stdin().lock().lines() {
                    let failed = line.is_err();
                    if let Err(err) = &line {
                        warn!("stdin read failed: {}", err);
                    }
                    if tx.send(line.map_err(|err| err.kind())).is_err() || failed {
                        break;
                    }
                }
                debug!("stdin reader finished");
            })?;
        Ok(Self::from_receiver(rx))
    }

    pub fn from_receiver(lines: Receiver<Line>) -> Self {
        Self {
            lines,
            closed: false,
        }
    }

    /// Set on `quit`, end of input, or a read failure.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl InputProvider for StdinInput {
    type Error = StdinReadError;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        if self.closed {
            return Ok(None);
        }
        loop {
            let line = match self.lines.try_recv() {
                Ok(Ok(line)) => line,
                Ok(Err(kind)) => {
                    self.closed = true;
                    return Err(StdinReadError(kind));
                }
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Disconnected) => {
                    debug!("stdin reached end of input");
                    self.closed = true;
                    return Ok(None);
                }
            };
            match parse_command(&line) {
                Ok(Command::Event(event)) => return Ok(Some(event)),
                Ok(Command::Help) => println!("{HELP}"),
                Ok(Command::Quit) => {
                    self.closed = true;
                    return Ok(None);
                }
                Err(err) => warn!("{}", err),
            }
        }
    }
}
