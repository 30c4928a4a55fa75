//! Host-side transport: stdin feeds a channel from a reader thread so the terminal
//! can poll it without blocking, echo goes to stdout.

use std::collections::VecDeque;
use std::io::{self, Read, Write};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use terminal_core::Transport;

pub struct ChannelPort<W: Write> {
    rx: Receiver<u8>,
    pending: VecDeque<u8>,
    out: W,
    closed: bool,
}

impl ChannelPort<io::Stdout> {
    /// Reads from stdin, writes to stdout.
    pub fn stdio() -> Self {
        Self::spawn(io::stdin(), io::stdout())
    }
}

impl<W: Write> ChannelPort<W> {
    /// Starts a thread draining `input` into the port.
    pub fn spawn<R>(input: R, out: W) -> Self
    where
        R: Read + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for byte in input.bytes() {
                match byte {
                    Ok(b) => {
                        if tx.send(b).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        });

        Self {
            rx,
            pending: VecDeque::new(),
            out,
            closed: false,
        }
    }

    /// `true` once the input reached end of file and every byte was consumed.
    pub fn is_closed(&self) -> bool {
        self.closed && self.pending.is_empty()
    }

    fn pump(&mut self) {
        loop {
            match self.rx.try_recv() {
                Ok(b) => self.pending.push_back(b),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.closed = true;
                    break;
                }
            }
        }
    }
}

impl<W: Write> Transport for ChannelPort<W> {
    fn available(&mut self) -> usize {
        self.pump();
        self.pending.len()
    }

    fn read_byte(&mut self) -> u8 {
        self.pending.pop_front().unwrap_or(0)
    }

    fn write_byte(&mut self, byte: u8) {
        let _ = self.out.write_all(&[byte]);
        let _ = self.out.flush();
    }
}

// ==================== TESTS =======================
