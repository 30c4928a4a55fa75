//! Polled line dispatcher.
//!
//! [`SerialTerminal`] owns the transport, the line buffer and the command table.
//! Every call to [`SerialTerminal::process_input`] drains what the transport has
//! available, and each newline runs exactly one dispatch cycle:
//!
//! 1. echo a line break (if echo is on);
//! 2. tokenize the line with the configured delimiter;
//! 3. run the first matching command handler, or else the default handler with the
//!    unknown token (nothing runs for an empty line);
//! 4. run the post-command handler, whatever happened in step 3;
//! 5. reset the line buffer.

use alloc::boxed::Box;

use crate::command::{CommandTable, DefaultHandler, PostCommandHandler};
use crate::config::{DEFAULT_COMMAND_NAME_LEN, DEFAULT_RX_BUFFER_SIZE, TerminalConfig};
use crate::input::buffer::{AppendResult, LineBuffer};
use crate::input::tokenizer::{Arguments, Tokenizer};
use crate::transport::Transport;

/// Where the dispatcher stands in the receive/dispatch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Nothing buffered; waiting for transport data.
    Idle,
    /// Part of a line is buffered.
    Accumulating,
    /// Newline seen, dispatch about to start.
    LineReady,
    /// Handlers are running.
    Dispatching,
}

/// Printable ASCII, space included.
#[inline(always)]
const fn is_printable(byte: u8) -> bool {
    matches!(byte, b' '..=b'~')
}

/// Line-oriented command interpreter over a [`Transport`].
///
/// # Type Parameters
/// - `'h`: Lifetime of the data captured by registered handlers.
/// - `T`: The transport.
/// - `RX`: Line buffer capacity in bytes.
/// - `CN`: Number of significant command name characters.
///
/// # Example
/// ```
/// let mut terminal: SerialTerminal<'_, _> = SerialTerminal::new(uart);
/// terminal.add_command("LED", |args| match args.next_argument() {
///     Some("ON") => led.set_high(),
///     Some("OFF") => led.set_low(),
///     _ => {}
/// });
/// terminal.set_default_handler(|cmd| defmt::warn!("unknown command {}", cmd));
/// loop {
///     terminal.process_input();
/// }
/// ```
pub struct SerialTerminal<
    'h,
    T: Transport,
    const RX: usize = DEFAULT_RX_BUFFER_SIZE,
    const CN: usize = DEFAULT_COMMAND_NAME_LEN,
> {
    transport: T,
    config: TerminalConfig,
    buffer: LineBuffer<RX>,
    commands: CommandTable<'h, CN>,
    default_handler: Option<DefaultHandler<'h>>,
    post_command_handler: Option<PostCommandHandler<'h>>,
    state: State,
}

impl<'h, T: Transport, const RX: usize, const CN: usize> SerialTerminal<'h, T, RX, CN> {
    /// Creates a terminal with the default configuration: `'\n'` newline, space
    /// delimiter, echo off.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, TerminalConfig::default())
    }

    /// Creates a terminal with an explicit configuration.
    pub fn with_config(transport: T, config: TerminalConfig) -> Self {
        Self {
            transport,
            config,
            buffer: LineBuffer::new(),
            commands: CommandTable::new(),
            default_handler: None,
            post_command_handler: None,
            state: State::Idle,
        }
    }

    /// Registers a command. Names longer than `CN` are truncated; duplicates are
    /// kept, but only the first registration is ever reached.
    pub fn add_command<F>(&mut self, name: &str, handler: F)
    where
        F: FnMut(&mut Arguments<'_>) + 'h,
    {
        self.commands.register(name, handler);
    }

    /// Sets the handler receiving first tokens that match no command.
    pub fn set_default_handler<F>(&mut self, handler: F)
    where
        F: FnMut(&str) + 'h,
    {
        self.default_handler = Some(Box::new(handler));
    }

    /// Sets the handler run after every completed line, matched or not.
    pub fn set_post_command_handler<F>(&mut self, handler: F)
    where
        F: FnMut() + 'h,
    {
        self.post_command_handler = Some(Box::new(handler));
    }

    /// Turns echo of received printable bytes on or off.
    pub fn set_echo(&mut self, echo: bool) {
        self.config.echo = echo;
    }

    /// Drains every byte currently available and dispatches each completed line.
    ///
    /// Returns immediately once the transport reports no data. Returns the number of
    /// lines dispatched during this call.
    pub fn process_input(&mut self) -> usize {
        let mut lines = 0;

        while self.transport.available() > 0 {
            let byte = self.transport.read_byte();

            if byte == self.config.newline {
                self.state = State::LineReady;
                self.dispatch_line();
                lines += 1;
            } else if is_printable(byte) {
                self.state = State::Accumulating;
                if self.buffer.append(byte) == AppendResult::Dropped {
                    trace!("line buffer full, dropped {=u8:#x}", byte);
                }
                if self.config.echo {
                    self.transport.write_byte(byte);
                }
            }
        }

        lines
    }

    fn dispatch_line(&mut self) {
        if self.config.echo {
            self.transport.write_line();
        }

        self.state = State::Dispatching;
        let delimiter = char::from(self.config.delimiter);
        let (cursor, first) = Tokenizer::begin(self.buffer.as_str(), &[delimiter]);

        if let Some(command) = first {
            match self.commands.lookup_mut(command) {
                Some(entry) => {
                    debug!("dispatching {}", entry.name());
                    entry.invoke(&mut Arguments::new(cursor, delimiter));
                }
                None => {
                    if let Some(handler) = self.default_handler.as_mut() {
                        debug!("no command matches {}", command);
                        handler(command);
                    }
                }
            }
        }

        if let Some(handler) = self.post_command_handler.as_mut() {
            handler();
        }

        self.buffer.reset();
        self.state = State::Idle;
    }

    /// Discards the partially received line.
    pub fn clear_buffer(&mut self) {
        self.buffer.reset();
        self.state = State::Idle;
    }

    /// The bytes received since the last newline.
    pub fn pending_line(&self) -> &[u8] {
        self.buffer.contents()
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Registered command names, in insertion order.
    pub fn command_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.names()
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    pub fn config(&self) -> TerminalConfig {
        self.config
    }

    pub fn newline(&self) -> u8 {
        self.config.newline
    }

    pub fn delimiter(&self) -> u8 {
        self.config.delimiter
    }

    pub fn echo(&self) -> bool {
        self.config.echo
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Gives the transport back, dropping the terminal and its handlers.
    pub fn into_transport(self) -> T {
        self.transport
    }
}

// ==================== TESTS =======================
