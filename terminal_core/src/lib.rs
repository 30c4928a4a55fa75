//! # terminal_core
//!
//! Line-oriented command interpreter for byte streams arriving over a serial-style
//! transport.
//!
//! Printable bytes are collected into a fixed-size line buffer. When the configured
//! newline arrives, the line is split on the configured delimiter, the first token
//! is looked up in an append-only command table and the matching handler runs. The
//! handler pulls its own arguments from the [`Arguments`] cursor it is given.
//! Unknown commands go to an optional default handler, and an optional post-command
//! handler runs after every line.
//!
//! Nothing in here blocks: [`SerialTerminal::process_input`] is meant to be polled
//! from the application's main loop.
//!
//! ## no_std
//! - Uses `core` and `alloc` only. The command table and the boxed handlers are the
//!   only heap allocations; the line buffer and command names are `heapless`.
//! - The `defmt` feature logs dispatch decisions and derives `defmt::Format` for the
//!   public enums.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

mod fmt;

pub mod command;
pub mod config;
pub mod dispatcher;
pub mod input;
pub mod transport;

pub use command::{CommandEntry, CommandHandler, CommandTable, DefaultHandler, PostCommandHandler};
pub use config::{DEFAULT_COMMAND_NAME_LEN, DEFAULT_RX_BUFFER_SIZE, TerminalConfig};
pub use dispatcher::{SerialTerminal, State};
pub use input::buffer::{AppendResult, LineBuffer};
pub use input::tokenizer::{Arguments, Tokenizer};
pub use transport::Transport;
