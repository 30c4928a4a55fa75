#![no_std]

//! Application-wide terminal constants.

/// Line buffer capacity: longest command line, arguments included.
pub const RX_BUFFER_SIZE: usize = 32;

/// Significant characters of a command name.
pub const COMMAND_NAME_LEN: usize = 8;

/// Byte ending a command line.
pub const NEWLINE: u8 = b'\n';

/// Byte separating command and arguments.
pub const DELIMITER: u8 = b' ';

/// Echo typed characters back to the terminal.
pub const ECHO: bool = true;

/// Prompt printed after each processed line.
pub const PROMPT: &str = "> ";

/// Poll period of the host main loop, in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 10;
