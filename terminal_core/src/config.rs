/// Default capacity of the line buffer, in bytes (one command plus its arguments).
pub const DEFAULT_RX_BUFFER_SIZE: usize = 32;

/// Default number of significant command name characters.
pub const DEFAULT_COMMAND_NAME_LEN: usize = 8;

/// Runtime options of a [`SerialTerminal`](crate::SerialTerminal).
///
/// Capacities are fixed at compile time through const generics; everything that may
/// differ between two terminals of the same type lives here.
///
/// # Example
/// ```
/// use terminal_core::TerminalConfig;
///
/// let config = TerminalConfig::default()
///     .with_newline(b'\r')
///     .with_delimiter(b',')
///     .with_echo(true);
/// assert_eq!(config.delimiter, b',');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TerminalConfig {
    /// Byte terminating a line and triggering dispatch.
    pub newline: u8,
    /// Byte separating the command from its arguments and the arguments from each other.
    pub delimiter: u8,
    /// Mirror received printable bytes back to the transport.
    pub echo: bool,
}

impl TerminalConfig {
    pub const fn new(newline: u8, delimiter: u8) -> Self {
        Self {
            newline,
            delimiter,
            echo: false,
        }
    }

    pub const fn with_newline(mut self, newline: u8) -> Self {
        self.newline = newline;
        self
    }

    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub const fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }
}

impl Default for TerminalConfig {
    /// `'\n'` terminated lines, space separated fields, echo off.
    fn default() -> Self {
        Self::new(b'\n', b' ')
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_default_matches_serial_conventions() {
        let config = TerminalConfig::default();
        assert_eq!(config.newline, b'\n');
        assert_eq!(config.delimiter, b' ');
        assert!(!config.echo);
    }

    #[test]
    fn test_builder_overrides_each_field() {
        let config = TerminalConfig::default()
            .with_newline(b'\r')
            .with_delimiter(b';')
            .with_echo(true);
        assert_eq!(config, TerminalConfig { newline: b'\r', delimiter: b';', echo: true });
    }
}
