//! Byte transport seen by the terminal.
//!
//! A UART, a USB CDC endpoint or a test double implements [`Transport`]; the
//! terminal only polls it and never waits for data.

/// Non-blocking byte source and sink.
///
/// Implementations must not block in any method. `read_byte` is only called after
/// `available` reported at least one byte.
pub trait Transport {
    /// Number of bytes that can be read right now without blocking.
    fn available(&mut self) -> usize;

    /// Consumes one byte.
    fn read_byte(&mut self) -> u8;

    /// Writes one byte. Used for echo.
    fn write_byte(&mut self, byte: u8);

    /// Writes a line break (`"\r\n"`). Used for echo.
    fn write_line(&mut self) {
        self.write_byte(b'\r');
        self.write_byte(b'\n');
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn available(&mut self) -> usize {
        (**self).available()
    }

    fn read_byte(&mut self) -> u8 {
        (**self).read_byte()
    }

    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte)
    }

    fn write_line(&mut self) {
        (**self).write_line()
    }
}

// ==================== TESTS =======================
