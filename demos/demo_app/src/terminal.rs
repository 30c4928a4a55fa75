//! Cross-platform terminal raw mode handling.
//!
//! The demo reads stdin byte by byte and lets the serial terminal do the echo, so
//! canonical input processing and local echo are switched off for its lifetime:
//! - on **Unix** through `termios`;
//! - on **Windows** through the console mode (`winapi`).

use std::io;

/// Handle to the terminal's raw mode state.
/// When dropped, restores the original terminal mode.
pub struct RawMode {
    #[cfg(unix)]
    /// Original terminal settings (Unix).
    original: termios::Termios,
    #[cfg(unix)]
    fd: i32,
    #[cfg(windows)]
    /// Original console mode (Windows).
    original_mode: u32,
}

impl RawMode {
    /// Enables raw mode on `fd` (usually 0 for stdin).
    #[cfg(unix)]
    pub fn new(fd: i32) -> io::Result<Self> {
        use termios::*;
        let original = Termios::from_fd(fd)?;
        let mut raw = original;
        raw.c_lflag &= !(ICANON | ECHO);
        tcsetattr(fd, TCSANOW, &raw)?;
        Ok(RawMode { original, fd })
    }

    /// Enables raw mode on the console input. The argument is ignored.
    #[cfg(windows)]
    pub fn new(_: i32) -> io::Result<Self> {
        use winapi::um::{
            consoleapi::{GetConsoleMode, SetConsoleMode},
            handleapi::INVALID_HANDLE_VALUE,
            processenv::GetStdHandle,
            winbase::STD_INPUT_HANDLE,
            wincon::{ENABLE_ECHO_INPUT, ENABLE_LINE_INPUT},
        };
        unsafe {
            let handle = GetStdHandle(STD_INPUT_HANDLE);
            if handle == INVALID_HANDLE_VALUE {
                return Err(io::Error::last_os_error());
            }
            let mut mode = 0;
            if GetConsoleMode(handle, &mut mode) == 0 {
                return Err(io::Error::last_os_error());
            }
            let original_mode = mode;
            mode &= !(ENABLE_LINE_INPUT | ENABLE_ECHO_INPUT);
            if SetConsoleMode(handle, mode) == 0 {
                return Err(io::Error::last_os_error());
            }
            Ok(RawMode { original_mode })
        }
    }
}

impl Drop for RawMode {
    #[cfg(unix)]
    fn drop(&mut self) {
        use termios::*;
        let _ = tcsetattr(self.fd, TCSANOW, &self.original);
    }

    #[cfg(windows)]
    fn drop(&mut self) {
        use winapi::um::consoleapi::SetConsoleMode;
        use winapi::um::handleapi::INVALID_HANDLE_VALUE;
        use winapi::um::processenv::GetStdHandle;
        use winapi::um::winbase::STD_INPUT_HANDLE;
        unsafe {
            let handle = GetStdHandle(STD_INPUT_HANDLE);
            if handle != INVALID_HANDLE_VALUE {
                SetConsoleMode(handle, self.original_mode);
            }
        }
    }
}
