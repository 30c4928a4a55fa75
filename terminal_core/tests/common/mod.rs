use std::collections::VecDeque;

use terminal_core::Transport;

/// In-memory serial port: bytes queued with `feed` are read by the terminal,
/// echoed bytes land in `output`.
#[derive(Default)]
pub struct MemoryPort {
    input: VecDeque<u8>,
    pub output: Vec<u8>,
}

impl MemoryPort {
    pub fn feed(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }
}

impl Transport for MemoryPort {
    fn available(&mut self) -> usize {
        self.input.len()
    }

    fn read_byte(&mut self) -> u8 {
        self.input.pop_front().unwrap_or(0)
    }

    fn write_byte(&mut self, byte: u8) {
        self.output.push(byte);
    }
}
