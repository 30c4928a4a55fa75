//! Append-only command table.
//!
//! Names are bounded to `CN` characters. Registration truncates longer names, and
//! lookup compares only the first `CN` characters of the received token, so
//! `"toggle_led"` matches a table entry registered as `"toggle_l"` when `CN == 8`.
//! Duplicates are allowed; the first entry in insertion order wins.

use alloc::boxed::Box;
use alloc::vec::Vec;
use heapless::String;

use crate::input::tokenizer::Arguments;

/// Handler bound to a command name. Retrieves its own arguments from the cursor.
pub type CommandHandler<'h> = Box<dyn FnMut(&mut Arguments<'_>) + 'h>;

/// Handler for lines whose first token matches no command. Receives that token.
pub type DefaultHandler<'h> = Box<dyn FnMut(&str) + 'h>;

/// Handler run after every completed line.
pub type PostCommandHandler<'h> = Box<dyn FnMut() + 'h>;

/// Returns the longest prefix of `s` that fits in `cap` bytes without splitting a
/// character.
pub fn bounded(s: &str, cap: usize) -> &str {
    if s.len() <= cap {
        return s;
    }
    let mut end = cap;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// One registered command.
pub struct CommandEntry<'h, const CN: usize> {
    name: String<CN>,
    handler: CommandHandler<'h>,
}

impl<'h, const CN: usize> CommandEntry<'h, CN> {
    /// Creates an entry, truncating `name` to `CN` bytes.
    pub fn new(name: &str, handler: CommandHandler<'h>) -> Self {
        let mut bounded_name = String::new();
        let _ = bounded_name.push_str(bounded(name, CN));
        Self {
            name: bounded_name,
            handler,
        }
    }

    /// The stored, possibly truncated, name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bounded comparison: only the first `CN` characters of `token` count.
    pub fn matches(&self, token: &str) -> bool {
        bounded(token, CN) == self.name.as_str()
    }

    /// Calls the handler with the argument cursor.
    pub fn invoke(&mut self, args: &mut Arguments<'_>) {
        (self.handler)(args)
    }
}

/// Ordered, append-only list of commands, searched linearly.
pub struct CommandTable<'h, const CN: usize> {
    entries: Vec<CommandEntry<'h, CN>>,
}

impl<'h, const CN: usize> CommandTable<'h, CN> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a command. Never fails and never checks for duplicates.
    pub fn register<F>(&mut self, name: &str, handler: F)
    where
        F: FnMut(&mut Arguments<'_>) + 'h,
    {
        self.entries.push(CommandEntry::new(name, Box::new(handler)));
    }

    /// First entry matching `token`, in insertion order.
    pub fn lookup(&self, token: &str) -> Option<&CommandEntry<'h, CN>> {
        self.entries.iter().find(|entry| entry.matches(token))
    }

    /// Mutable variant of [`lookup`](Self::lookup), used to invoke the handler.
    pub fn lookup_mut(&mut self, token: &str) -> Option<&mut CommandEntry<'h, CN>> {
        self.entries.iter_mut().find(|entry| entry.matches(token))
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(CommandEntry::name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const CN: usize> Default for CommandTable<'_, CN> {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== TESTS =======================
