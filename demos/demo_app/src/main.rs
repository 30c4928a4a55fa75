mod terminal;
mod transport;

use std::cell::Cell;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use terminal_config::*;
use terminal_core::{SerialTerminal, TerminalConfig};
use terminal_macros::define_commands;

use usercode::commands as uc;

use crate::terminal::RawMode;
use crate::transport::ChannelPort;

define_commands! {
    mod commands;
    "LED : crate::uc::led,
     echo: crate::uc::echo,
     add : crate::uc::add,
     args: crate::uc::args"
}

fn prompt() {
    print!("{}", PROMPT);
    let _ = io::stdout().flush();
}

fn main() {
    let _raw = match RawMode::new(0) {
        Ok(raw) => Some(raw),
        Err(e) => {
            println!("Raw mode unavailable ({}), input is line buffered", e);
            None
        }
    };

    let quit = Cell::new(false);
    let config = TerminalConfig::new(NEWLINE, DELIMITER).with_echo(ECHO);
    let mut terminal: SerialTerminal<'_, _, RX_BUFFER_SIZE, COMMAND_NAME_LEN> =
        SerialTerminal::with_config(ChannelPort::stdio(), config);

    commands::register(&mut terminal);
    terminal.add_command("help", |_| {
        println!("Commands:");
        for name in commands::NAMES.iter().chain(&["help", "exit"]) {
            println!("  {}", name);
        }
    });
    terminal.add_command("exit", |_| quit.set(true));
    terminal.set_default_handler(uc::unknown);
    terminal.set_post_command_handler(prompt);

    println!("Serial terminal started (try 'help')");
    prompt();

    while !quit.get() && !terminal.transport().is_closed() {
        if terminal.process_input() == 0 {
            thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
        }
    }

    println!("Terminal exited...");
}
