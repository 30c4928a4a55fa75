use terminal_core::Arguments;

pub fn led(args: &mut Arguments<'_>) {
    match args.next_argument() {
        Some("ON") | Some("on") => println!("LED on"),
        Some("OFF") | Some("off") => println!("LED off"),
        Some(other) => println!("LED: unknown state '{}'", other),
        None => println!("usage: LED ON|OFF"),
    }
}

pub fn echo(args: &mut Arguments<'_>) {
    println!("{}", args.remaining_arguments().unwrap_or(""));
}

pub fn add(args: &mut Arguments<'_>) {
    let mut sum: i64 = 0;
    for arg in args {
        match arg.parse::<i64>() {
            Ok(v) => sum = sum.saturating_add(v),
            Err(_) => {
                println!("add: '{}' is not a number", arg);
                return;
            }
        }
    }
    println!("{}", sum);
}

pub fn args(args: &mut Arguments<'_>) {
    for (i, arg) in args.enumerate() {
        println!("arg{}: {}", i, arg);
    }
}

pub fn unknown(command: &str) {
    println!("Unknown command: '{}'", command);
}

// ==================== TESTS =======================
