//! Host demo terminal
//!
//! Puts the terminal in raw mode and feeds stdin to the console one byte
//! at a time - the same poll loop an MCU port runs against its UART.
//!
//! Run with: `cargo run --features std`

use core::fmt::Write;
use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};

use mcu_console::cli::options::{parse_args, OptionSpec, OPT_VALUES_MAX};
use mcu_console::console::{Console, ConsoleError};

static QUIT: AtomicBool = AtomicBool::new(false);

/// Adapts `std::io::Stdout` to the console's `core::fmt::Write`, expanding
/// newlines for raw mode.
struct StdoutWriter;

impl core::fmt::Write for StdoutWriter {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        use std::io::Write as _;
        let mut stdout = std::io::stdout();
        let expanded = s.replace('\n', "\r\n");
        stdout
            .write_all(expanded.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|_| core::fmt::Error)
    }
}

/// `parse`: exercise the option schema against the command's own argv.
fn cmd_parse(args: &[&str], out: &mut dyn core::fmt::Write) -> Result<(), ConsoleError> {
    let mut ints: heapless::Vec<i64, OPT_VALUES_MAX> = heapless::Vec::new();
    let mut strings: heapless::Vec<&str, OPT_VALUES_MAX> = heapless::Vec::new();
    let mut flag = false;

    let parsed = {
        let mut schema = [
            OptionSpec::comment("Basic Options"),
            OptionSpec::help('h', "help", "Show help hints"),
            OptionSpec::int('i', "int", "Get an integer value", &mut ints).with_arity(1, 2),
            OptionSpec::string('s', "string", "Get a string value", &mut strings),
            OptionSpec::flag('b', "bool", "Get a boolean value", &mut flag),
        ];
        parse_args(&args[1..], &mut schema, out)
    };

    match parsed {
        Ok(unused) => {
            let _ = write!(out, "int:");
            for v in &ints {
                let _ = write!(out, " {}", v);
            }
            let _ = write!(out, "  string:");
            for s in &strings {
                let _ = write!(out, " {}", s);
            }
            let _ = write!(out, "  bool: {}", flag);
            let _ = write!(out, "  unused:");
            for u in &unused {
                let _ = write!(out, " {}", u);
            }
            let _ = writeln!(out);
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(out, "{}", e);
            Err(ConsoleError::InvalidValue)
        }
    }
}

/// `quit`: leave the demo loop.
fn cmd_quit(_args: &[&str], _out: &mut dyn core::fmt::Write) -> Result<(), ConsoleError> {
    QUIT.store(true, Ordering::Relaxed);
    Ok(())
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let mut console = Console::new();
    let registry = console.registry_mut();
    registry
        .register("parse", "Run an argument parse example", cmd_parse)
        .expect("slot available");
    registry
        .register("quit", "Quit the process", cmd_quit)
        .expect("slot available");

    crossterm::terminal::enable_raw_mode()?;

    let mut out = StdoutWriter;
    console.print_banner(&mut out);

    let mut stdin = std::io::stdin();
    let mut byte = [0u8; 1];

    while !QUIT.load(Ordering::Relaxed) {
        match stdin.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                let _ = console.feed(byte[0], &mut out);
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
    }

    crossterm::terminal::disable_raw_mode()?;
    println!();
    Ok(())
}
