//! Built-in command handlers

use core::fmt::Write;

use crate::console::{ConsoleError, VERSION};

/// `echo`: print the arguments back, space separated.
pub fn cmd_echo(args: &[&str], out: &mut dyn Write) -> Result<(), ConsoleError> {
    for (i, arg) in args.iter().skip(1).enumerate() {
        if i > 0 {
            let _ = write!(out, " ");
        }
        let _ = write!(out, "{}", arg);
    }
    let _ = writeln!(out);
    Ok(())
}

/// `version`: print the build version string.
pub fn cmd_version(_args: &[&str], out: &mut dyn Write) -> Result<(), ConsoleError> {
    let _ = writeln!(out, "{}", VERSION);
    Ok(())
}
