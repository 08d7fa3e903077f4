use std::{fmt::Display, process};

/// Formats the single diagnostic line (without the newline) for a failed
/// discovery.
pub fn diagnostic(progname: &str, reason: impl Display) -> String {
    format!("{}: Unable to determine RDS constant: {}", progname, reason)
}

/// Reports a failed discovery on stderr and exits with status 1.
///
/// Nothing past this point runs, so callers must release anything they hold
/// before calling it. The library itself never calls this.
pub fn explode(progname: &str, reason: impl Display) -> ! {
    eprintln!("{}", diagnostic(progname, reason));
    process::exit(1)
}
