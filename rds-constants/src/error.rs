use std::path::PathBuf;
use thiserror::Error as ThisError;

#[cfg(feature = "serde")]
use rds_rs_macros::SerializeFromDisplay;

/// Failure to produce an RDS constant.
///
/// The display text of the first three variants is the reason string printed
/// by [`explode`](crate::explode).
#[derive(ThisError, Debug)]
#[cfg_attr(feature = "serde", derive(SerializeFromDisplay))]
pub enum DiscoverError {
    #[error("Can't open address constant")]
    Open(#[source] std::io::Error),
    #[error("Error reading address constant")]
    Read(#[source] std::io::Error),
    #[error("Invalid address constant")]
    Invalid(#[from] InvalidConstant),
    #[error("procfs at {} was not detected", .0.display())]
    ProcfsNonExistent(PathBuf),
}

/// Why the contents of a constant file were rejected
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerializeFromDisplay))]
pub enum InvalidConstant {
    #[error("no numeric text")]
    NoDigits,
    #[error("value exceeds INT_MAX")]
    OutOfRange,
    #[error("unexpected trailing byte {0:#04x}")]
    Trailing(u8),
    #[error("numeric text runs past the read buffer")]
    Truncated,
}
