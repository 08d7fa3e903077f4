//! `rds-constants` discovers, at runtime, the constants the running kernel
//! assigned to RDS (Reliable Datagram Sockets): the address family `PF_RDS`
//! and the socket option level `SOL_RDS`.
//!
//! These were not fixed when RDS was merged, and early kernels overloaded an
//! existing protocol family, so the values are read from procfs rather than
//! hard-coded:
//!
//! - `/proc/sys/net/rds/pf_rds`
//! - `/proc/sys/net/rds/sol_rds`
//!
//! Every failure is returned as a [`DiscoverError`]. Programs that can't run
//! without RDS report it with [`explode`], which prints
//! `<progname>: Unable to determine RDS constant: <reason>` and exits.
//!
//! ```no_run
//! let pf_rds = rds_constants::discover_pf_rds()
//!     .unwrap_or_else(|err| rds_constants::explode("rds-ping", err));
//! ```
mod constant;
mod discover;
mod error;
mod fatal;
mod parse;

use nix::sys::statfs::{statfs, PROC_SUPER_MAGIC};
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::Serialize;

pub use constant::{Constant, PROCFS_PATH, RDS_SYSCTL_DIR};
pub use discover::{discover, discover_pf_rds, discover_sol_rds, discover_with, CONSTANT_BUF_LEN};
pub use error::{DiscoverError, InvalidConstant};
pub use fatal::{diagnostic, explode};
pub use parse::parse_constant;

// WARNING: Highly coupled to the proc macro rds_rs_macros::Display
trait StaticName {
    fn name(&self) -> &'static str;
}

/// Options for [`detect`]
#[derive(Debug, Clone)]
pub struct DetectOpts {
    /// Where procfs is mounted. Defaults to [`PROCFS_PATH`]
    pub procfs_root: PathBuf,
    /// Check that `procfs_root` really is a procfs mount before reading
    pub verify_procfs: bool,
    /// Retry reads that fail with `EINTR` rather than failing the discovery
    pub retry_interrupted: bool,
}

impl Default for DetectOpts {
    fn default() -> Self {
        Self {
            procfs_root: PathBuf::from(PROCFS_PATH),
            verify_procfs: true,
            retry_interrupted: false,
        }
    }
}

/// Both RDS constants of the running kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RdsConstants {
    pub pf_rds: i32,
    pub sol_rds: i32,
}

impl RdsConstants {
    /// Value discovered for the given constant
    pub fn get(&self, constant: Constant) -> i32 {
        match constant {
            Constant::PfRds => self.pf_rds,
            Constant::SolRds => self.sol_rds,
        }
    }
}

fn verify_procfs_exists(root: &Path) -> Result<(), DiscoverError> {
    match statfs(root) {
        Ok(stat) if stat.filesystem_type() == PROC_SUPER_MAGIC => Ok(()),
        _ => Err(DiscoverError::ProcfsNonExistent(root.to_path_buf())),
    }
}

/// Discovers both constants, `pf_rds` first.
///
/// Stops at the first failure; there is no partial result.
pub fn detect(opts: DetectOpts) -> Result<RdsConstants, DiscoverError> {
    if opts.verify_procfs {
        verify_procfs_exists(&opts.procfs_root)?;
    }

    let discover_at = |constant: Constant| {
        discover_with(&constant.path(&opts.procfs_root), opts.retry_interrupted)
    };

    Ok(RdsConstants {
        pf_rds: discover_at(Constant::PfRds)?,
        sol_rds: discover_at(Constant::SolRds)?,
    })
}
