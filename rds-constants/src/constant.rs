use crate::StaticName;
use rds_rs_macros::Display;
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use rds_rs_macros::SerializeFromDisplay;

/// Default procfs mount point.
pub const PROCFS_PATH: &str = "/proc";

/// Directory below the procfs root holding the RDS sysctl nodes.
pub const RDS_SYSCTL_DIR: &str = "sys/net/rds";

/// The kernel-assigned RDS constants exposed through sysctl
#[non_exhaustive]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerializeFromDisplay))]
pub enum Constant {
    /// Address family, passed as the domain to `socket(2)`
    PfRds,
    /// Socket option level, passed to `setsockopt(2)`/`getsockopt(2)`
    SolRds,
}

impl Constant {
    /// Both constants in discovery order
    pub const ALL: [Constant; 2] = [Constant::PfRds, Constant::SolRds];

    /// Location of the sysctl node under the given procfs root
    pub fn path(&self, procfs_root: &Path) -> PathBuf {
        procfs_root.join(RDS_SYSCTL_DIR).join(self.name())
    }

    /// The value mainline Linux eventually assigned (`AF_RDS` and `SOL_RDS`
    /// in `linux/socket.h`).
    ///
    /// **Note**: informational only. Older kernels overloaded an existing
    /// family, so the running kernel must always be asked.
    pub fn official(&self) -> i32 {
        match *self {
            Constant::PfRds => 21,
            Constant::SolRds => 276,
        }
    }
}

impl StaticName for Constant {
    /// Name of the sysctl node, e.g. `/proc/sys/net/rds/pf_rds`
    fn name(&self) -> &'static str {
        match *self {
            Constant::PfRds => "pf_rds",
            Constant::SolRds => "sol_rds",
        }
    }
}
