use crate::{parse::parse_constant_prefix, Constant, DiscoverError, InvalidConstant, PROCFS_PATH};
use log::{debug, trace};
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

/// Capacity of the scratch buffer a constant file is read into. The payload
/// is a handful of digits and a newline.
pub const CONSTANT_BUF_LEN: usize = 64;

/// Reads the constant stored at `path`.
///
/// The file is read until [`CONSTANT_BUF_LEN`] bytes are buffered or a read
/// returns no data. An interrupted read counts as a read error; use
/// [`discover_with`] to retry those instead.
pub fn discover(path: &Path) -> Result<i32, DiscoverError> {
    discover_with(path, false)
}

/// [`discover`], retrying reads that fail with `EINTR` when
/// `retry_interrupted` is set
pub fn discover_with(path: &Path, retry_interrupted: bool) -> Result<i32, DiscoverError> {
    debug!("reading RDS constant from {}", path.display());

    let mut buf = [0u8; CONSTANT_BUF_LEN];
    let len = {
        let mut file = File::open(path).map_err(|err| {
            debug!("can't open {}: {}", path.display(), err);
            DiscoverError::Open(err)
        })?;
        read_bounded(&mut file, &mut buf, retry_interrupted)
    }
    .map_err(|err| {
        debug!("error reading {}: {}", path.display(), err);
        DiscoverError::Read(err)
    })?;

    let value = parse_buffered(&buf[..len], len == buf.len()).map_err(|err| {
        debug!("rejected contents of {}: {}", path.display(), err);
        DiscoverError::from(err)
    })?;

    debug!("{} = {}", path.display(), value);
    Ok(value)
}

// With a full buffer, digits reaching its last byte may continue in the file
fn parse_buffered(buf: &[u8], full: bool) -> Result<i32, InvalidConstant> {
    let (value, end) = parse_constant_prefix(buf)?;
    if full && end == buf.len() {
        return Err(InvalidConstant::Truncated);
    }
    Ok(value)
}

/// Discovers the RDS address family from `/proc/sys/net/rds/pf_rds`
pub fn discover_pf_rds() -> Result<i32, DiscoverError> {
    discover(&Constant::PfRds.path(Path::new(PROCFS_PATH)))
}

/// Discovers the RDS socket option level from `/proc/sys/net/rds/sol_rds`
pub fn discover_sol_rds() -> Result<i32, DiscoverError> {
    discover(&Constant::SolRds.path(Path::new(PROCFS_PATH)))
}

// Fills `buf` until it is full or the reader reports end of data. Any error
// ends the loop, even with bytes already buffered.
pub(crate) fn read_bounded<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    retry_interrupted: bool,
) -> io::Result<usize> {
    let mut total = 0;

    while total < buf.len() {
        match reader.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => {
                trace!("read {} bytes", n);
                total += n;
            }
            Err(err) if retry_interrupted && err.kind() == io::ErrorKind::Interrupted => {
                trace!("read interrupted, retrying");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(total)
}
