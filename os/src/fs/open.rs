use super::{lookup_context, LinkWalk, OpenFlags};
use crate::error::{Errno, Result};
use crate::task::ProcessControlBlock;
use log::debug;

/// Opens `path` and installs it in the lowest free descriptor.
///
/// A full descriptor table fails before the filesystem is asked, so
/// `CREATE` never leaves behind a file nobody holds open.
pub fn open(process: &ProcessControlBlock, path: &str, flags: OpenFlags) -> Result<usize> {
    process.inner_exclusive_access().check_fd_free()?;
    let (root, abs) = lookup_context(process, path)?;
    let mut walk = LinkWalk::new();
    let file = root.open(&abs, flags, &mut walk)?;
    let mut inner = process.inner_exclusive_access();
    let fd = inner.alloc_fd()?;
    inner.fd_table[fd] = Some(file);
    debug!("open: {} as fd {}", abs, fd);
    Ok(fd)
}

pub fn close(process: &ProcessControlBlock, fd: usize) -> Result<()> {
    let mut inner = process.inner_exclusive_access();
    match inner.fd_table.get_mut(fd).and_then(Option::take) {
        Some(_) => Ok(()),
        None => return_errno_with_message!(Errno::EBADF, "descriptor is not open"),
    }
}

/// Makes `path` the working directory relative lookups start from.
pub fn chdir(process: &ProcessControlBlock, path: &str) -> Result<()> {
    let (root, abs) = lookup_context(process, path)?;
    let mut walk = LinkWalk::new();
    if !root.stat(&abs, &mut walk)?.mode.is_dir() {
        return_errno_with_message!(Errno::ENOTDIR, "not a directory");
    }
    process.inner_exclusive_access().cwd = abs;
    Ok(())
}
