use super::{lookup_context, LinkWalk};
use crate::error::Result;
use crate::task::ProcessControlBlock;
use log::debug;
use sys_stat::FileStatus;

/// Status of the entry `path` names, following symbolic links.
pub fn stat(process: &ProcessControlBlock, path: &str) -> Result<FileStatus> {
    let (root, abs) = lookup_context(process, path)?;
    debug!("stat: {:?} resolved to {}", path, abs);
    let mut walk = LinkWalk::new();
    root.stat(&abs, &mut walk)
}

/// Status of the file open on `fd`.
pub fn fstat(process: &ProcessControlBlock, fd: usize) -> Result<FileStatus> {
    // the guard is gone before the file is asked
    let file = process.inner_exclusive_access().get_file(fd)?;
    file.stat()
}
