//! File status queries and creation of directories and FIFOs.
//!
//! The filesystem that actually holds the entries sits behind the
//! [`FileSystem`] trait. Everything here is the layer in front of it:
//! argument checks, path normalization against the working directory,
//! umask application and descriptor lookup.

mod link;
mod mknod;
mod open;
pub mod path;
mod stat;
#[cfg(test)]
pub(crate) mod testfs;

use crate::error::Result;
use crate::task::ProcessControlBlock;
use alloc::string::String;
use alloc::sync::Arc;
use bitflags::bitflags;
use log::warn;
use sys_stat::{FileStatus, StatMode};

pub use link::LinkWalk;
pub use mknod::{mkdir, mkfifo, umask};
pub use open::{chdir, close, open};
pub use stat::{fstat, stat};

/// An open file as seen through a descriptor.
pub trait File: Send + Sync {
    fn stat(&self) -> Result<FileStatus>;
}

/// A mounted filesystem.
///
/// Paths handed to these methods are absolute and normalized: they start
/// with `/`, contain no `.`, `..` or empty components and have no
/// trailing `/` except for the root itself.
pub trait FileSystem: Send + Sync {
    /// Call `walk.follow()` before following each symbolic link.
    fn stat(&self, path: &str, walk: &mut LinkWalk) -> Result<FileStatus>;

    fn open(&self, path: &str, flags: OpenFlags, walk: &mut LinkWalk) -> Result<Arc<dyn File>>;

    /// `mode` is already reduced by the caller's umask.
    fn mkdir(&self, path: &str, mode: StatMode) -> Result<()>;

    /// `mode` is already reduced by the caller's umask.
    fn mkfifo(&self, path: &str, mode: StatMode) -> Result<()>;
}

bitflags! {
    pub struct OpenFlags: u32 {
        const RDONLY = 0;
        const WRONLY = 1 << 0;
        const RDWR = 1 << 1;
        const CREATE = 1 << 9;
        const TRUNC = 1 << 10;
    }
}

/// Normalizes `path` against the working directory and hands back the
/// root filesystem, leaving the process unlocked for the lookup itself.
fn lookup_context(process: &ProcessControlBlock, path: &str) -> Result<(Arc<dyn FileSystem>, String)> {
    let inner = process.inner_exclusive_access();
    let abs = path::normalize(&inner.cwd, path).map_err(|err| {
        warn!("rejected path {:?}: {}", path, err);
        err
    })?;
    Ok((Arc::clone(&inner.root), abs))
}
