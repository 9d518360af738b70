use crate::config::{DEFAULT_UMASK, MAX_OPEN_FILES};
use crate::error::{Errno, Result};
use crate::fs::{File, FileSystem};
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use spin::{Mutex, MutexGuard};
use sys_stat::StatMode;

/// The per-process state the file system calls work on.
pub struct ProcessControlBlock {
    // immutable
    pid: usize,
    // mutable
    inner: Mutex<ProcessControlBlockInner>,
}

pub struct ProcessControlBlockInner {
    pub fd_table: Vec<Option<Arc<dyn File>>>,
    /// Absolute and normalized.
    pub cwd: String,
    pub umask: StatMode,
    pub root: Arc<dyn FileSystem>,
}

impl ProcessControlBlockInner {
    /// Lowest free descriptor, growing the table up to `MAX_OPEN_FILES`.
    /// Fails with `EMFILE` when `alloc_fd` would, without touching the table.
    pub fn check_fd_free(&self) -> Result<()> {
        if self.fd_table.len() >= MAX_OPEN_FILES && self.fd_table.iter().all(Option::is_some) {
            return_errno_with_message!(Errno::EMFILE, "too many open files");
        }
        Ok(())
    }

    pub fn alloc_fd(&mut self) -> Result<usize> {
        if let Some(fd) = (0..self.fd_table.len()).find(|fd| self.fd_table[*fd].is_none()) {
            return Ok(fd);
        }
        self.check_fd_free()?;
        self.fd_table.push(None);
        Ok(self.fd_table.len() - 1)
    }

    pub fn get_file(&self, fd: usize) -> Result<Arc<dyn File>> {
        match self.fd_table.get(fd) {
            Some(Some(file)) => Ok(Arc::clone(file)),
            _ => return_errno_with_message!(Errno::EBADF, "bad file descriptor"),
        }
    }
}

impl ProcessControlBlock {
    pub fn new(pid: usize, root: Arc<dyn FileSystem>) -> Self {
        Self {
            pid,
            inner: Mutex::new(ProcessControlBlockInner {
                fd_table: Vec::new(),
                cwd: String::from("/"),
                umask: StatMode::from_bits_truncate(DEFAULT_UMASK),
                root,
            }),
        }
    }

    pub fn inner_exclusive_access(&self) -> MutexGuard<'_, ProcessControlBlockInner> {
        self.inner.lock()
    }

    pub fn getpid(&self) -> usize {
        self.pid
    }
}
