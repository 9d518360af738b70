//! In-memory filesystem used by the tests.

use super::path::split_last;
use super::{File, FileSystem, LinkWalk, OpenFlags};
use crate::error::{Errno, Result};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::sync::atomic::{AtomicU32, Ordering};
use spin::Mutex;
use sys_stat::{FileStatus, FileType, Mode, OffT, StatMode};

const BLOCK_SIZE: i16 = 512;

struct Node {
    status: FileStatus,
    /// Absolute target of a symbolic link.
    target: Option<String>,
}

pub struct TestFs {
    nodes: Mutex<BTreeMap<String, Node>>,
    clock: AtomicU32,
}

struct TestFile {
    status: FileStatus,
}

impl File for TestFile {
    fn stat(&self) -> Result<FileStatus> {
        Ok(self.status)
    }
}

impl TestFs {
    pub fn new() -> Arc<Self> {
        let fs = Self {
            nodes: Mutex::new(BTreeMap::new()),
            clock: AtomicU32::new(1),
        };
        fs.insert("/", FileType::Dir, StatMode::from_bits_truncate(0o755), 0, None);
        Arc::new(fs)
    }

    pub fn add_file(&self, path: &str, size: OffT) {
        self.insert(path, FileType::File, StatMode::from_bits_truncate(0o644), size, None);
    }

    pub fn add_dir(&self, path: &str) {
        self.insert(path, FileType::Dir, StatMode::from_bits_truncate(0o755), 0, None);
    }

    pub fn add_symlink(&self, path: &str, target: &str) {
        self.insert(
            path,
            FileType::SymLink,
            StatMode::from_bits_truncate(0o777),
            target.len() as OffT,
            Some(target.to_string()),
        );
    }

    /// An open handle on an existing node, bypassing `open()`.
    pub fn file_at(&self, path: &str) -> Arc<dyn File> {
        let status = self.nodes.lock()[path].status;
        Arc::new(TestFile { status })
    }

    fn insert(&self, path: &str, type_: FileType, perm: StatMode, size: OffT, target: Option<String>) {
        let now = self.clock.fetch_add(1, Ordering::Relaxed);
        let status = FileStatus {
            mode: Mode::new(type_, perm),
            size,
            block_size: BLOCK_SIZE,
            block_count: FileStatus::blocks_for(size, BLOCK_SIZE),
            atime: now,
            mtime: now,
            ctime: now,
        };
        self.nodes.lock().insert(path.to_string(), Node { status, target });
    }

    fn lookup(&self, path: &str, walk: &mut LinkWalk) -> Result<FileStatus> {
        let nodes = self.nodes.lock();
        let mut path = path.to_string();
        loop {
            if let Some((parent, _)) = split_last(&path) {
                match nodes.get(parent) {
                    Some(node) if !node.status.mode.is_dir() => {
                        return_errno!(Errno::ENOTDIR)
                    }
                    Some(_) => {}
                    None => return_errno!(Errno::ENOENT),
                }
            }
            let node = match nodes.get(&path) {
                Some(node) => node,
                None => return_errno!(Errno::ENOENT),
            };
            match &node.target {
                Some(target) => {
                    walk.follow()?;
                    path = target.clone();
                }
                None => return Ok(node.status),
            }
        }
    }

    fn create(&self, path: &str, type_: FileType, perm: StatMode) -> Result<()> {
        {
            let nodes = self.nodes.lock();
            let (parent, _) = split_last(path).ok_or(Errno::EEXIST)?;
            if nodes.contains_key(path) {
                return_errno!(Errno::EEXIST);
            }
            match nodes.get(parent) {
                Some(node) if node.status.mode.is_dir() => {}
                Some(_) => return_errno!(Errno::ENOTDIR),
                None => return_errno!(Errno::ENOENT),
            }
        }
        self.insert(path, type_, perm, 0, None);
        Ok(())
    }
}

impl FileSystem for TestFs {
    fn stat(&self, path: &str, walk: &mut LinkWalk) -> Result<FileStatus> {
        self.lookup(path, walk)
    }

    fn open(&self, path: &str, flags: OpenFlags, walk: &mut LinkWalk) -> Result<Arc<dyn File>> {
        let status = match self.lookup(path, walk) {
            Err(err) if err.error() == Errno::ENOENT && flags.contains(OpenFlags::CREATE) => {
                self.create(path, FileType::File, StatMode::from_bits_truncate(0o644))?;
                self.lookup(path, walk)?
            }
            other => other?,
        };
        if status.mode.is_dir() && flags.intersects(OpenFlags::WRONLY | OpenFlags::RDWR) {
            return_errno!(Errno::EISDIR);
        }
        Ok(Arc::new(TestFile { status }))
    }

    fn mkdir(&self, path: &str, mode: StatMode) -> Result<()> {
        self.create(path, FileType::Dir, mode)
    }

    fn mkfifo(&self, path: &str, mode: StatMode) -> Result<()> {
        self.create(path, FileType::Fifo, mode)
    }
}
