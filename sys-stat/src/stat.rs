use crate::mode::{FileType, Mode, ModeT};

pub type OffT = i32;
pub type BlkSizeT = i16;
pub type BlkCntT = u32;
pub type TimeT = u32;

/// Metadata of one file or directory, as returned by `stat()` and
/// `fstat()`.
///
/// This is a snapshot taken when the query ran. It owns nothing and
/// refers to nothing, so callers may keep or copy it freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileStatus {
    /// File type, attributes and access mode bits
    pub mode: Mode,
    /// Size of file/directory, in bytes
    pub size: OffT,
    /// Blocksize used for filesystem I/O
    pub block_size: BlkSizeT,
    /// Number of blocks allocated
    pub block_count: BlkCntT,
    /// Time of last access
    pub atime: TimeT,
    /// Time of last modification
    pub mtime: TimeT,
    /// Time of last status change
    pub ctime: TimeT,
}

impl FileStatus {
    pub const fn new(mode: Mode) -> Self {
        Self {
            mode,
            size: 0,
            block_size: 0,
            block_count: 0,
            atime: 0,
            mtime: 0,
            ctime: 0,
        }
    }

    pub const fn file_type(&self) -> Option<FileType> {
        self.mode.file_type()
    }

    /// Blocks needed to hold `size` bytes without holes.
    pub const fn blocks_for(size: OffT, block_size: BlkSizeT) -> BlkCntT {
        if size <= 0 || block_size <= 0 {
            return 0;
        }
        let (size, block_size) = (size as u32, block_size as u32);
        (size + block_size - 1) / block_size
    }
}

/// The C layout of `struct stat`.
///
/// Field order follows the header. The link traversal counter some
/// configurations append is kept by the resolver instead and never
/// appears here.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stat {
    pub st_mode: ModeT,
    pub st_size: OffT,
    pub st_blksize: BlkSizeT,
    pub st_blocks: BlkCntT,
    pub st_atime: TimeT,
    pub st_mtime: TimeT,
    pub st_ctime: TimeT,
}

impl Stat {
    pub const fn new() -> Self {
        Self {
            st_mode: 0,
            st_size: 0,
            st_blksize: 0,
            st_blocks: 0,
            st_atime: 0,
            st_mtime: 0,
            st_ctime: 0,
        }
    }
}

impl From<FileStatus> for Stat {
    fn from(status: FileStatus) -> Self {
        Self {
            st_mode: status.mode.bits(),
            st_size: status.size,
            st_blksize: status.block_size,
            st_blocks: status.block_count,
            st_atime: status.atime,
            st_mtime: status.mtime,
            st_ctime: status.ctime,
        }
    }
}

impl From<Stat> for FileStatus {
    fn from(st: Stat) -> Self {
        Self {
            mode: Mode::from_bits(st.st_mode),
            size: st.st_size,
            block_size: st.st_blksize,
            block_count: st.st_blocks,
            atime: st.st_atime,
            mtime: st.st_mtime,
            ctime: st.st_ctime,
        }
    }
}
