//! `mode_t` bit settings.
//!
//! Only the low 16 bits of a mode are used, but `mode_t` stays as wide as
//! `int` because it is promoted to `int` when passed through varargs.
//!
//! ```text
//!   TTTT SSSU UUGG GOOO
//!
//!   Bits 0-2:   Permissions for others
//!   Bits 3-5:   Group permissions
//!   Bits 6-8:   Owner permissions
//!   Bits 9-11:  Sticky, set-group-ID and set-user-ID (not used)
//!   Bits 12-15: File type
//! ```

use bitflags::bitflags;
use core::fmt;

pub type ModeT = u32;

pub const S_IXOTH: ModeT = 0o00001;
pub const S_IWOTH: ModeT = 0o00002;
pub const S_IROTH: ModeT = 0o00004;
pub const S_IRWXO: ModeT = 0o00007;

pub const S_IXGRP: ModeT = 0o00010;
pub const S_IWGRP: ModeT = 0o00020;
pub const S_IRGRP: ModeT = 0o00040;
pub const S_IRWXG: ModeT = 0o00070;

pub const S_IXUSR: ModeT = 0o00100;
pub const S_IWUSR: ModeT = 0o00200;
pub const S_IRUSR: ModeT = 0o00400;
pub const S_IRWXU: ModeT = 0o00700;

/// "Sticky" bit (not used)
pub const S_ISVTX: ModeT = 0o01000;
/// Set group ID bit (not used)
pub const S_ISGID: ModeT = 0o02000;
/// Set UID bit (not used)
pub const S_ISUID: ModeT = 0o04000;

pub const S_IFIFO: ModeT = 0o010000;
pub const S_IFCHR: ModeT = 0o020000;
pub const S_IFDIR: ModeT = 0o040000;
pub const S_IFBLK: ModeT = 0o060000;
pub const S_IFREG: ModeT = 0o100000;
pub const S_IFLNK: ModeT = 0o120000;
pub const S_IFSOCK: ModeT = 0o140000;

// Message queues, semaphores and shared memory have no type tag of their
// own yet. All three are zero, so they are indistinguishable from a mode
// with no type bits set.
pub const S_IFMQ: ModeT = 0;
pub const S_IFSEM: ModeT = 0;
pub const S_IFSHM: ModeT = 0;

pub const S_IFMT: ModeT = 0o170000;

/// Permission and special bits, everything below the type field.
pub const S_IPERM: ModeT = 0o7777;

/// block special
#[inline]
pub const fn s_isblk(m: ModeT) -> bool {
    (m & S_IFMT) == S_IFBLK
}

/// char special
#[inline]
pub const fn s_ischr(m: ModeT) -> bool {
    (m & S_IFMT) == S_IFCHR
}

/// directory
#[inline]
pub const fn s_isdir(m: ModeT) -> bool {
    (m & S_IFMT) == S_IFDIR
}

/// fifo or socket
#[inline]
pub const fn s_isfifo(m: ModeT) -> bool {
    (m & S_IFMT) == S_IFIFO
}

/// regular file
#[inline]
pub const fn s_isreg(m: ModeT) -> bool {
    (m & S_IFMT) == S_IFREG
}

/// symbolic link
#[inline]
pub const fn s_islnk(m: ModeT) -> bool {
    (m & S_IFMT) == S_IFLNK
}

/// socket
#[inline]
pub const fn s_issock(m: ModeT) -> bool {
    (m & S_IFMT) == S_IFSOCK
}

/// True for every mode without type bits, see [`S_IFMQ`].
#[inline]
pub const fn s_ismq(m: ModeT) -> bool {
    (m & S_IFMT) == S_IFMQ
}

/// True for every mode without type bits, see [`S_IFSEM`].
#[inline]
pub const fn s_issem(m: ModeT) -> bool {
    (m & S_IFMT) == S_IFSEM
}

/// True for every mode without type bits, see [`S_IFSHM`].
#[inline]
pub const fn s_isshm(m: ModeT) -> bool {
    (m & S_IFMT) == S_IFSHM
}

bitflags! {
    /// The permission and special bits of a mode.
    pub struct StatMode: u32 {
        /// set-user-ID
        const S_ISUID = 0o4000;
        /// set-group-ID
        const S_ISGID = 0o2000;
        /// sticky bit
        const S_ISVTX = 0o1000;
        /// read permission, owner
        const S_IRUSR = 0o0400;
        /// write permission, owner
        const S_IWUSR = 0o0200;
        /// execute/search permission, owner
        const S_IXUSR = 0o0100;
        /// read permission, group
        const S_IRGRP = 0o0040;
        /// write permission, group
        const S_IWGRP = 0o0020;
        /// execute/search permission, group
        const S_IXGRP = 0o0010;
        /// read permission, others
        const S_IROTH = 0o0004;
        /// write permission, others
        const S_IWOTH = 0o0002;
        /// execute/search permission, others
        const S_IXOTH = 0o0001;

        const S_IRWXU = Self::S_IRUSR.bits | Self::S_IWUSR.bits | Self::S_IXUSR.bits;
        const S_IRWXG = Self::S_IRGRP.bits | Self::S_IWGRP.bits | Self::S_IXGRP.bits;
        const S_IRWXO = Self::S_IROTH.bits | Self::S_IWOTH.bits | Self::S_IXOTH.bits;
    }
}

impl StatMode {
    /// Permission triples only, with the special bits cleared.
    pub const fn access_bits(&self) -> Self {
        Self::from_bits_truncate(self.bits() & 0o777)
    }
}

/// The closed set of tags the file-type field may hold.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Fifo = S_IFIFO,
    CharDevice = S_IFCHR,
    Dir = S_IFDIR,
    BlockDevice = S_IFBLK,
    File = S_IFREG,
    SymLink = S_IFLNK,
    Socket = S_IFSOCK,
}

impl FileType {
    /// Returns `None` when the type field is zero or holds a pattern that
    /// is not assigned to any type.
    pub const fn from_mode(mode: ModeT) -> Option<Self> {
        match mode & S_IFMT {
            S_IFIFO => Some(Self::Fifo),
            S_IFCHR => Some(Self::CharDevice),
            S_IFDIR => Some(Self::Dir),
            S_IFBLK => Some(Self::BlockDevice),
            S_IFREG => Some(Self::File),
            S_IFLNK => Some(Self::SymLink),
            S_IFSOCK => Some(Self::Socket),
            _ => None,
        }
    }

    pub const fn bits(self) -> ModeT {
        self as ModeT
    }

    fn indicator(self) -> char {
        match self {
            Self::Fifo => 'p',
            Self::CharDevice => 'c',
            Self::Dir => 'd',
            Self::BlockDevice => 'b',
            Self::File => '-',
            Self::SymLink => 'l',
            Self::Socket => 's',
        }
    }
}

/// A complete `mode_t`: file type plus permission bits.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mode(ModeT);

impl Mode {
    pub const fn new(type_: FileType, perm: StatMode) -> Self {
        Self(type_.bits() | perm.bits())
    }

    /// Keeps every bit, including ones no type or permission claims.
    pub const fn from_bits(bits: ModeT) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> ModeT {
        self.0
    }

    pub const fn type_bits(self) -> ModeT {
        self.0 & S_IFMT
    }

    pub const fn file_type(self) -> Option<FileType> {
        FileType::from_mode(self.0)
    }

    pub const fn perm(self) -> StatMode {
        StatMode::from_bits_truncate(self.0 & S_IPERM)
    }

    pub const fn is_block_device(self) -> bool {
        s_isblk(self.0)
    }

    pub const fn is_char_device(self) -> bool {
        s_ischr(self.0)
    }

    pub const fn is_dir(self) -> bool {
        s_isdir(self.0)
    }

    pub const fn is_fifo(self) -> bool {
        s_isfifo(self.0)
    }

    pub const fn is_file(self) -> bool {
        s_isreg(self.0)
    }

    pub const fn is_symlink(self) -> bool {
        s_islnk(self.0)
    }

    pub const fn is_socket(self) -> bool {
        s_issock(self.0)
    }

    pub const fn is_message_queue(self) -> bool {
        s_ismq(self.0)
    }

    pub const fn is_semaphore(self) -> bool {
        s_issem(self.0)
    }

    pub const fn is_shared_memory(self) -> bool {
        s_isshm(self.0)
    }
}

impl From<ModeT> for Mode {
    fn from(bits: ModeT) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Mode> for ModeT {
    fn from(mode: Mode) -> Self {
        mode.bits()
    }
}

/// Renders the mode the way `ls -l` does, e.g. `drwxr-xr-x`.
impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        let perm = self.perm();
        let indicator = self.file_type().map_or('?', FileType::indicator);
        f.write_char(indicator)?;

        let triples = [
            (StatMode::S_IRUSR, StatMode::S_IWUSR, StatMode::S_IXUSR, StatMode::S_ISUID, 's'),
            (StatMode::S_IRGRP, StatMode::S_IWGRP, StatMode::S_IXGRP, StatMode::S_ISGID, 's'),
            (StatMode::S_IROTH, StatMode::S_IWOTH, StatMode::S_IXOTH, StatMode::S_ISVTX, 't'),
        ];
        for (r, w, x, special, mark) in triples {
            f.write_char(if perm.contains(r) { 'r' } else { '-' })?;
            f.write_char(if perm.contains(w) { 'w' } else { '-' })?;
            let exec = match (perm.contains(x), perm.contains(special)) {
                (true, true) => mark,
                (false, true) => mark.to_ascii_uppercase(),
                (true, false) => 'x',
                (false, false) => '-',
            };
            f.write_char(exec)?;
        }
        Ok(())
    }
}
