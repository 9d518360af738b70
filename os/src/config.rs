//! Compile-time limits and defaults.

use log::Level;

/// Longest path accepted, not counting the terminator.
pub const PATH_MAX: usize = 255;
/// Longest single path component.
pub const NAME_MAX: usize = 32;
/// Symbolic links followed in one lookup before giving up.
pub const SYMLOOP_MAX: usize = 8;
/// Open files per process
pub const MAX_OPEN_FILES: usize = 16;
pub const DEFAULT_UMASK: u32 = 0o022;
/// Used when `LOG` was not set at build time.
pub const DEFAULT_LOG_LEVEL: Level = Level::Warn;
