use super::path::split_last;
use super::{lookup_context, FileSystem};
use crate::error::{Errno, Result};
use crate::task::ProcessControlBlock;
use alloc::string::String;
use alloc::sync::Arc;
use log::{debug, info};
use sys_stat::{ModeT, StatMode, S_IFMT};

/// Creates the directory `path`. Permissions are `mode & !umask`.
pub fn mkdir(process: &ProcessControlBlock, path: &str, mode: ModeT) -> Result<()> {
    let (root, abs, perm) = creation_context(process, path, mode)?;
    root.mkdir(&abs, perm)?;
    info!("mkdir: {} mode 0o{:o}", abs, perm.bits());
    Ok(())
}

/// Creates the FIFO special file `path`. Permissions are `mode & !umask`.
pub fn mkfifo(process: &ProcessControlBlock, path: &str, mode: ModeT) -> Result<()> {
    let (root, abs, perm) = creation_context(process, path, mode)?;
    root.mkfifo(&abs, perm)?;
    info!("mkfifo: {} mode 0o{:o}", abs, perm.bits());
    Ok(())
}

/// Sets the file creation mask and returns the previous one.
pub fn umask(process: &ProcessControlBlock, mask: ModeT) -> StatMode {
    let mut inner = process.inner_exclusive_access();
    let old = inner.umask;
    inner.umask = StatMode::from_bits_truncate(mask).access_bits();
    old
}

fn creation_context(
    process: &ProcessControlBlock,
    path: &str,
    mode: ModeT,
) -> Result<(Arc<dyn FileSystem>, String, StatMode)> {
    let (root, abs) = lookup_context(process, path)?;
    if split_last(&abs).is_none() {
        return_errno_with_message!(Errno::EEXIST, "the root directory always exists");
    }
    if mode & S_IFMT != 0 {
        debug!("ignoring file type bits 0o{:o} of creation mode", mode & S_IFMT);
    }
    let umask = process.inner_exclusive_access().umask;
    Ok((root, abs, StatMode::from_bits_truncate(mode) - umask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::stat;
    use crate::fs::testfs::TestFs;
    use sys_stat::{FileType, S_IFDIR, S_IFIFO, S_IFREG};

    fn setup() -> ProcessControlBlock {
        let fs = TestFs::new();
        fs.add_dir("/dev");
        fs.add_file("/dev/zero", 0);
        ProcessControlBlock::new(1, fs)
    }

    #[test]
    fn mkdir_applies_umask() {
        let process = setup();
        mkdir(&process, "/home", 0o777).unwrap();
        let status = stat(&process, "/home").unwrap();
        assert_eq!(status.file_type(), Some(FileType::Dir));
        assert_eq!(status.mode.bits(), S_IFDIR | 0o755);
    }

    #[test]
    fn mkfifo_creates_fifo() {
        let process = setup();
        mkfifo(&process, "/dev/fifo0", 0o666).unwrap();
        let status = stat(&process, "/dev/fifo0").unwrap();
        assert!(status.mode.is_fifo());
        assert_eq!(status.mode.bits(), S_IFIFO | 0o644);
        assert_eq!(status.size, 0);
    }

    #[test]
    fn creation_ignores_type_bits() {
        let process = setup();
        mkdir(&process, "/srv", S_IFREG | 0o700).unwrap();
        assert_eq!(stat(&process, "/srv").unwrap().mode.bits(), S_IFDIR | 0o700);
        mkfifo(&process, "/pipe", S_IFDIR | 0o600).unwrap();
        assert_eq!(stat(&process, "/pipe").unwrap().mode.bits(), S_IFIFO | 0o600);
    }

    #[test]
    fn special_bits_pass_the_umask() {
        let process = setup();
        mkdir(&process, "/tmp", 0o1777).unwrap();
        assert_eq!(stat(&process, "/tmp").unwrap().mode.bits(), S_IFDIR | 0o1755);
    }

    #[test]
    fn relative_creation_uses_cwd() {
        let process = setup();
        process.inner_exclusive_access().cwd = "/dev".into();
        mkfifo(&process, "./ttyfifo", 0o600).unwrap();
        assert!(stat(&process, "/dev/ttyfifo").unwrap().mode.is_fifo());
    }

    #[test]
    fn creation_failures() {
        let process = setup();
        let mkdir_errno = |path: &str| mkdir(&process, path, 0o755).unwrap_err().error();
        assert_eq!(mkdir_errno("/"), Errno::EEXIST);
        assert_eq!(mkdir_errno("/.."), Errno::EEXIST);
        assert_eq!(mkdir_errno("/dev"), Errno::EEXIST);
        assert_eq!(mkdir_errno(""), Errno::ENOENT);
        assert_eq!(mkdir_errno("/no/such"), Errno::ENOENT);
        assert_eq!(mkdir_errno("/dev/zero/x"), Errno::ENOTDIR);
        let err = mkfifo(&process, "/dev/zero", 0o600).unwrap_err();
        assert_eq!(err.error(), Errno::EEXIST);
    }

    #[test]
    fn umask_swaps_and_masks() {
        let process = setup();
        assert_eq!(umask(&process, 0o077).bits(), 0o022);
        assert_eq!(umask(&process, 0o4777).bits(), 0o077);
        assert_eq!(umask(&process, 0).bits(), 0o777);
        mkdir(&process, "/open", 0o777).unwrap();
        assert_eq!(stat(&process, "/open").unwrap().mode.bits(), S_IFDIR | 0o777);
    }
}
