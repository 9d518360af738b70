use super::syscall_return;
use crate::error::{Error, Errno};
use crate::fs::{self, OpenFlags};
use crate::task::ProcessControlBlock;
use log::debug;
use sys_stat::{ModeT, Stat};

pub fn sys_open(process: &ProcessControlBlock, path: &str, flags: u32) -> isize {
    debug!("[{}] sys_open: path = {:?}, flags = {:#x}", process.getpid(), path, flags);
    let result = OpenFlags::from_bits(flags)
        .ok_or_else(|| Error::with_message(Errno::EINVAL, "unknown open flags"))
        .and_then(|flags| fs::open(process, path, flags))
        .map(|fd| fd as isize);
    syscall_return("sys_open", result)
}

pub fn sys_close(process: &ProcessControlBlock, fd: usize) -> isize {
    debug!("[{}] sys_close: fd = {}", process.getpid(), fd);
    syscall_return("sys_close", fs::close(process, fd).map(|()| 0))
}

pub fn sys_chdir(process: &ProcessControlBlock, path: &str) -> isize {
    debug!("[{}] sys_chdir: path = {:?}", process.getpid(), path);
    syscall_return("sys_chdir", fs::chdir(process, path).map(|()| 0))
}

pub fn sys_mkdir(process: &ProcessControlBlock, path: &str, mode: ModeT) -> isize {
    debug!("[{}] sys_mkdir: path = {:?}, mode = 0o{:o}", process.getpid(), path, mode);
    syscall_return("sys_mkdir", fs::mkdir(process, path, mode).map(|()| 0))
}

pub fn sys_mkfifo(process: &ProcessControlBlock, path: &str, mode: ModeT) -> isize {
    debug!("[{}] sys_mkfifo: path = {:?}, mode = 0o{:o}", process.getpid(), path, mode);
    syscall_return("sys_mkfifo", fs::mkfifo(process, path, mode).map(|()| 0))
}

/// `buf` is written only on success.
pub fn sys_stat(process: &ProcessControlBlock, path: &str, buf: &mut Stat) -> isize {
    debug!("[{}] sys_stat: path = {:?}", process.getpid(), path);
    let result = fs::stat(process, path).map(|status| {
        *buf = Stat::from(status);
        0
    });
    syscall_return("sys_stat", result)
}

/// `buf` is written only on success.
pub fn sys_fstat(process: &ProcessControlBlock, fd: usize, buf: &mut Stat) -> isize {
    debug!("[{}] sys_fstat: fd = {}", process.getpid(), fd);
    let result = fs::fstat(process, fd).map(|status| {
        *buf = Stat::from(status);
        0
    });
    syscall_return("sys_fstat", result)
}

/// Returns the previous mask.
pub fn sys_umask(process: &ProcessControlBlock, mask: ModeT) -> isize {
    debug!("[{}] sys_umask: mask = 0o{:o}", process.getpid(), mask);
    fs::umask(process, mask).bits() as isize
}
