//! System call entry points.
//!
//! Each call returns a non-negative value on success and `-errno` on
//! failure.

mod fs;

pub use fs::*;

use crate::error::Result;
use log::debug;

fn syscall_return(name: &str, result: Result<isize>) -> isize {
    match result {
        Ok(ret) => ret,
        Err(err) => {
            debug!("{} failed: {}", name, err);
            err.as_syscall_return()
        }
    }
}
