#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
pub mod error;
pub mod config;
pub mod fs;
pub mod logging;
pub mod syscall;
pub mod task;

pub use error::{Errno, Error, Result};
