//! File status declarations shared by the kernel and the C library.
//!
//! This crate only describes data: the `mode` bit layout, the file-type
//! predicates and the `stat` record. The operations that fill a record
//! live in the kernel crate.

#![cfg_attr(not(test), no_std)]

mod mode;
mod stat;

pub use mode::*;
pub use stat::{BlkCntT, BlkSizeT, FileStatus, OffT, Stat, TimeT};
