mod process;

pub use process::{ProcessControlBlock, ProcessControlBlockInner};
