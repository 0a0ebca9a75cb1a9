//! nanolibc: a freestanding libc replacement for early userspace.
//!
//! Statically linked boot and rescue tools run before any real libc or
//! dynamic linker is available, so every primitive here reaches the kernel
//! by issuing the trap instruction itself. The crate is three layers:
//!
//! - `arch`: per-architecture raw invokers (`syscall0`..`syscall5`) plus the
//!   convention folding that turns a raw kernel return into the uniform
//!   "-1 and errno" contract.
//! - the typed surface (`process`, `fs`, `mount`, `system`, `poll`, `net`):
//!   one thin entry point per kernel operation.
//! - utility modules (`string`, `memory`, `numfmt`, `stdio`) built only on
//!   the surface, for programs that need them.
//!
//! Single-threaded by design: blocking calls suspend the whole process and
//! the error slot is one process-wide integer.

#![no_std]
#![cfg_attr(target_arch = "sparc64", feature(asm_experimental_arch))]

#[cfg(test)]
extern crate std;

pub mod arch;
pub mod errno;
pub mod fs;
pub mod memory;
pub mod mount;
pub mod net;
pub mod numfmt;
pub mod poll;
pub mod process;
pub mod stdio;
pub mod string;
pub mod system;

pub use nanolibc_abi as abi;

pub use errno::{errno, last_error};
pub use fs::*;
pub use mount::*;
pub use net::*;
pub use poll::*;
pub use process::*;
pub use system::*;
