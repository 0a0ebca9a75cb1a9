//! nanolibc kernel ABI types
//!
//! Canonical definitions for the constants and plain-data structures the
//! syscall surface shares with the kernel. Having a single source of truth
//! eliminates:
//! - Duplicate constant definitions
//! - ABI mismatches between the trap layer and its callers
//! - Magic numbers scattered through the surface crates
//!
//! Every value here is part of the kernel ABI of the supported targets and
//! must be bit-exact. All structures are `#[repr(C)]` for ABI stability.

#![no_std]
#![forbid(unsafe_code)]
#![allow(non_camel_case_types)]

pub mod errno;
pub mod fcntl;
pub mod mount;
pub mod net;
pub mod reboot;
pub mod select;
pub mod signal;
pub mod time;
pub mod types;
pub mod wait;

pub use errno::*;
pub use fcntl::*;
pub use mount::*;
pub use net::*;
pub use reboot::*;
pub use select::*;
pub use signal::*;
pub use time::*;
pub use types::*;
pub use wait::*;
