//! File flags and mode bits.
//!
//! `OpenFlags` values are architecture-specific: sparc64 inherited the
//! BSD-style numbering, the other targets share the generic Linux layout.

use core::ffi::c_int;

use bitflags::bitflags;

use crate::types::mode_t;

#[cfg(not(target_arch = "sparc64"))]
bitflags! {
    /// Flags accepted by `open`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpenFlags: c_int {
        const RDONLY = 0;
        const WRONLY = 0o1;
        const RDWR = 0o2;
        const CREAT = 0o100;
        const EXCL = 0o200;
        const NOCTTY = 0o400;
        const TRUNC = 0o1000;
        const APPEND = 0o2000;
        const NONBLOCK = 0o4000;
    }
}

#[cfg(target_arch = "sparc64")]
bitflags! {
    /// Flags accepted by `open`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpenFlags: c_int {
        const RDONLY = 0;
        const WRONLY = 0x0001;
        const RDWR = 0x0002;
        const APPEND = 0x0008;
        const CREAT = 0x0200;
        const TRUNC = 0x0400;
        const EXCL = 0x0800;
        const NONBLOCK = 0x4000;
        const NOCTTY = 0x8000;
    }
}

bitflags! {
    /// Permission bits probed by `access`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AccessMode: c_int {
        const X_OK = 1;
        const W_OK = 2;
        const R_OK = 4;
    }
}

impl AccessMode {
    /// Existence check only.
    pub const F_OK: AccessMode = AccessMode::empty();
}

/// File-type field of a mode word.
pub const S_IFMT: mode_t = 0xF000;
/// FIFO
pub const S_IFIFO: mode_t = 0x1000;
/// Character device
pub const S_IFCHR: mode_t = 0x2000;
/// Directory
pub const S_IFDIR: mode_t = 0x4000;
/// Block device
pub const S_IFBLK: mode_t = 0x6000;
/// Regular file
pub const S_IFREG: mode_t = 0x8000;
/// Symbolic link
pub const S_IFLNK: mode_t = 0xA000;
/// Socket
pub const S_IFSOCK: mode_t = 0xC000;

/// Resolve relative paths from the caller's working directory in the
/// `*at` family of syscalls.
#[cfg(not(target_arch = "sparc64"))]
pub const AT_FDCWD: c_int = -100;
#[cfg(target_arch = "sparc64")]
pub const AT_FDCWD: c_int = 0xFFD1_9553u32 as c_int;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_bits_are_execute_write_read() {
        assert_eq!(AccessMode::X_OK.bits(), 1);
        assert_eq!(AccessMode::W_OK.bits(), 2);
        assert_eq!(AccessMode::R_OK.bits(), 4);
        assert_eq!(AccessMode::F_OK.bits(), 0);
    }

    #[test]
    fn device_mode_bits() {
        assert_eq!(S_IFBLK, 0x6000);
        assert_eq!(S_IFCHR, 0x2000);
        assert_eq!(S_IFBLK & S_IFMT, S_IFBLK);
    }

    #[test]
    fn open_access_modes_are_disjoint_from_creat() {
        assert_eq!(OpenFlags::RDONLY.bits(), 0);
        assert_eq!((OpenFlags::CREAT & (OpenFlags::WRONLY | OpenFlags::RDWR)).bits(), 0);
    }
}
