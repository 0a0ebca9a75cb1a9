//! File and descriptor operations.
//!
//! Descriptors are the kernel's small integers; paths are NUL-terminated
//! C strings. On aarch64 the legacy path syscalls no longer exist and each
//! entry point routes through its `*at` replacement anchored at `AT_FDCWD`.

use core::ffi::{c_char, c_int, c_ulong, c_void};

use nanolibc_abi::{AccessMode, OpenFlags, dev_t, mode_t};

use crate::arch;

#[cfg(target_arch = "aarch64")]
use nanolibc_abi::AT_FDCWD;

pub fn open(path: *const c_char, flags: OpenFlags, mode: mode_t) -> c_int {
    #[cfg(not(target_arch = "aarch64"))]
    let raw = unsafe {
        arch::syscall3(
            arch::SYS_OPEN,
            path as usize,
            flags.bits() as usize,
            mode as usize,
        )
    };
    #[cfg(target_arch = "aarch64")]
    let raw = unsafe {
        arch::syscall4(
            arch::SYS_OPENAT,
            AT_FDCWD as usize,
            path as usize,
            flags.bits() as usize,
            mode as usize,
        )
    };
    raw as c_int
}

pub fn read(fd: c_int, buf: *mut c_void, count: usize) -> isize {
    (unsafe { arch::syscall3(arch::SYS_READ, fd as usize, buf as usize, count) }) as isize
}

pub fn write(fd: c_int, buf: *const c_void, count: usize) -> isize {
    (unsafe { arch::syscall3(arch::SYS_WRITE, fd as usize, buf as usize, count) }) as isize
}

pub fn close(fd: c_int) -> c_int {
    (unsafe { arch::syscall1(arch::SYS_CLOSE, fd as usize) }) as c_int
}

pub fn unlink(path: *const c_char) -> c_int {
    #[cfg(not(target_arch = "aarch64"))]
    let raw = unsafe { arch::syscall1(arch::SYS_UNLINK, path as usize) };
    #[cfg(target_arch = "aarch64")]
    let raw = unsafe { arch::syscall3(arch::SYS_UNLINKAT, AT_FDCWD as usize, path as usize, 0) };
    raw as c_int
}

pub fn symlink(target: *const c_char, linkpath: *const c_char) -> c_int {
    #[cfg(not(target_arch = "aarch64"))]
    let raw = unsafe { arch::syscall2(arch::SYS_SYMLINK, target as usize, linkpath as usize) };
    #[cfg(target_arch = "aarch64")]
    let raw = unsafe {
        arch::syscall3(
            arch::SYS_SYMLINKAT,
            target as usize,
            AT_FDCWD as usize,
            linkpath as usize,
        )
    };
    raw as c_int
}

pub fn chmod(path: *const c_char, mode: mode_t) -> c_int {
    #[cfg(not(target_arch = "aarch64"))]
    let raw = unsafe { arch::syscall2(arch::SYS_CHMOD, path as usize, mode as usize) };
    #[cfg(target_arch = "aarch64")]
    let raw = unsafe {
        arch::syscall3(
            arch::SYS_FCHMODAT,
            AT_FDCWD as usize,
            path as usize,
            mode as usize,
        )
    };
    raw as c_int
}

pub fn mknod(path: *const c_char, mode: mode_t, dev: dev_t) -> c_int {
    #[cfg(not(target_arch = "aarch64"))]
    let raw = unsafe {
        arch::syscall3(
            arch::SYS_MKNOD,
            path as usize,
            mode as usize,
            dev as usize,
        )
    };
    #[cfg(target_arch = "aarch64")]
    let raw = unsafe {
        arch::syscall4(
            arch::SYS_MKNODAT,
            AT_FDCWD as usize,
            path as usize,
            mode as usize,
            dev as usize,
        )
    };
    raw as c_int
}

pub fn access(path: *const c_char, amode: AccessMode) -> c_int {
    #[cfg(not(target_arch = "aarch64"))]
    let raw = unsafe { arch::syscall2(arch::SYS_ACCESS, path as usize, amode.bits() as usize) };
    #[cfg(target_arch = "aarch64")]
    let raw = unsafe {
        arch::syscall3(
            arch::SYS_FACCESSAT,
            AT_FDCWD as usize,
            path as usize,
            amode.bits() as usize,
        )
    };
    raw as c_int
}

pub fn ioctl(fd: c_int, request: c_ulong, argp: *mut c_void) -> c_int {
    (unsafe {
        arch::syscall3(
            arch::SYS_IOCTL,
            fd as usize,
            request as usize,
            argp as usize,
        )
    }) as c_int
}

pub fn dup2(oldfd: c_int, newfd: c_int) -> c_int {
    #[cfg(not(target_arch = "aarch64"))]
    let raw = unsafe { arch::syscall2(arch::SYS_DUP2, oldfd as usize, newfd as usize) };
    #[cfg(target_arch = "aarch64")]
    let raw = unsafe { arch::syscall3(arch::SYS_DUP3, oldfd as usize, newfd as usize, 0) };
    raw as c_int
}

#[cfg(all(
    test,
    target_os = "linux",
    any(target_arch = "x86_64", target_arch = "aarch64")
))]
mod tests {
    use core::ptr;

    use nanolibc_abi::{Errno, S_IFREG};

    use super::*;
    use crate::errno::{errno, last_error};

    fn cpath(bytes: &'static [u8]) -> *const c_char {
        bytes.as_ptr() as *const c_char
    }

    #[test]
    fn open_close_then_stale_close_reports_ebadf() {
        let path = cpath(b"/tmp/nanolibc.scratch\0");
        let fd = open(path, OpenFlags::CREAT | OpenFlags::WRONLY, 0o644);
        assert!(fd >= 0);
        // Park the descriptor high so no parallel test can claim the slot
        // between the two closes.
        assert_eq!(dup2(fd, 900), 900);
        assert_eq!(close(fd), 0);
        assert_eq!(close(900), 0);
        assert_eq!(close(900), -1);
        assert_eq!(last_error(), Some(Errno::EBADF));
        unlink(path);
    }

    #[test]
    fn open_without_creat_reports_a_missing_path() {
        let fd = open(cpath(b"/definitely/not/here\0"), OpenFlags::RDONLY, 0);
        assert_eq!(fd, -1);
        assert_eq!(errno(), Errno::ENOENT.as_raw());
    }

    #[test]
    fn write_then_read_round_trips() {
        let path = cpath(b"/tmp/nanolibc.rw\0");
        let fd = open(path, OpenFlags::CREAT | OpenFlags::TRUNC | OpenFlags::WRONLY, 0o600);
        assert!(fd >= 0);
        let payload = b"rescue shell";
        let written = write(fd, payload.as_ptr() as *const c_void, payload.len());
        assert_eq!(written, payload.len() as isize);
        assert_eq!(close(fd), 0);

        let fd = open(path, OpenFlags::RDONLY, 0);
        assert!(fd >= 0);
        let mut buf = [0u8; 32];
        let got = read(fd, buf.as_mut_ptr() as *mut c_void, buf.len());
        assert_eq!(got, payload.len() as isize);
        assert_eq!(&buf[..payload.len()], payload);
        assert_eq!(close(fd), 0);
        assert_eq!(unlink(path), 0);
    }

    #[test]
    fn mknod_creates_a_regular_node() {
        let path = cpath(b"/tmp/nanolibc.node\0");
        unlink(path);
        assert_eq!(mknod(path, S_IFREG | 0o644, 0), 0);
        assert_eq!(access(path, AccessMode::F_OK), 0);
        assert_eq!(chmod(path, 0o600), 0);
        assert_eq!(unlink(path), 0);
        assert_eq!(access(path, AccessMode::F_OK), -1);
        assert_eq!(errno(), Errno::ENOENT.as_raw());
    }

    #[test]
    fn symlink_refuses_to_overwrite() {
        let link = cpath(b"/tmp/nanolibc.link\0");
        let target = cpath(b"scratch-target\0");
        unlink(link);
        assert_eq!(symlink(target, link), 0);
        assert_eq!(symlink(target, link), -1);
        assert_eq!(last_error(), Some(Errno::EEXIST));
        assert_eq!(unlink(link), 0);
    }

    #[test]
    fn bad_descriptors_are_reported_not_swallowed() {
        let mut byte = 0u8;
        assert_eq!(read(-1, &mut byte as *mut u8 as *mut c_void, 1), -1);
        assert_eq!(errno(), Errno::EBADF.as_raw());
        assert_eq!(write(-1, &byte as *const u8 as *const c_void, 1), -1);
        assert_eq!(errno(), Errno::EBADF.as_raw());
        assert_eq!(ioctl(-1, 0, ptr::null_mut()), -1);
        assert_eq!(errno(), Errno::EBADF.as_raw());
        assert_eq!(dup2(-1, 901), -1);
        assert_eq!(errno(), Errno::EBADF.as_raw());
    }
}
