//! aarch64 backend: `svc #0`, number in X8, arguments in X0-X5, result in
//! X0.
//!
//! This ABI dropped the legacy syscalls: there is no `open`, `unlink`,
//! `chmod`, `mknod`, `access`, `dup2`, `fork` or `select`. The surface maps
//! those onto `openat`/`unlinkat`/`fchmodat`/`mknodat`/`faccessat`/`dup3`/
//! `clone`/`pselect6`; `pselect6` is the one six-argument call, so this
//! backend alone carries a `syscall6`.

#![allow(dead_code)]

use core::arch::asm;
use core::ffi::c_long;

use super::ret_value;

// Syscall numbers (X8 on entry)
pub const SYS_DUP3: usize = 24;
pub const SYS_IOCTL: usize = 29;
pub const SYS_MKNODAT: usize = 33;
pub const SYS_UNLINKAT: usize = 35;
pub const SYS_SYMLINKAT: usize = 36;
pub const SYS_UMOUNT2: usize = 39;
pub const SYS_MOUNT: usize = 40;
pub const SYS_PIVOT_ROOT: usize = 41;
pub const SYS_FACCESSAT: usize = 48;
pub const SYS_FCHMODAT: usize = 53;
pub const SYS_OPENAT: usize = 56;
pub const SYS_CLOSE: usize = 57;
pub const SYS_READ: usize = 63;
pub const SYS_WRITE: usize = 64;
pub const SYS_PSELECT6: usize = 72;
pub const SYS_SYNC: usize = 81;
pub const SYS_EXIT: usize = 93;
pub const SYS_EXIT_GROUP: usize = 94;
pub const SYS_KILL: usize = 129;
pub const SYS_REBOOT: usize = 142;
pub const SYS_SETPGID: usize = 154;
pub const SYS_SETSID: usize = 157;
pub const SYS_SETHOSTNAME: usize = 161;
pub const SYS_SETDOMAINNAME: usize = 162;
pub const SYS_GETPID: usize = 172;
pub const SYS_GETPPID: usize = 173;
pub const SYS_SOCKET: usize = 198;
pub const SYS_BIND: usize = 200;
pub const SYS_LISTEN: usize = 201;
pub const SYS_ACCEPT: usize = 202;
pub const SYS_CLONE: usize = 220;
pub const SYS_EXECVE: usize = 221;
pub const SYS_SWAPOFF: usize = 225;
pub const SYS_WAIT4: usize = 260;

#[inline(always)]
pub unsafe fn syscall0(nr: usize) -> c_long {
    let raw: c_long;
    unsafe {
        asm!(
            "svc #0",
            in("x8") nr,
            lateout("x0") raw,
            options(nostack),
        );
    }
    ret_value(raw)
}

#[inline(always)]
pub unsafe fn syscall1(nr: usize, a0: usize) -> c_long {
    let raw: c_long;
    unsafe {
        asm!(
            "svc #0",
            in("x8") nr,
            in("x0") a0,
            lateout("x0") raw,
            options(nostack),
        );
    }
    ret_value(raw)
}

#[inline(always)]
pub unsafe fn syscall2(nr: usize, a0: usize, a1: usize) -> c_long {
    let raw: c_long;
    unsafe {
        asm!(
            "svc #0",
            in("x8") nr,
            in("x0") a0,
            in("x1") a1,
            lateout("x0") raw,
            options(nostack),
        );
    }
    ret_value(raw)
}

#[inline(always)]
pub unsafe fn syscall3(nr: usize, a0: usize, a1: usize, a2: usize) -> c_long {
    let raw: c_long;
    unsafe {
        asm!(
            "svc #0",
            in("x8") nr,
            in("x0") a0,
            in("x1") a1,
            in("x2") a2,
            lateout("x0") raw,
            options(nostack),
        );
    }
    ret_value(raw)
}

#[inline(always)]
pub unsafe fn syscall4(nr: usize, a0: usize, a1: usize, a2: usize, a3: usize) -> c_long {
    let raw: c_long;
    unsafe {
        asm!(
            "svc #0",
            in("x8") nr,
            in("x0") a0,
            in("x1") a1,
            in("x2") a2,
            in("x3") a3,
            lateout("x0") raw,
            options(nostack),
        );
    }
    ret_value(raw)
}

#[inline(always)]
pub unsafe fn syscall5(nr: usize, a0: usize, a1: usize, a2: usize, a3: usize, a4: usize) -> c_long {
    let raw: c_long;
    unsafe {
        asm!(
            "svc #0",
            in("x8") nr,
            in("x0") a0,
            in("x1") a1,
            in("x2") a2,
            in("x3") a3,
            in("x4") a4,
            lateout("x0") raw,
            options(nostack),
        );
    }
    ret_value(raw)
}

#[inline(always)]
pub unsafe fn syscall6(
    nr: usize,
    a0: usize,
    a1: usize,
    a2: usize,
    a3: usize,
    a4: usize,
    a5: usize,
) -> c_long {
    let raw: c_long;
    unsafe {
        asm!(
            "svc #0",
            in("x8") nr,
            in("x0") a0,
            in("x1") a1,
            in("x2") a2,
            in("x3") a3,
            in("x4") a4,
            in("x5") a5,
            lateout("x0") raw,
            options(nostack),
        );
    }
    ret_value(raw)
}
