//! Filesystem tree manipulation.
//!
//! Thin pass-throughs; policy (what to mount where, retry on busy) belongs
//! to the caller. The one-argument `umount` maps to the legacy syscall
//! where the target still carries it and to `umount2(..., 0)` elsewhere.

use core::ffi::{c_char, c_int, c_void};

use nanolibc_abi::{MountFlags, UmountFlags};

use crate::arch;

pub fn mount(
    source: *const c_char,
    target: *const c_char,
    fstype: *const c_char,
    flags: MountFlags,
    data: *const c_void,
) -> c_int {
    (unsafe {
        arch::syscall5(
            arch::SYS_MOUNT,
            source as usize,
            target as usize,
            fstype as usize,
            flags.bits() as usize,
            data as usize,
        )
    }) as c_int
}

pub fn umount(target: *const c_char) -> c_int {
    #[cfg(any(target_arch = "x86", target_arch = "sparc64"))]
    let raw = unsafe { arch::syscall1(arch::SYS_UMOUNT, target as usize) };
    #[cfg(not(any(target_arch = "x86", target_arch = "sparc64")))]
    let raw = unsafe { arch::syscall2(arch::SYS_UMOUNT2, target as usize, 0) };
    raw as c_int
}

pub fn umount2(target: *const c_char, flags: UmountFlags) -> c_int {
    (unsafe { arch::syscall2(arch::SYS_UMOUNT2, target as usize, flags.bits() as usize) })
        as c_int
}

pub fn pivot_root(new_root: *const c_char, put_old: *const c_char) -> c_int {
    (unsafe {
        arch::syscall2(
            arch::SYS_PIVOT_ROOT,
            new_root as usize,
            put_old as usize,
        )
    }) as c_int
}

pub fn swapoff(path: *const c_char) -> c_int {
    (unsafe { arch::syscall1(arch::SYS_SWAPOFF, path as usize) }) as c_int
}

#[cfg(all(
    test,
    target_os = "linux",
    any(target_arch = "x86_64", target_arch = "aarch64")
))]
mod tests {
    use core::ptr;

    use super::*;
    use crate::errno::errno;

    fn cpath(bytes: &'static [u8]) -> *const c_char {
        bytes.as_ptr() as *const c_char
    }

    // The exact code depends on privileges (EPERM unprivileged, ENOENT or
    // EINVAL as root), so these only pin the -1/errno contract.

    #[test]
    fn mount_on_a_missing_target_fails() {
        let r = mount(
            cpath(b"none\0"),
            cpath(b"/definitely/not/mounted\0"),
            cpath(b"tmpfs\0"),
            MountFlags::MGC_VAL | MountFlags::RDONLY,
            ptr::null(),
        );
        assert_eq!(r, -1);
        assert!(errno() > 0);
    }

    #[test]
    fn umount_of_a_non_mount_point_fails() {
        assert_eq!(umount(cpath(b"/definitely/not/mounted\0")), -1);
        assert!(errno() > 0);
        assert_eq!(
            umount2(cpath(b"/definitely/not/mounted\0"), UmountFlags::DETACH),
            -1
        );
        assert!(errno() > 0);
    }

    #[test]
    fn pivot_root_outside_a_fresh_namespace_fails() {
        assert_eq!(pivot_root(cpath(b"/\0"), cpath(b"/\0")), -1);
        assert!(errno() > 0);
    }

    #[test]
    fn swapoff_of_a_missing_device_fails() {
        assert_eq!(swapoff(cpath(b"/definitely/not/swap\0")), -1);
        assert!(errno() > 0);
    }
}
