//! Readiness polling.

use core::ffi::{c_int, c_long, c_uint};
use core::ptr;

use nanolibc_abi::{FdSet, Timeval};

use crate::arch;

#[cfg(target_arch = "aarch64")]
use nanolibc_abi::Timespec;

/// Block until a descriptor in one of the sets is ready or the timeout
/// elapses. The timeout is advisory — the kernel may return early or late —
/// and the remaining time is written back into `timeout`.
pub fn select(
    nfds: c_int,
    readfds: *mut FdSet,
    writefds: *mut FdSet,
    exceptfds: *mut FdSet,
    timeout: *mut Timeval,
) -> c_int {
    #[cfg(not(target_arch = "aarch64"))]
    let raw = unsafe {
        arch::syscall5(
            arch::SYS_SELECT,
            nfds as usize,
            readfds as usize,
            writefds as usize,
            exceptfds as usize,
            timeout as usize,
        )
    };
    // aarch64 only has pselect6; translate the timeout in both directions
    // and pass a null signal mask.
    #[cfg(target_arch = "aarch64")]
    let raw = unsafe {
        let mut ts = Timespec::default();
        let tsp = if timeout.is_null() {
            ptr::null_mut()
        } else {
            ts.tv_sec = (*timeout).tv_sec;
            ts.tv_nsec = (*timeout).tv_usec * 1000;
            &mut ts as *mut Timespec
        };
        let raw = arch::syscall6(
            arch::SYS_PSELECT6,
            nfds as usize,
            readfds as usize,
            writefds as usize,
            exceptfds as usize,
            tsp as usize,
            0,
        );
        if !timeout.is_null() {
            (*timeout).tv_sec = ts.tv_sec;
            (*timeout).tv_usec = ts.tv_nsec / 1000;
        }
        raw
    };
    raw as c_int
}

/// Sleep by polling nothing. Spurious early wakeups are possible, exactly
/// as with any other `select` timeout.
pub fn sleep(secs: c_uint) {
    let mut tv = Timeval {
        tv_sec: secs as c_long,
        tv_usec: 0,
    };
    select(0, ptr::null_mut(), ptr::null_mut(), ptr::null_mut(), &mut tv);
}

#[cfg(all(
    test,
    target_os = "linux",
    any(target_arch = "x86_64", target_arch = "aarch64")
))]
mod tests {
    use core::ffi::c_char;

    use nanolibc_abi::OpenFlags;

    use super::*;
    use crate::fs;

    #[test]
    fn empty_select_times_out_with_zero_ready() {
        let mut tv = Timeval {
            tv_sec: 0,
            tv_usec: 50_000,
        };
        let ready = select(
            0,
            ptr::null_mut(),
            ptr::null_mut(),
            ptr::null_mut(),
            &mut tv,
        );
        assert_eq!(ready, 0);
    }

    #[test]
    fn a_regular_file_is_immediately_readable() {
        let path = b"/tmp/nanolibc.select\0".as_ptr() as *const c_char;
        let fd = fs::open(path, OpenFlags::CREAT | OpenFlags::RDWR, 0o600);
        assert!(fd >= 0);

        let mut readable = FdSet::new();
        readable.set(fd);
        let mut tv = Timeval {
            tv_sec: 1,
            tv_usec: 0,
        };
        let ready = select(
            fd + 1,
            &mut readable,
            ptr::null_mut(),
            ptr::null_mut(),
            &mut tv,
        );
        assert_eq!(ready, 1);
        assert!(readable.is_set(fd));

        fs::close(fd);
        fs::unlink(path);
    }

    #[test]
    fn zero_sleep_returns() {
        sleep(0);
    }
}
