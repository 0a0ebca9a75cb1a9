//! The process-wide error slot.
//!
//! One mutable integer, zero at process start. Only failing syscall entry
//! points write it; its value is the kernel's code and stays valid until
//! the next failing call. Callers must check the -1 return first.

use core::ffi::c_int;

use nanolibc_abi::Errno;

#[cfg(not(test))]
static mut ERRNO: c_int = 0;

/// Code reported by the most recent failing entry point.
#[cfg(not(test))]
#[inline]
pub fn errno() -> c_int {
    // Single thread of control in the boot context; no concurrent writers.
    unsafe { *(&raw const ERRNO) }
}

#[cfg(not(test))]
#[inline]
pub(crate) fn set_errno(code: c_int) {
    unsafe { *(&raw mut ERRNO) = code }
}

/// C-compatible view of the slot.
#[cfg(not(test))]
#[unsafe(no_mangle)]
pub extern "C" fn __errno_location() -> *mut c_int {
    &raw mut ERRNO
}

// The cargo test harness runs tests on worker threads; a per-thread slot
// keeps the single-writer-per-call invariant intact there.
#[cfg(test)]
std::thread_local! {
    static ERRNO: core::cell::Cell<c_int> = const { core::cell::Cell::new(0) };
}

#[cfg(test)]
pub fn errno() -> c_int {
    ERRNO.with(|slot| slot.get())
}

#[cfg(test)]
pub(crate) fn set_errno(code: c_int) {
    ERRNO.with(|slot| slot.set(code))
}

/// Typed view of the slot, `None` while no shared-range code is stored.
pub fn last_error() -> Option<Errno> {
    Errno::from_raw(errno())
}
