//! Architecture backends for the raw syscall invoker.
//!
//! Each backend provides the closed arity family `syscall0`..`syscall5`
//! with the same external contract: arguments go wherever the target's
//! kernel ABI puts them, the trap executes, and a failure comes back as -1
//! with the kernel's code in the error slot.
//!
//! | Aspect | x86_64 | x86 | aarch64 | sparc64 |
//! |--------|--------|-----|---------|---------|
//! | Instruction | `syscall` | `int 0x80` | `svc #0` | `t 0x6d` |
//! | Number | RAX | EAX | X8 | G1 |
//! | Arguments | RDI RSI RDX R10 R8 | EBX ECX EDX ESI EDI | X0-X4 | O0-O4 |
//! | Result | RAX | EAX | X0 | O0 |
//! | Failure | negative return | negative return | negative return | carry flag |
//!
//! sparc64 deviates twice: failures are reported through the carry flag
//! with the positive code already in O0, and `fork` returns a register pair
//! (pid in O0, parent/child discriminator in O1) that has to be folded into
//! the common "0 in the child, pid in the parent" result. The folding
//! helpers below are plain functions so both conventions are testable
//! without a live trap.

use core::ffi::{c_int, c_long, c_ulong};

use crate::errno::set_errno;

#[cfg(target_arch = "x86_64")]
mod x86_64;
#[cfg(target_arch = "x86_64")]
pub use x86_64::*;

#[cfg(target_arch = "x86")]
mod x86;
#[cfg(target_arch = "x86")]
pub use x86::*;

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "aarch64")]
pub use aarch64::*;

#[cfg(target_arch = "sparc64")]
mod sparc64;
#[cfg(target_arch = "sparc64")]
pub use sparc64::*;

/// Errno window for the negative-return convention. Raw returns below this
/// magnitude are real values (e.g. addresses), not failures.
const MAX_ERRNO: c_long = 4095;

/// Fold a raw return under the default convention: a small negative value
/// is a failure whose magnitude is the kernel code.
#[allow(dead_code)]
#[inline(always)]
pub(crate) fn ret_value(raw: c_long) -> c_long {
    if (-MAX_ERRNO..0).contains(&raw) {
        set_errno(-raw as c_int);
        -1
    } else {
        raw
    }
}

/// Fold a carry-flag return: the carry reports failure and the result
/// register already holds the positive kernel code.
#[allow(dead_code)]
#[inline(always)]
pub(crate) fn carry_value(carry: bool, val: c_ulong) -> c_long {
    if carry {
        set_errno(val as c_int);
        -1
    } else {
        val as c_long
    }
}

/// Fold fork's carry-convention register pair. The discriminator is 0 in
/// the parent and 1 in the child, so `pid & (flag - 1)` keeps the pid on
/// the parent side and collapses to 0 on the child side.
#[allow(dead_code)]
#[inline(always)]
pub(crate) fn fork_value(carry: bool, pid: c_ulong, flag: c_ulong) -> c_long {
    if carry {
        set_errno(pid as c_int);
        -1
    } else {
        (pid & flag.wrapping_sub(1)) as c_long
    }
}

#[cfg(test)]
mod tests {
    use nanolibc_abi::Errno;

    use super::*;
    use crate::errno::errno;

    #[test]
    fn success_passes_the_value_through_and_leaves_errno() {
        set_errno(7);
        assert_eq!(ret_value(42), 42);
        assert_eq!(ret_value(0), 0);
        assert_eq!(errno(), 7);
    }

    #[test]
    fn failure_returns_minus_one_and_stores_the_code() {
        set_errno(0);
        assert_eq!(ret_value(-(Errno::EBADF.as_raw() as c_long)), -1);
        assert_eq!(errno(), Errno::EBADF.as_raw());
    }

    #[test]
    fn values_below_the_errno_window_are_not_failures() {
        set_errno(0);
        assert_eq!(ret_value(-0x1_0000), -0x1_0000);
        assert_eq!(errno(), 0);
    }

    #[test]
    fn carry_convention_matches_the_default_contract() {
        set_errno(0);
        assert_eq!(carry_value(false, 42), 42);
        assert_eq!(errno(), 0);
        assert_eq!(carry_value(true, Errno::EBADF.as_raw() as c_ulong), -1);
        assert_eq!(errno(), Errno::EBADF.as_raw());
    }

    #[test]
    fn fork_folds_the_same_way_under_both_conventions() {
        // Default convention: the raw return is already 0 or the pid.
        assert_eq!(ret_value(123), 123);
        assert_eq!(ret_value(0), 0);
        // Carry convention: pid arrives in the result register on both
        // sides, the discriminator selects which side this is.
        assert_eq!(fork_value(false, 123, 0), 123);
        assert_eq!(fork_value(false, 123, 1), 0);
    }

    #[test]
    fn fork_carry_failure_reports_like_any_other() {
        set_errno(0);
        assert_eq!(fork_value(true, Errno::EAGAIN.as_raw() as c_ulong, 0), -1);
        assert_eq!(errno(), Errno::EAGAIN.as_raw());
    }
}
