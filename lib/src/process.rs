//! Process control.

use core::ffi::{c_char, c_int, c_void};
use core::hint::unreachable_unchecked;

use nanolibc_abi::{WaitOptions, pid_t};

use crate::arch;

/// Duplicate the calling process. Returns the child's pid in the parent and
/// 0 in the child, whatever convention the underlying trap used to say so.
pub fn fork() -> pid_t {
    #[cfg(target_arch = "sparc64")]
    let raw = unsafe { arch::fork_raw() };
    #[cfg(target_arch = "aarch64")]
    let raw = unsafe { arch::syscall5(arch::SYS_CLONE, nanolibc_abi::SIGCHLD as usize, 0, 0, 0, 0) };
    #[cfg(not(any(target_arch = "sparc64", target_arch = "aarch64")))]
    let raw = unsafe { arch::syscall0(arch::SYS_FORK) };
    raw as pid_t
}

/// Replace the process image. Does not return on success.
pub fn execve(
    path: *const c_char,
    argv: *const *const c_char,
    envp: *const *const c_char,
) -> c_int {
    (unsafe {
        arch::syscall3(
            arch::SYS_EXECVE,
            path as usize,
            argv as usize,
            envp as usize,
        )
    }) as c_int
}

/// Wait for a child to change state. `status`, when non-null, receives the
/// packed status word (decode with `WaitStatus`).
pub fn wait4(
    pid: pid_t,
    status: *mut c_int,
    options: WaitOptions,
    rusage: *mut c_void,
) -> pid_t {
    (unsafe {
        arch::syscall4(
            arch::SYS_WAIT4,
            pid as usize,
            status as usize,
            options.bits() as usize,
            rusage as usize,
        )
    }) as pid_t
}

pub fn kill(pid: pid_t, sig: c_int) -> c_int {
    (unsafe { arch::syscall2(arch::SYS_KILL, pid as usize, sig as usize) }) as c_int
}

pub fn getpid() -> pid_t {
    (unsafe { arch::syscall0(arch::SYS_GETPID) }) as pid_t
}

pub fn getppid() -> pid_t {
    (unsafe { arch::syscall0(arch::SYS_GETPPID) }) as pid_t
}

pub fn setsid() -> pid_t {
    (unsafe { arch::syscall0(arch::SYS_SETSID) }) as pid_t
}

pub fn setpgid(pid: pid_t, pgid: pid_t) -> c_int {
    (unsafe { arch::syscall2(arch::SYS_SETPGID, pid as usize, pgid as usize) }) as c_int
}

/// Terminate the whole process. There is nothing to flush or unwind in
/// this environment, so this is the kernel call and nothing else.
pub fn exit(code: c_int) -> ! {
    unsafe {
        arch::syscall1(arch::SYS_EXIT_GROUP, code as usize);
        unreachable_unchecked()
    }
}

#[cfg(all(
    test,
    target_os = "linux",
    any(target_arch = "x86_64", target_arch = "aarch64")
))]
mod tests {
    use core::ptr;

    use nanolibc_abi::{Errno, WaitStatus};

    use super::*;
    use crate::errno::{errno, last_error};

    #[test]
    fn pids_are_positive() {
        assert!(getpid() > 0);
        assert!(getppid() > 0);
    }

    #[test]
    fn kill_zero_probes_an_existing_process() {
        assert_eq!(kill(getpid(), 0), 0);
    }

    #[test]
    fn kill_reports_a_missing_process() {
        assert_eq!(kill(0x3B9A_C9FF, 0), -1);
        assert_eq!(last_error(), Some(Errno::ESRCH));
    }

    #[test]
    fn execve_reports_a_missing_binary() {
        let path = b"/definitely/not/a/binary\0".as_ptr() as *const c_char;
        let argv: [*const c_char; 2] = [b"missing\0".as_ptr() as *const c_char, ptr::null()];
        let envp: [*const c_char; 1] = [ptr::null()];
        assert_eq!(execve(path, argv.as_ptr(), envp.as_ptr()), -1);
        assert_eq!(errno(), Errno::ENOENT.as_raw());
    }

    #[test]
    fn fork_then_wait_recovers_the_child_exit_code() {
        let pid = fork();
        assert!(pid >= 0);
        if pid == 0 {
            // Child: leave immediately, without touching the harness.
            exit(7);
        }
        let mut raw_status: c_int = 0;
        let reaped = wait4(pid, &mut raw_status, WaitOptions::empty(), ptr::null_mut());
        assert_eq!(reaped, pid);
        let status = WaitStatus(raw_status);
        assert!(status.exited());
        assert!(!status.signaled());
        assert!(!status.stopped());
        assert_eq!(status.exit_status(), 7);
    }

    #[test]
    fn wait_with_no_children_reports_echild() {
        let pid = fork();
        assert!(pid >= 0);
        if pid == 0 {
            // Grandchildless child: wait4 must fail right away.
            let r = wait4(-1, ptr::null_mut(), WaitOptions::empty(), ptr::null_mut());
            let code = if r == -1 && errno() == Errno::ECHILD.as_raw() {
                0
            } else {
                1
            };
            exit(code);
        }
        let mut raw_status: c_int = 0;
        assert_eq!(
            wait4(pid, &mut raw_status, WaitOptions::empty(), ptr::null_mut()),
            pid
        );
        assert_eq!(WaitStatus(raw_status).exit_status(), 0);
    }
}
