//! Formatted output over the `write` entry point.
//!
//! There is no buffering layer: every formatted fragment goes straight to
//! the descriptor, which is what a single-threaded rescue tool wants when
//! the next line might be its last.

use core::ffi::{c_int, c_void};
use core::fmt;

use nanolibc_abi::{STDERR_FILENO, STDOUT_FILENO};

use crate::fs;

/// Descriptor-backed sink for `core::fmt`.
pub struct FdWriter(pub c_int);

impl fmt::Write for FdWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut bytes = s.as_bytes();
        while !bytes.is_empty() {
            let n = fs::write(self.0, bytes.as_ptr() as *const c_void, bytes.len());
            if n <= 0 {
                return Err(fmt::Error);
            }
            bytes = &bytes[n as usize..];
        }
        Ok(())
    }
}

pub fn print_args(args: fmt::Arguments<'_>) {
    let _ = fmt::write(&mut FdWriter(STDOUT_FILENO), args);
}

pub fn eprint_args(args: fmt::Arguments<'_>) {
    let _ = fmt::write(&mut FdWriter(STDERR_FILENO), args);
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::stdio::print_args(::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! println {
    () => {
        $crate::stdio::print_args(::core::format_args!("\n"))
    };
    ($($arg:tt)*) => {{
        $crate::stdio::print_args(::core::format_args!($($arg)*));
        $crate::stdio::print_args(::core::format_args!("\n"));
    }};
}

#[macro_export]
macro_rules! eprint {
    ($($arg:tt)*) => {
        $crate::stdio::eprint_args(::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! eprintln {
    () => {
        $crate::stdio::eprint_args(::core::format_args!("\n"))
    };
    ($($arg:tt)*) => {{
        $crate::stdio::eprint_args(::core::format_args!($($arg)*));
        $crate::stdio::eprint_args(::core::format_args!("\n"));
    }};
}

/// Decimal print, kept for C callers of the traditional interface.
#[cfg_attr(not(test), unsafe(no_mangle))]
pub extern "C" fn printint(value: c_int) {
    crate::print!("{}", value);
}

#[cfg(all(
    test,
    target_os = "linux",
    any(target_arch = "x86_64", target_arch = "aarch64")
))]
mod tests {
    use core::ffi::c_char;
    use core::fmt::Write;

    use nanolibc_abi::OpenFlags;

    use super::*;

    #[test]
    fn fd_writer_round_trips_through_the_kernel() {
        let path = b"/tmp/nanolibc.stdio\0".as_ptr() as *const c_char;
        let fd = fs::open(
            path,
            OpenFlags::CREAT | OpenFlags::TRUNC | OpenFlags::WRONLY,
            0o600,
        );
        assert!(fd >= 0);
        let mut sink = FdWriter(fd);
        write!(sink, "pid={} magic={:#x}", 42, 0xC0ED_0000u32).unwrap();
        assert_eq!(fs::close(fd), 0);

        let fd = fs::open(path, OpenFlags::RDONLY, 0);
        assert!(fd >= 0);
        let mut buf = [0u8; 64];
        let n = fs::read(fd, buf.as_mut_ptr() as *mut c_void, buf.len());
        assert!(n > 0);
        assert_eq!(&buf[..n as usize], b"pid=42 magic=0xc0ed0000");
        assert_eq!(fs::close(fd), 0);
        assert_eq!(fs::unlink(path), 0);
    }

    #[test]
    fn fd_writer_reports_failure_on_a_dead_descriptor() {
        let mut sink = FdWriter(-1);
        assert!(write!(sink, "lost").is_err());
    }
}
