use core::ffi::{c_int, c_uint};

pub type pid_t = c_int;
pub type mode_t = c_uint;
pub type dev_t = c_uint;
pub type socklen_t = c_uint;
pub type sa_family_t = u16;

pub const STDIN_FILENO: c_int = 0;
pub const STDOUT_FILENO: c_int = 1;
pub const STDERR_FILENO: c_int = 2;
