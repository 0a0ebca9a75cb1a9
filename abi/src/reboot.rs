//! `reboot` magic words and commands.
//!
//! The kernel refuses the call unless both magic words match.

use core::ffi::c_uint;

pub const REBOOT_MAGIC1: c_uint = 0xFEE1_DEAD;
pub const REBOOT_MAGIC2: c_uint = 0x2812_1969;

pub const REBOOT_CMD_RESTART: c_uint = 0x0123_4567;
pub const REBOOT_CMD_HALT: c_uint = 0xCDEF_0123;
pub const REBOOT_CMD_POWER_OFF: c_uint = 0x4321_FEDC;
pub const REBOOT_CMD_CAD_ON: c_uint = 0x89AB_CDEF;
pub const REBOOT_CMD_CAD_OFF: c_uint = 0;
