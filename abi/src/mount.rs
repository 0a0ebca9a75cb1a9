//! Mount flags.

use core::ffi::{c_int, c_ulong};

use bitflags::bitflags;

bitflags! {
    /// Flag word passed to `mount`.
    ///
    /// `MGC_VAL` is the historic mount-options magic; old kernels reject a
    /// flag word whose high half does not carry it. It is not a behavior
    /// bit, so it is folded into the same word the way the kernel sees it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MountFlags: c_ulong {
        /// Mount read-only
        const RDONLY = 1;
        /// Ignore suid and sgid bits
        const NOSUID = 2;
        /// Disallow access to device special files
        const NODEV = 4;
        /// Disallow program execution
        const NOEXEC = 8;
        /// Writes are synced at once
        const SYNCHRONOUS = 16;
        /// Alter flags of a mounted filesystem
        const REMOUNT = 32;
        /// Bind directory at different place
        const BIND = 4096;
        const MGC_VAL = 0xC0ED_0000;
        const MGC_MSK = 0xFFFF_0000;
    }
}

bitflags! {
    /// Flag word passed to `umount2`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct UmountFlags: c_int {
        const FORCE = 1;
        const DETACH = 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_abi_words_are_bit_exact() {
        assert_eq!(MountFlags::RDONLY.bits(), 1);
        assert_eq!(MountFlags::MGC_VAL.bits(), 0xC0ED_0000);
        assert_eq!(
            (MountFlags::MGC_VAL | MountFlags::RDONLY).bits(),
            0xC0ED_0001
        );
    }

    #[test]
    fn magic_survives_the_mask() {
        let word = MountFlags::MGC_VAL | MountFlags::RDONLY | MountFlags::NOEXEC;
        assert_eq!(word & MountFlags::MGC_MSK, MountFlags::MGC_VAL);
    }
}
