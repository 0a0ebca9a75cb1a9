//! Sockets.
//!
//! x86_64 and aarch64 carry dedicated socket syscalls. x86 and sparc64 do
//! not: every operation funnels through the `socketcall` multiplexer as a
//! sub-operation code plus a pointer to a packed argument array. Nothing
//! type-checks that array against the kernel, so each entry point packs its
//! own and the encoders take the multiplexer as a parameter — tests pin the
//! exact layout against a fake one.

use core::ffi::c_int;

use nanolibc_abi::{sockaddr, socklen_t};

use crate::arch;

#[cfg(any(test, target_arch = "x86", target_arch = "sparc64"))]
use core::ffi::{c_long, c_ulong};

#[cfg(any(test, target_arch = "x86", target_arch = "sparc64"))]
use nanolibc_abi::SocketCall;

#[cfg(any(target_arch = "x86", target_arch = "sparc64"))]
#[inline]
fn socketcall(call: SocketCall, args: *const c_ulong) -> c_long {
    unsafe { arch::syscall2(arch::SYS_SOCKETCALL, call as usize, args as usize) }
}

#[cfg(any(test, target_arch = "x86", target_arch = "sparc64"))]
fn socket_with<M>(mux: M, domain: c_int, sock_type: c_int, protocol: c_int) -> c_int
where
    M: FnOnce(SocketCall, &[c_ulong; 3]) -> c_long,
{
    let args = [
        domain as c_ulong,
        sock_type as c_ulong,
        protocol as c_ulong,
    ];
    mux(SocketCall::Socket, &args) as c_int
}

#[cfg(any(test, target_arch = "x86", target_arch = "sparc64"))]
fn bind_with<M>(mux: M, fd: c_int, addr: *const sockaddr, len: socklen_t) -> c_int
where
    M: FnOnce(SocketCall, &[c_ulong; 3]) -> c_long,
{
    let args = [fd as c_ulong, addr as c_ulong, len as c_ulong];
    mux(SocketCall::Bind, &args) as c_int
}

#[cfg(any(test, target_arch = "x86", target_arch = "sparc64"))]
fn listen_with<M>(mux: M, fd: c_int, backlog: c_int) -> c_int
where
    M: FnOnce(SocketCall, &[c_ulong; 2]) -> c_long,
{
    let args = [fd as c_ulong, backlog as c_ulong];
    mux(SocketCall::Listen, &args) as c_int
}

#[cfg(any(test, target_arch = "x86", target_arch = "sparc64"))]
fn accept_with<M>(mux: M, fd: c_int, addr: *mut sockaddr, len: *mut socklen_t) -> c_int
where
    M: FnOnce(SocketCall, &[c_ulong; 3]) -> c_long,
{
    let args = [fd as c_ulong, addr as c_ulong, len as c_ulong];
    mux(SocketCall::Accept, &args) as c_int
}

pub fn socket(domain: c_int, sock_type: c_int, protocol: c_int) -> c_int {
    #[cfg(any(target_arch = "x86", target_arch = "sparc64"))]
    let ret = socket_with(
        |call, args| socketcall(call, args.as_ptr()),
        domain,
        sock_type,
        protocol,
    );
    #[cfg(not(any(target_arch = "x86", target_arch = "sparc64")))]
    let ret = (unsafe {
        arch::syscall3(
            arch::SYS_SOCKET,
            domain as usize,
            sock_type as usize,
            protocol as usize,
        )
    }) as c_int;
    ret
}

pub fn bind(fd: c_int, addr: *const sockaddr, len: socklen_t) -> c_int {
    #[cfg(any(target_arch = "x86", target_arch = "sparc64"))]
    let ret = bind_with(|call, args| socketcall(call, args.as_ptr()), fd, addr, len);
    #[cfg(not(any(target_arch = "x86", target_arch = "sparc64")))]
    let ret = (unsafe {
        arch::syscall3(arch::SYS_BIND, fd as usize, addr as usize, len as usize)
    }) as c_int;
    ret
}

pub fn listen(fd: c_int, backlog: c_int) -> c_int {
    #[cfg(any(target_arch = "x86", target_arch = "sparc64"))]
    let ret = listen_with(|call, args| socketcall(call, args.as_ptr()), fd, backlog);
    #[cfg(not(any(target_arch = "x86", target_arch = "sparc64")))]
    let ret = (unsafe { arch::syscall2(arch::SYS_LISTEN, fd as usize, backlog as usize) })
        as c_int;
    ret
}

pub fn accept(fd: c_int, addr: *mut sockaddr, len: *mut socklen_t) -> c_int {
    #[cfg(any(target_arch = "x86", target_arch = "sparc64"))]
    let ret = accept_with(|call, args| socketcall(call, args.as_ptr()), fd, addr, len);
    #[cfg(not(any(target_arch = "x86", target_arch = "sparc64")))]
    let ret = (unsafe {
        arch::syscall3(arch::SYS_ACCEPT, fd as usize, addr as usize, len as usize)
    }) as c_int;
    ret
}

#[cfg(test)]
mod tests {
    use nanolibc_abi::{AF_UNIX, SOCK_STREAM};

    use super::*;

    #[test]
    fn socket_packs_domain_type_protocol() {
        let mut seen = None;
        let ret = socket_with(
            |call, args| {
                assert_eq!(call, SocketCall::Socket);
                seen = Some(*args);
                4
            },
            AF_UNIX,
            SOCK_STREAM,
            0,
        );
        assert_eq!(ret, 4);
        assert_eq!(seen.unwrap(), [AF_UNIX as c_ulong, SOCK_STREAM as c_ulong, 0]);
    }

    #[test]
    fn bind_packs_fd_addr_len_in_order() {
        let addr = 0x5000 as *const sockaddr;
        let mut seen = None;
        let ret = bind_with(
            |call, args| {
                assert_eq!(call, SocketCall::Bind);
                seen = Some(*args);
                0
            },
            5,
            addr,
            16,
        );
        assert_eq!(ret, 0);
        assert_eq!(seen.unwrap(), [5, 0x5000, 16]);
    }

    #[test]
    fn listen_packs_fd_backlog() {
        let mut seen = None;
        listen_with(
            |call, args| {
                assert_eq!(call, SocketCall::Listen);
                seen = Some(*args);
                0
            },
            3,
            8,
        );
        assert_eq!(seen.unwrap(), [3, 8]);
    }

    #[test]
    fn accept_packs_fd_addr_lenptr() {
        let addr = 0x6000 as *mut sockaddr;
        let mut lenvar: socklen_t = 110;
        let lenp = &mut lenvar as *mut socklen_t;
        let mut seen = None;
        accept_with(
            |call, args| {
                assert_eq!(call, SocketCall::Accept);
                seen = Some(*args);
                7
            },
            3,
            addr,
            lenp,
        );
        assert_eq!(seen.unwrap(), [3, 0x6000, lenp as c_ulong]);
    }

    #[test]
    fn encoders_propagate_the_multiplexer_result() {
        assert_eq!(listen_with(|_, _| -1, 3, 8), -1);
    }
}

#[cfg(all(
    test,
    target_os = "linux",
    any(target_arch = "x86_64", target_arch = "aarch64")
))]
mod live_tests {
    use core::ffi::c_char;

    use nanolibc_abi::{AF_UNIX, Errno, SOCK_STREAM, sa_family_t, sockaddr_un};

    use super::*;
    use crate::errno::last_error;
    use crate::fs;

    #[test]
    fn unix_stream_socket_lifecycle() {
        let fd = socket(AF_UNIX, SOCK_STREAM, 0);
        assert!(fd >= 0);

        // Abstract namespace: a leading NUL, nothing on disk to clean up.
        let mut addr = sockaddr_un {
            sun_family: AF_UNIX as sa_family_t,
            ..Default::default()
        };
        let name = b"\0nanolibc.test";
        for (i, byte) in name.iter().enumerate() {
            addr.sun_path[i] = *byte as c_char;
        }
        let len = (core::mem::size_of::<sa_family_t>() + name.len()) as socklen_t;

        assert_eq!(
            bind(fd, &addr as *const sockaddr_un as *const sockaddr, len),
            0
        );
        assert_eq!(listen(fd, 1), 0);
        assert_eq!(fs::close(fd), 0);
    }

    #[test]
    fn bind_rejects_a_bad_descriptor() {
        let addr = sockaddr_un {
            sun_family: AF_UNIX as sa_family_t,
            ..Default::default()
        };
        let r = bind(
            -1,
            &addr as *const sockaddr_un as *const sockaddr,
            core::mem::size_of::<sockaddr_un>() as socklen_t,
        );
        assert_eq!(r, -1);
        assert_eq!(last_error(), Some(Errno::EBADF));
    }
}
