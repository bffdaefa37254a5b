//! Linux entropy via the `getrandom(2)` system call.

use libc::{c_void, getrandom};

use std::io;

/// Fills `buf` from the kernel entropy pool.
///
/// Short reads are retried until the buffer is full; `EINTR` is retried
/// as well. Any other failure is returned to the caller.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let rest = &mut buf[filled..];
        let ret = unsafe { getrandom(rest.as_mut_ptr() as *mut c_void, rest.len(), 0) };

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err);
        }

        filled += ret as usize;
    }

    Ok(())
}
