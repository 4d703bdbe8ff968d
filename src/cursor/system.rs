//! Live cursor refresh through user32
//!
//! Registry writes alone only take effect at the next logon. Loading the file
//! with `LoadCursorFromFileW` and handing it to `SetSystemCursor` swaps the
//! cursor immediately; `SPI_SETCURSORS` reloads the whole scheme from the
//! registry.

use std::path::Path;

use super::SystemCursor;
use crate::error::Result;

/// The platform cursor API
pub trait SystemCursors {
    /// Install the cursor file as the given system cursor
    fn apply(&mut self, slot: SystemCursor, path: &Path) -> Result<()>;

    /// Reload every system cursor from the registry scheme
    fn reload_scheme(&mut self) -> Result<()>;
}

pub use platform::Win32Cursors;

#[cfg(windows)]
mod platform {
    use std::io;
    use std::os::windows::ffi::OsStrExt;
    use std::path::Path;
    use std::ptr;

    use windows_sys::Win32::UI::WindowsAndMessaging::{
        DestroyCursor, LoadCursorFromFileW, SetSystemCursor, SystemParametersInfoW,
        SPIF_SENDCHANGE, SPIF_UPDATEINIFILE, SPI_SETCURSORS,
    };

    use super::{SystemCursor, SystemCursors};
    use crate::error::{CursorError, Result};

    /// user32-backed cursor installer
    #[derive(Debug, Default)]
    pub struct Win32Cursors;

    impl Win32Cursors {
        pub fn new() -> Self {
            Self
        }
    }

    impl SystemCursors for Win32Cursors {
        fn apply(&mut self, slot: SystemCursor, path: &Path) -> Result<()> {
            let wide: Vec<u16> = path
                .as_os_str()
                .encode_wide()
                .chain(std::iter::once(0))
                .collect();

            let cursor = unsafe { LoadCursorFromFileW(wide.as_ptr()) };
            if cursor.is_null() {
                return Err(CursorError::LoadCursor {
                    path: path.to_path_buf(),
                    source: io::Error::last_os_error(),
                });
            }

            // SetSystemCursor takes ownership of the handle only on success
            if unsafe { SetSystemCursor(cursor, slot.id()) } == 0 {
                let source = io::Error::last_os_error();
                unsafe {
                    DestroyCursor(cursor);
                }
                return Err(CursorError::SetSystemCursor { slot, source });
            }

            log::debug!("Applied {} to {}", path.display(), slot);
            Ok(())
        }

        fn reload_scheme(&mut self) -> Result<()> {
            let ok = unsafe {
                SystemParametersInfoW(
                    SPI_SETCURSORS,
                    0,
                    ptr::null_mut(),
                    SPIF_UPDATEINIFILE | SPIF_SENDCHANGE,
                )
            };
            if ok == 0 {
                return Err(CursorError::ReloadScheme(io::Error::last_os_error()));
            }
            log::debug!("Reloaded cursor scheme");
            Ok(())
        }
    }
}

#[cfg(not(windows))]
mod platform {
    use std::path::Path;

    use super::{SystemCursor, SystemCursors};
    use crate::error::{CursorError, Result};

    /// Stand-in on platforms without user32; every call fails
    #[derive(Debug, Default)]
    pub struct Win32Cursors;

    impl Win32Cursors {
        pub fn new() -> Self {
            Self
        }
    }

    impl SystemCursors for Win32Cursors {
        fn apply(&mut self, _slot: SystemCursor, _path: &Path) -> Result<()> {
            Err(CursorError::Unsupported)
        }

        fn reload_scheme(&mut self) -> Result<()> {
            Err(CursorError::Unsupported)
        }
    }
}
