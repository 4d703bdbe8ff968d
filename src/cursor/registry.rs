//! Registry access for the per-user cursor scheme
//!
//! Windows keeps the active scheme under
//! `HKEY_CURRENT_USER\Control Panel\Cursors`, one string value per slot.

use crate::error::Result;

/// Key-value view of the cursor scheme key
pub trait CursorRegistry {
    /// All value names under the key, in registry order
    fn value_names(&self) -> Result<Vec<String>>;

    /// A string value, `None` if it is missing or not a string
    fn get_value(&self, name: &str) -> Result<Option<String>>;

    /// Write a string value (REG_EXPAND_SZ)
    fn set_value(&mut self, name: &str, value: &str) -> Result<()>;

    /// Remove a value; removing a missing value is not an error
    fn delete_value(&mut self, name: &str) -> Result<()>;
}

pub use platform::CurrentUserRegistry;

#[cfg(windows)]
mod platform {
    use std::io;
    use std::ptr;

    use windows_sys::Win32::Foundation::{ERROR_FILE_NOT_FOUND, ERROR_NO_MORE_ITEMS, ERROR_SUCCESS};
    use windows_sys::Win32::System::Registry::{
        RegCloseKey, RegDeleteValueW, RegEnumValueW, RegOpenKeyExW, RegQueryValueExW, RegSetValueExW, HKEY,
        HKEY_CURRENT_USER, KEY_QUERY_VALUE, KEY_SET_VALUE, REG_EXPAND_SZ, REG_SZ,
    };

    use super::CursorRegistry;
    use crate::error::{CursorError, Result};

    /// Longest value name the registry allows, in UTF-16 units
    const MAX_VALUE_NAME: usize = 16_383;

    fn wide(s: &str) -> Vec<u16> {
        s.encode_utf16().chain(std::iter::once(0)).collect()
    }

    fn os_error(code: u32) -> io::Error {
        io::Error::from_raw_os_error(code as i32)
    }

    /// An open `HKEY_CURRENT_USER` subkey, closed on drop
    pub struct CurrentUserRegistry {
        key: HKEY,
    }

    impl CurrentUserRegistry {
        /// Open a subkey of HKEY_CURRENT_USER for reading and writing
        pub fn open(subkey: &str) -> Result<Self> {
            let name = wide(subkey);
            let mut key: HKEY = ptr::null_mut();
            let status = unsafe {
                RegOpenKeyExW(
                    HKEY_CURRENT_USER,
                    name.as_ptr(),
                    0,
                    KEY_QUERY_VALUE | KEY_SET_VALUE,
                    &mut key,
                )
            };
            if status != ERROR_SUCCESS {
                return Err(CursorError::OpenKey {
                    key: subkey.to_string(),
                    source: os_error(status),
                });
            }
            log::debug!("Opened HKCU\\{}", subkey);
            Ok(Self { key })
        }
    }

    impl Drop for CurrentUserRegistry {
        fn drop(&mut self) {
            unsafe {
                RegCloseKey(self.key);
            }
        }
    }

    impl CursorRegistry for CurrentUserRegistry {
        fn value_names(&self) -> Result<Vec<String>> {
            let mut names = Vec::new();
            let mut buf = vec![0u16; MAX_VALUE_NAME + 1];

            for index in 0u32.. {
                let mut len = buf.len() as u32;
                let status = unsafe {
                    RegEnumValueW(
                        self.key,
                        index,
                        buf.as_mut_ptr(),
                        &mut len,
                        ptr::null(),
                        ptr::null_mut(),
                        ptr::null_mut(),
                        ptr::null_mut(),
                    )
                };
                if status == ERROR_NO_MORE_ITEMS {
                    break;
                }
                if status != ERROR_SUCCESS {
                    return Err(CursorError::Registry {
                        op: "enumerate",
                        name: format!("#{}", index),
                        source: os_error(status),
                    });
                }
                names.push(String::from_utf16_lossy(&buf[..len as usize]));
            }

            Ok(names)
        }

        fn get_value(&self, name: &str) -> Result<Option<String>> {
            let wide_name = wide(name);
            let registry_err = |status: u32| CursorError::Registry {
                op: "read",
                name: name.to_string(),
                source: os_error(status),
            };

            // First call sizes the buffer, second reads it
            let mut kind = 0u32;
            let mut size = 0u32;
            let status = unsafe {
                RegQueryValueExW(
                    self.key,
                    wide_name.as_ptr(),
                    ptr::null(),
                    &mut kind,
                    ptr::null_mut(),
                    &mut size,
                )
            };
            if status == ERROR_FILE_NOT_FOUND {
                return Ok(None);
            }
            if status != ERROR_SUCCESS {
                return Err(registry_err(status));
            }
            if kind != REG_SZ && kind != REG_EXPAND_SZ {
                return Ok(None);
            }

            let mut data = vec![0u16; (size as usize).div_ceil(2)];
            let mut size = (data.len() * 2) as u32;
            let status = unsafe {
                RegQueryValueExW(
                    self.key,
                    wide_name.as_ptr(),
                    ptr::null(),
                    &mut kind,
                    data.as_mut_ptr().cast(),
                    &mut size,
                )
            };
            if status != ERROR_SUCCESS {
                return Err(registry_err(status));
            }

            data.truncate(size as usize / 2);
            while data.last() == Some(&0) {
                data.pop();
            }
            Ok(Some(String::from_utf16_lossy(&data)))
        }

        fn set_value(&mut self, name: &str, value: &str) -> Result<()> {
            let wide_name = wide(name);
            let data = wide(value);
            let status = unsafe {
                RegSetValueExW(
                    self.key,
                    wide_name.as_ptr(),
                    0,
                    REG_EXPAND_SZ,
                    data.as_ptr().cast(),
                    (data.len() * 2) as u32,
                )
            };
            if status != ERROR_SUCCESS {
                return Err(CursorError::Registry {
                    op: "write",
                    name: name.to_string(),
                    source: os_error(status),
                });
            }
            log::debug!("Set {} = {:?}", name, value);
            Ok(())
        }

        fn delete_value(&mut self, name: &str) -> Result<()> {
            let wide_name = wide(name);
            let status = unsafe { RegDeleteValueW(self.key, wide_name.as_ptr()) };
            if status != ERROR_SUCCESS && status != ERROR_FILE_NOT_FOUND {
                return Err(CursorError::Registry {
                    op: "delete",
                    name: name.to_string(),
                    source: os_error(status),
                });
            }
            log::debug!("Deleted {}", name);
            Ok(())
        }
    }
}

#[cfg(not(windows))]
mod platform {
    use super::CursorRegistry;
    use crate::error::{CursorError, Result};

    /// Stand-in on platforms without a registry; every call fails
    pub struct CurrentUserRegistry {
        _private: (),
    }

    impl CurrentUserRegistry {
        pub fn open(_subkey: &str) -> Result<Self> {
            Err(CursorError::Unsupported)
        }
    }

    impl CursorRegistry for CurrentUserRegistry {
        fn value_names(&self) -> Result<Vec<String>> {
            Err(CursorError::Unsupported)
        }

        fn get_value(&self, _name: &str) -> Result<Option<String>> {
            Err(CursorError::Unsupported)
        }

        fn set_value(&mut self, _name: &str, _value: &str) -> Result<()> {
            Err(CursorError::Unsupported)
        }

        fn delete_value(&mut self, _name: &str) -> Result<()> {
            Err(CursorError::Unsupported)
        }
    }

}
