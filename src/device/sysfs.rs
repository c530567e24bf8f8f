//! Real backlight device backed by the sysfs backlight class.
//!
//! Each device directory exposes `max_brightness` and `brightness`, both
//! holding a plain decimal integer.

use std::fmt::Display;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, trace};

use super::{validate_device_name, Backlight, BRIGHTNESS_ENTRY, MAX_BRIGHTNESS_ENTRY};
use crate::error::{BctlError, Result};

/// A single sysfs attribute holding a value of type `T`.
///
/// Reading trims surrounding whitespace and parses with `FromStr`; writing
/// formats with `Display`.
#[derive(Debug, Clone)]
pub struct SysfsEntry<T> {
    path: PathBuf,
    _value: PhantomData<T>,
}

impl<T> SysfsEntry<T>
where
    T: FromStr + Display,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _value: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the entry.
    ///
    /// Content that does not parse is reported as `InvalidData`.
    pub fn read(&self) -> io::Result<T> {
        let raw = fs::read_to_string(&self.path)?;
        let text = raw.trim();
        trace!(path = %self.path.display(), value = text, "Read sysfs entry");
        text.parse().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("expected a decimal integer, found {text:?}"),
            )
        })
    }

    pub fn write(&self, value: &T) -> io::Result<()> {
        trace!(path = %self.path.display(), %value, "Writing sysfs entry");
        fs::write(&self.path, value.to_string())
    }
}

/// Backlight device under a backlight class directory.
#[derive(Debug, Clone)]
pub struct SysfsBacklight {
    name: String,
    dir: PathBuf,
    max: SysfsEntry<u32>,
    current: SysfsEntry<u32>,
}

impl SysfsBacklight {
    /// Open device `name` under `class_dir`.
    ///
    /// The name is validated before any filesystem access.
    pub fn open(class_dir: &Path, name: &str) -> Result<Self> {
        validate_device_name(name)?;

        let dir = class_dir.join(name);
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "Backlight directory missing");
            return Err(BctlError::DeviceNotFound {
                name: name.to_string(),
            });
        }

        debug!(dir = %dir.display(), "Opened backlight device");
        Ok(Self {
            name: name.to_string(),
            max: SysfsEntry::new(dir.join(MAX_BRIGHTNESS_ENTRY)),
            current: SysfsEntry::new(dir.join(BRIGHTNESS_ENTRY)),
            dir,
        })
    }

    fn read_error(&self, path: &Path, err: io::Error) -> BctlError {
        if err.kind() == io::ErrorKind::NotFound {
            debug!(path = %path.display(), "Backlight entry missing");
            BctlError::DeviceNotFound {
                name: self.name.clone(),
            }
        } else {
            BctlError::Io {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Classify a failed write to a brightness entry.
fn write_error(path: &Path, err: io::Error) -> BctlError {
    if err.kind() == io::ErrorKind::PermissionDenied {
        BctlError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        BctlError::Io {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

impl Backlight for SysfsBacklight {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &Path {
        &self.dir
    }

    fn max_brightness(&self) -> Result<u32> {
        self.max
            .read()
            .map_err(|e| self.read_error(self.max.path(), e))
    }

    fn brightness(&self) -> Result<u32> {
        self.current
            .read()
            .map_err(|e| self.read_error(self.current.path(), e))
    }

    fn set_brightness(&self, value: u32) -> Result<()> {
        self.current
            .write(&value)
            .map_err(|e| write_error(self.current.path(), e))?;
        debug!(device = %self.name, value, "Brightness written");
        Ok(())
    }
}
