//! Device abstraction layer for backlight devices.
//!
//! This module provides a trait-based abstraction over the real sysfs
//! backlight class and a mock implementation, enabling testability without
//! touching `/sys`.

pub mod mock;
mod sysfs;

pub use sysfs::{SysfsBacklight, SysfsEntry};

use std::path::{Component, Path};

use crate::error::{BctlError, Result};

/// Device used when `--dev` is not given.
pub const DEFAULT_DEVICE: &str = "acpi_video0";

/// Directory holding one subdirectory per backlight device.
pub const BACKLIGHT_CLASS_DIR: &str = "/sys/class/backlight";

/// Name of the read-only maximum value entry.
pub const MAX_BRIGHTNESS_ENTRY: &str = "max_brightness";

/// Name of the read-write current value entry.
pub const BRIGHTNESS_ENTRY: &str = "brightness";

/// Core backlight operations.
///
/// Implemented by [`SysfsBacklight`] for real hardware and by
/// [`mock::MockBacklight`] in tests.
pub trait Backlight {
    /// Bare device name, e.g. `intel_backlight`.
    fn name(&self) -> &str;

    /// Directory the device's entries live in.
    fn path(&self) -> &Path;

    /// Upper bound of the device's brightness scale.
    fn max_brightness(&self) -> Result<u32>;

    /// Current brightness level.
    fn brightness(&self) -> Result<u32>;

    /// Write a new brightness level.
    ///
    /// # Errors
    ///
    /// Returns [`BctlError::PermissionDenied`] when the entry is not writable
    /// by the caller and [`BctlError::Io`] for any other failure.
    fn set_brightness(&self, value: u32) -> Result<()>;
}

/// Check that `name` is a single plain path segment.
///
/// Absolute paths, names containing a separator, `.`, `..` and the empty
/// string are rejected so the device cannot resolve outside the backlight
/// class directory.
pub fn validate_device_name(name: &str) -> Result<()> {
    let path = Path::new(name);
    let mut components = path.components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if path.is_absolute() || name.contains('/') || !single_normal {
        return Err(BctlError::InvalidDeviceName {
            name: name.to_string(),
        });
    }
    Ok(())
}
