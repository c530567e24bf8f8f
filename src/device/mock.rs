//! Mock backlight implementation for unit testing.
//!
//! This module provides an in-memory backlight that records all operations
//! and supports assertions for testing.
//!
//! # Example
//!
//! ```rust
//! use bctl::device::mock::{MockBacklight, Operation};
//! use bctl::device::Backlight;
//!
//! let mock = MockBacklight::new("acpi_video0", 100, 50);
//! mock.set_brightness(70).unwrap();
//!
//! mock.assert_operations(&[Operation::SetBrightness { value: 70 }]);
//! assert_eq!(mock.current(), 70);
//! ```

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use tracing::{debug, trace};

use super::{Backlight, BACKLIGHT_CLASS_DIR, BRIGHTNESS_ENTRY};
use crate::error::{BctlError, Result};

/// Recorded operation for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ReadMaxBrightness,
    ReadBrightness,
    SetBrightness { value: u32 },
}

/// Mock backlight for testing without sysfs.
pub struct MockBacklight {
    name: String,
    path: PathBuf,
    max: u32,
    current: AtomicU32,
    operation_log: Mutex<Vec<Operation>>,
    write_error: Mutex<Option<BctlError>>,
}

impl MockBacklight {
    /// Create a mock device with the given scale and starting level.
    #[must_use]
    pub fn new(name: &str, max: u32, current: u32) -> Self {
        debug!(name, max, current, "Creating mock backlight");
        Self {
            name: name.to_string(),
            path: Path::new(BACKLIGHT_CLASS_DIR).join(name),
            max,
            current: AtomicU32::new(current),
            operation_log: Mutex::new(Vec::new()),
            write_error: Mutex::new(None),
        }
    }

    /// Typical ACPI backlight with a 0-100 scale.
    #[must_use]
    pub fn acpi(current: u32) -> Self {
        Self::new("acpi_video0", 100, current)
    }

    /// A device that only supports on/off.
    #[must_use]
    pub fn binary() -> Self {
        Self::new("led_toggle", 1, 1)
    }

    /// Make the next write fail with `error`.
    pub fn inject_write_error(&self, error: BctlError) {
        *self.write_error.lock().unwrap() = Some(error);
    }

    /// Make the next write fail as if the entry were not group-writable.
    pub fn deny_writes(&self) {
        self.inject_write_error(BctlError::PermissionDenied {
            path: self.path.join(BRIGHTNESS_ENTRY),
        });
    }

    /// Current brightness held by the mock.
    #[must_use]
    pub fn current(&self) -> u32 {
        self.current.load(Ordering::SeqCst)
    }

    // === Assertions ===

    /// Get all recorded operations.
    #[must_use]
    pub fn operations(&self) -> Vec<Operation> {
        self.operation_log.lock().unwrap().clone()
    }

    /// Assert specific operations were performed.
    ///
    /// # Panics
    ///
    /// Panics if the operations don't match.
    pub fn assert_operations(&self, expected: &[Operation]) {
        let actual = self.operations();
        assert_eq!(
            actual, expected,
            "Operation mismatch.\nExpected: {expected:#?}\nActual: {actual:#?}",
        );
    }

    /// Assert no write reached the device.
    ///
    /// # Panics
    ///
    /// Panics if a `SetBrightness` operation was recorded.
    pub fn assert_not_written(&self) {
        let ops = self.operations();
        assert!(
            !ops.iter()
                .any(|op| matches!(op, Operation::SetBrightness { .. })),
            "Expected no writes, but found: {ops:#?}",
        );
    }

    fn record(&self, op: Operation) {
        trace!(?op, "Recording mock operation");
        self.operation_log.lock().unwrap().push(op);
    }
}

impl Backlight for MockBacklight {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn max_brightness(&self) -> Result<u32> {
        self.record(Operation::ReadMaxBrightness);
        Ok(self.max)
    }

    fn brightness(&self) -> Result<u32> {
        self.record(Operation::ReadBrightness);
        Ok(self.current())
    }

    fn set_brightness(&self, value: u32) -> Result<()> {
        self.record(Operation::SetBrightness { value });
        if let Some(err) = self.write_error.lock().unwrap().take() {
            return Err(err);
        }
        self.current.store(value, Ordering::SeqCst);
        Ok(())
    }
}
