use std::path::Path;
use std::sync::{Mutex, PoisonError};

use super::{CollectionError, MetricsSource};

/// One of the four readings a [`MetricsSource`] provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    Cpu,
    Memory,
    Disk,
    Uptime,
}

/// A [`MetricsSource`] returning fixed values, with optional failure injection.
///
/// Used by tests to drive the collector and the HTTP layer without touching
/// real hardware. Every reading taken is recorded and can be inspected with
/// [`FixtureSource::reads`].
#[derive(Debug)]
pub struct FixtureSource {
    pub cpu_percent: Vec<f64>,
    pub memory_used: u64,
    pub disk_used: u64,
    pub uptime_secs: u64,
    failing: Option<Reading>,
    reads: Mutex<Vec<Reading>>,
}

impl FixtureSource {
    /// Two cores, 3.2 GB memory, 120.5 GB disk, a little over two days up.
    pub fn healthy() -> Self {
        Self {
            cpu_percent: vec![12.34, 5.67],
            memory_used: 3_435_973_837,
            disk_used: 129_385_889_792,
            uptime_secs: 2 * 86_400 + 3 * 3_600 + 15 * 60,
            failing: None,
            reads: Mutex::new(Vec::new()),
        }
    }

    /// Make `reading` fail with [`FixtureSource::injected_error`].
    pub fn failing(mut self, reading: Reading) -> Self {
        self.failing = Some(reading);
        self
    }

    /// The error returned for an injected failure of `reading`.
    pub fn injected_error(reading: Reading, mount: &Path) -> CollectionError {
        let reason = "injected failure".to_string();
        match reading {
            Reading::Cpu => CollectionError::Cpu(reason),
            Reading::Memory => CollectionError::Memory(reason),
            Reading::Disk => CollectionError::Disk {
                mount: mount.to_path_buf(),
                reason,
            },
            Reading::Uptime => CollectionError::Uptime(reason),
        }
    }

    /// Readings taken so far, in call order.
    pub fn reads(&self) -> Vec<Reading> {
        self.reads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .to_vec()
    }

    fn take<T>(&self, reading: Reading, mount: &Path, value: T) -> Result<T, CollectionError> {
        self.reads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(reading);
        if self.failing == Some(reading) {
            return Err(Self::injected_error(reading, mount));
        }
        Ok(value)
    }
}

impl MetricsSource for FixtureSource {
    fn per_core_cpu_percent(&self) -> Result<Vec<f64>, CollectionError> {
        self.take(Reading::Cpu, Path::new("/"), self.cpu_percent.clone())
    }

    fn memory_used(&self) -> Result<u64, CollectionError> {
        self.take(Reading::Memory, Path::new("/"), self.memory_used)
    }

    fn disk_used(&self, mount: &Path) -> Result<u64, CollectionError> {
        self.take(Reading::Disk, mount, self.disk_used)
    }

    fn uptime_secs(&self) -> Result<u64, CollectionError> {
        self.take(Reading::Uptime, Path::new("/"), self.uptime_secs)
    }
}
