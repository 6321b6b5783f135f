pub mod cpu;
pub mod disk;
pub mod fixture;
pub mod memory;
pub mod uptime;

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::format::{format_bytes, format_uptime};

pub use fixture::{FixtureSource, Reading};

/// A single metrics reading failed.
///
/// The variant records which reading broke so operators can tell them apart in
/// logs; clients only ever see a generic failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("failed to read CPU usage: {0}")]
    Cpu(String),
    #[error("failed to read memory usage: {0}")]
    Memory(String),
    #[error("failed to read disk usage for {}: {reason}", .mount.display())]
    Disk { mount: PathBuf, reason: String },
    #[error("failed to read uptime: {0}")]
    Uptime(String),
}

/// Source of raw host readings.
///
/// Implementations may block (the CPU sample waits between two refreshes), so
/// callers on an async runtime should run them on a blocking thread.
pub trait MetricsSource: Send + Sync {
    /// Utilization of each logical core in percent, ordered by core index.
    fn per_core_cpu_percent(&self) -> Result<Vec<f64>, CollectionError>;

    /// Memory currently in use, in bytes.
    fn memory_used(&self) -> Result<u64, CollectionError>;

    /// Space in use on the filesystem holding `mount`, in bytes.
    fn disk_used(&self, mount: &Path) -> Result<u64, CollectionError>;

    /// Host uptime in seconds.
    fn uptime_secs(&self) -> Result<u64, CollectionError>;
}

/// Reads the local host through `sysinfo`.
///
/// Holds no state: every call builds fresh `sysinfo` handles.
#[derive(Debug, Default, Clone, Copy)]
pub struct SysinfoSource;

impl MetricsSource for SysinfoSource {
    fn per_core_cpu_percent(&self) -> Result<Vec<f64>, CollectionError> {
        cpu::sample_per_core()
    }

    fn memory_used(&self) -> Result<u64, CollectionError> {
        memory::used()
    }

    fn disk_used(&self, mount: &Path) -> Result<u64, CollectionError> {
        disk::used_on(mount)
    }

    fn uptime_secs(&self) -> Result<u64, CollectionError> {
        uptime::read()
    }
}

/// Formatted metrics for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemSnapshot {
    #[serde(rename = "cpu")]
    pub cpu_details: Vec<String>,
    #[serde(rename = "memory")]
    pub memory_used: String,
    #[serde(rename = "disk")]
    pub disk_used: String,
    pub uptime: String,
}

/// Take every reading from `source` and format it into a snapshot.
///
/// Readings are taken in the order CPU, memory, disk, uptime. The first
/// failure is returned as-is and nothing after it is read.
pub fn collect_snapshot(
    source: &dyn MetricsSource,
    disk_mount: &Path,
) -> Result<SystemSnapshot, CollectionError> {
    let cpu_details = source
        .per_core_cpu_percent()?
        .iter()
        .enumerate()
        .map(|(i, percent)| cpu::label(i, *percent))
        .collect();

    let memory_used = format_bytes(source.memory_used()?);
    let disk_used = format_bytes(source.disk_used(disk_mount)?);
    let uptime = format_uptime(source.uptime_secs()?);

    Ok(SystemSnapshot {
        cpu_details,
        memory_used,
        disk_used,
        uptime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_snapshot_formats_every_reading() {
        let source = FixtureSource::healthy();
        let snapshot = collect_snapshot(&source, Path::new("/")).unwrap();

        assert_eq!(snapshot.cpu_details, vec!["CPU 1: 12.34%", "CPU 2: 5.67%"]);
        assert_eq!(snapshot.memory_used, "3.2 GB");
        assert_eq!(snapshot.disk_used, "120.5 GB");
        assert_eq!(snapshot.uptime, "2 days, 3 hours, 15 minutes, 0 seconds");
        assert_eq!(
            source.reads(),
            vec![Reading::Cpu, Reading::Memory, Reading::Disk, Reading::Uptime]
        );
    }

    #[test]
    fn test_collect_snapshot_stops_at_first_failure() {
        let source = FixtureSource::healthy().failing(Reading::Memory);
        let err = collect_snapshot(&source, Path::new("/")).unwrap_err();

        assert!(matches!(err, CollectionError::Memory(_)));
        assert_eq!(source.reads(), vec![Reading::Cpu, Reading::Memory]);
    }

    #[test]
    fn test_collect_snapshot_surfaces_each_failure() {
        for reading in [Reading::Cpu, Reading::Memory, Reading::Disk, Reading::Uptime] {
            let source = FixtureSource::healthy().failing(reading);
            let err = collect_snapshot(&source, Path::new("/")).unwrap_err();
            assert_eq!(err, FixtureSource::injected_error(reading, Path::new("/")));
        }
    }

    #[test]
    fn test_collect_snapshot_passes_disk_mount() {
        let source = FixtureSource::healthy().failing(Reading::Disk);
        let err = collect_snapshot(&source, Path::new("/srv/data")).unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to read disk usage for /srv/data: injected failure"
        );
    }

    #[test]
    fn test_collect_snapshot_no_cores() {
        let mut source = FixtureSource::healthy();
        source.cpu_percent.clear();
        let snapshot = collect_snapshot(&source, Path::new("/")).unwrap();
        assert!(snapshot.cpu_details.is_empty());
    }

    #[test]
    fn test_snapshot_json_field_names() {
        let snapshot = collect_snapshot(&FixtureSource::healthy(), Path::new("/")).unwrap();
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["cpu"][0], "CPU 1: 12.34%");
        assert_eq!(json["memory"], "3.2 GB");
        assert_eq!(json["disk"], "120.5 GB");
        assert_eq!(json["uptime"], "2 days, 3 hours, 15 minutes, 0 seconds");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}
