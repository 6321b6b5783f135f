use sysinfo::System;

use super::CollectionError;

/// Sample utilization of every logical core.
///
/// Blocks for [`sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`]: usage is the delta
/// between two refreshes, so a single refresh would always read zero.
pub fn sample_per_core() -> Result<Vec<f64>, CollectionError> {
    if !sysinfo::IS_SUPPORTED_SYSTEM {
        return Err(CollectionError::Cpu("unsupported platform".to_string()));
    }

    let mut sys = System::new();
    sys.refresh_cpu();
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    sys.refresh_cpu();

    let cpus = sys.cpus();
    if cpus.is_empty() {
        return Err(CollectionError::Cpu("no CPUs reported".to_string()));
    }

    Ok(cpus.iter().map(|c| f64::from(c.cpu_usage())).collect())
}

/// Label for the core at zero-based `index`, e.g. `"CPU 1: 12.34%"`.
pub fn label(index: usize, percent: f64) -> String {
    format!("CPU {}: {:.2}%", index + 1, percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_one_based_with_two_decimals() {
        assert_eq!(label(0, 12.344), "CPU 1: 12.34%");
        assert_eq!(label(1, 5.0), "CPU 2: 5.00%");
        assert_eq!(label(15, 100.0), "CPU 16: 100.00%");
    }

    #[test]
    fn test_sample_per_core_reads_every_core() {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return;
        }
        let usage = sample_per_core().unwrap();
        assert!(!usage.is_empty());
        assert!(usage.iter().all(|p| p.is_finite() && *p >= 0.0));
    }
}
