use sysinfo::System;

use super::CollectionError;

/// Memory currently in use, in bytes.
pub fn used() -> Result<u64, CollectionError> {
    if !sysinfo::IS_SUPPORTED_SYSTEM {
        return Err(CollectionError::Memory("unsupported platform".to_string()));
    }

    let mut sys = System::new();
    sys.refresh_memory();

    // sysinfo reports zeroes instead of failing when /proc/meminfo and
    // friends are unreadable.
    if sys.total_memory() == 0 {
        return Err(CollectionError::Memory(
            "total memory reported as zero".to_string(),
        ));
    }

    Ok(sys.used_memory())
}
