use sysinfo::System;

use super::CollectionError;

/// Host uptime in seconds.
pub fn read() -> Result<u64, CollectionError> {
    if !sysinfo::IS_SUPPORTED_SYSTEM {
        return Err(CollectionError::Uptime("unsupported platform".to_string()));
    }

    checked(System::uptime())
}

// sysinfo reports 0 when it cannot read the boot time.
fn checked(secs: u64) -> Result<u64, CollectionError> {
    match secs {
        0 => Err(CollectionError::Uptime("uptime not available".to_string())),
        secs => Ok(secs),
    }
}
