use std::path::Path;

use sysinfo::Disks;

use super::CollectionError;

/// Bytes in use on the filesystem that holds `path`.
///
/// The filesystem is the mounted disk with the longest mount point that is a
/// prefix of `path`, so `/` resolves to the root filesystem even when other
/// filesystems are mounted below it. Used space is `blocks - free blocks`,
/// which counts blocks reserved for root as free, the same figure `df` shows.
pub fn used_on(path: &Path) -> Result<u64, CollectionError> {
    let disks = Disks::new_with_refreshed_list();

    let (mount, disk) = containing_mount(disks.iter().map(|d| (d.mount_point(), d)), path)
        .ok_or_else(|| CollectionError::Disk {
            mount: path.to_path_buf(),
            reason: "no mounted filesystem contains this path".to_string(),
        })?;

    filesystem_used(mount, disk).map_err(|reason| CollectionError::Disk {
        mount: path.to_path_buf(),
        reason,
    })
}

/// Pick the entry whose mount point is the longest prefix of `path`.
fn containing_mount<'a, T>(
    mounts: impl IntoIterator<Item = (&'a Path, T)>,
    path: &Path,
) -> Option<(&'a Path, T)> {
    mounts
        .into_iter()
        .filter(|(mount, _)| path.starts_with(mount))
        .max_by_key(|(mount, _)| mount.components().count())
}

#[cfg(unix)]
fn filesystem_used(mount: &Path, _disk: &sysinfo::Disk) -> Result<u64, String> {
    use nix::sys::statvfs::statvfs;

    let stats = statvfs(mount).map_err(|e| format!("statvfs failed: {e}"))?;

    // f_frsize is the unit of f_blocks; some filesystems leave it zero.
    let block_size = if stats.fragment_size() > 0 {
        stats.fragment_size()
    } else {
        stats.block_size()
    };

    Ok(used_bytes(
        stats.blocks() as u64,
        stats.blocks_free() as u64,
        block_size as u64,
    ))
}

#[cfg(not(unix))]
fn filesystem_used(_mount: &Path, disk: &sysinfo::Disk) -> Result<u64, String> {
    Ok(disk.total_space().saturating_sub(disk.available_space()))
}

#[cfg(unix)]
fn used_bytes(blocks: u64, blocks_free: u64, block_size: u64) -> u64 {
    blocks.saturating_sub(blocks_free).saturating_mul(block_size)
}
