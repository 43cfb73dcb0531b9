use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Modification time of the local mirror of an asset directory, in whole
/// seconds since the Unix epoch.
///
/// The lookup deliberately targets the directory rather than the individual
/// file: every asset in a category shares one suffix, and the suffix only
/// moves when the directory's own metadata changes. The local tree is
/// assumed to mirror the remote one. Returns `None` whenever the directory
/// is missing or its metadata cannot be read — the suffix is best-effort.
pub fn dir_timestamp(webroot: &Path, dir: Option<&str>) -> Option<u64> {
    let target = match dir {
        Some(dir) => webroot.join(dir),
        None => webroot.to_path_buf(),
    };

    let modified = fs::metadata(&target).and_then(|meta| meta.modified()).ok()?;
    let elapsed = modified.duration_since(UNIX_EPOCH).ok()?;
    Some(elapsed.as_secs())
}

#[cfg(test)]
mod tests {
    use super::dir_timestamp;
    use tempfile::tempdir;

    #[test]
    fn reads_the_mtime_of_an_existing_directory() {
        let temp = tempdir().expect("failed to create temp dir");
        std::fs::create_dir(temp.path().join("img")).expect("failed to create asset dir");

        let stamp = dir_timestamp(temp.path(), Some("img"));

        assert!(stamp.is_some());
        assert!(stamp.unwrap() > 0);
    }

    #[test]
    fn falls_back_to_the_webroot_without_a_directory() {
        let temp = tempdir().expect("failed to create temp dir");

        assert!(dir_timestamp(temp.path(), None).is_some());
    }

    #[test]
    fn returns_none_for_missing_directories() {
        let temp = tempdir().expect("failed to create temp dir");

        assert!(dir_timestamp(temp.path(), Some("missing")).is_none());
    }

    #[test]
    fn returns_none_for_a_missing_webroot() {
        let temp = tempdir().expect("failed to create temp dir");
        let gone = temp.path().join("nowhere");

        assert!(dir_timestamp(&gone, Some("img")).is_none());
    }
}
