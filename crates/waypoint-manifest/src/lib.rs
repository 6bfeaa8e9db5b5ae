//! Immutable binary asset manifest for Waypoint.
//!
//! A manifest maps hashed literal request paths to content keys. It is
//! produced once per deployment, loaded once per worker, and searched in
//! logarithmic time with no per-lookup allocation.
//!
//! # Key Types
//!
//! - [`AssetManifest`] -- Loaded, validated manifest with binary-search lookup
//! - [`ManifestWriter`] -- Build-time writer: sorts entries, rejects collisions
//! - [`ManifestHeader`] -- Fixed 20-byte header (magic, version, entry count)
//! - [`ManifestError`] -- Structural and invariant errors

pub mod error;
pub mod layout;
pub mod manifest;
pub mod writer;

pub use error::{ManifestError, ManifestResult};
pub use layout::{ManifestHeader, ENTRY_SIZE, HEADER_SIZE, MAGIC, VERSION};
pub use manifest::AssetManifest;
pub use writer::ManifestWriter;

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_types::ContentKey;

    #[test]
    fn write_load_lookup_roundtrip() {
        let paths: Vec<String> = (0..100).map(|i| format!("/page-{i}.html")).collect();
        let mut writer = ManifestWriter::new();
        for path in &paths {
            writer.add(path, ContentKey::of(path.as_bytes()));
        }
        let manifest = AssetManifest::load(writer.finish().unwrap()).unwrap();

        assert_eq!(manifest.entry_count(), 100);
        for path in &paths {
            assert_eq!(
                manifest.lookup(path).unwrap(),
                Some(ContentKey::of(path.as_bytes()))
            );
        }
        assert_eq!(manifest.lookup("/page-100.html").unwrap(), None);
    }

    #[test]
    fn manifest_bad_magic() {
        let mut bytes = ManifestWriter::new().finish().unwrap();
        bytes[0..4].copy_from_slice(b"BADM");
        assert!(matches!(
            AssetManifest::load(bytes).unwrap_err(),
            ManifestError::InvalidMagic { .. }
        ));
    }

    #[test]
    fn manifest_bad_version() {
        let mut bytes = ManifestWriter::new().finish().unwrap();
        bytes[4..8].copy_from_slice(&99u32.to_be_bytes());
        assert!(matches!(
            AssetManifest::load(bytes).unwrap_err(),
            ManifestError::UnsupportedVersion(99)
        ));
    }

    #[test]
    fn manifest_too_short() {
        assert!(matches!(
            AssetManifest::load(vec![1, 2, 3]).unwrap_err(),
            ManifestError::TruncatedHeader { actual: 3 }
        ));
    }
}
