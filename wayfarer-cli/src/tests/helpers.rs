//! Test helpers that persist a small catalogue to SQLite.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use wayfarer_core::{Destination, TraitScores, test_support::write_sqlite_database};

/// A temporary SQLite catalogue of four Indian destinations.
pub(super) struct Catalogue {
    _dir: TempDir,
    path: Utf8PathBuf,
    missing: Utf8PathBuf,
}

impl Catalogue {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        let path = root.join("destinations.db");
        write_sqlite_database(path.as_std_path(), &destinations()).expect("write catalogue");
        Self {
            _dir: dir,
            path,
            missing: root.join("missing.db"),
        }
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub(super) fn missing(&self) -> &Utf8Path {
        &self.missing
    }
}

fn destinations() -> Vec<Destination> {
    vec![
        Destination::new(1, "Calangute")
            .with_city("Goa")
            .with_country("India")
            .with_description("Busy beach shacks")
            .with_traits(TraitScores::from_array([1, 5, 1, 2, 3])),
        Destination::new(2, "Spiti")
            .with_state("Himachal Pradesh")
            .with_country("India")
            .with_description("Cold desert valley")
            .with_traits(TraitScores::from_array([5, 1, 5, 3, 1])),
        Destination::new(3, "Palolem")
            .with_city("Goa")
            .with_country("India")
            .with_description("Quiet beach huts")
            .with_traits(TraitScores::from_array([1, 5, 2, 1, 2])),
        Destination::new(4, "Hampi")
            .with_state("Karnataka")
            .with_country("India")
            .with_description("Temple ruins among boulders")
            .with_traits(TraitScores::from_array([3, 2, 2, 5, 1])),
    ]
}
