use bucketlist_core::PLACEHOLDER_NAME;
use tempfile::TempDir;

use super::*;

fn store_in(dir: &TempDir) -> LocationStore {
    LocationStore::open(dir.path().join("SavedPlaces"))
}

fn london() -> Coordinate {
    Coordinate::new(51.5074, -0.1278)
}

fn paris() -> Coordinate {
    Coordinate::new(48.8566, 2.3522)
}

#[test]
fn fresh_install_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    assert!(store.locations().is_empty());
    assert!(!store.path().exists());
}

#[test]
fn corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("SavedPlaces");
    std::fs::write(&path, b"{ not json").unwrap();
    let store = LocationStore::open(&path);
    assert!(store.locations().is_empty());
}

#[test]
fn wrong_shape_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("SavedPlaces");
    std::fs::write(&path, br#"{"locations": []}"#).unwrap();
    let store = LocationStore::open(&path);
    assert!(store.locations().is_empty());
}

#[test]
fn add_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    let added = store.add(london()).unwrap();

    let reopened = store_in(&dir);
    assert_eq!(reopened.locations(), &[added.clone()]);
    let loaded = &reopened.locations()[0];
    assert_eq!(loaded.coordinate(), london());
    assert_eq!(loaded.name, PLACEHOLDER_NAME);
    assert!(loaded.description.is_empty());
}

#[test]
fn add_preserves_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    let first = store.add(london()).unwrap();
    let second = store.add(paris()).unwrap();

    let ids: Vec<_> = store_in(&dir).locations().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn update_replaces_matching_location_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    let first = store.add(london()).unwrap();
    let second = store.add(paris()).unwrap();
    let third = store.add(london()).unwrap();

    let edited = second.with_details("Louvre", "Museum");
    assert!(store.update(&second, edited.clone()));

    assert_eq!(store.locations(), &[first.clone(), edited.clone(), third.clone()]);
    assert_eq!(store_in(&dir).locations(), &[first, edited, third]);
}

#[test]
fn stale_update_is_a_no_op_without_write() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    let stale = Location::new(london());

    assert!(!store.update(&stale, stale.with_details("Ghost", "")));
    assert!(store.locations().is_empty());
    assert!(!store.path().exists(), "no write should happen");
}

#[test]
fn update_with_outdated_selection_does_not_match() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    let original = store.add(london()).unwrap();
    let renamed = original.with_details("Tower", "");
    assert!(store.update(&original, renamed.clone()));

    let before = std::fs::read(store.path()).unwrap();
    // `original` no longer value-equals anything even though the id exists.
    assert!(!store.update(&original, original.with_details("Bridge", "")));
    assert_eq!(store.locations(), &[renamed]);
    assert_eq!(std::fs::read(store.path()).unwrap(), before);
}

#[test]
fn update_matches_first_of_identical_values() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    let location = store.add(london()).unwrap();
    let duplicate = location.clone();
    store.locations.push(duplicate.clone());

    let edited = location.with_details("First", "");
    assert!(store.update(&location, edited.clone()));
    assert_eq!(store.locations(), &[edited, duplicate]);
}

#[test]
fn subscribers_see_each_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    let mut rx = store.subscribe();
    assert!(rx.borrow_and_update().is_empty());

    let added = store.add(paris()).unwrap();
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), vec![added.clone()]);

    let edited = added.with_details("Eiffel", "");
    store.update(&added, edited.clone());
    assert_eq!(*rx.borrow_and_update(), vec![edited]);
}

#[test]
fn save_failure_is_swallowed() {
    let dir = tempfile::tempdir().unwrap();
    // A directory at the target path makes the final rename fail.
    let path = dir.path().join("SavedPlaces");
    std::fs::create_dir(&path).unwrap();
    let mut store = LocationStore::open(&path);

    let added = store.add(london()).unwrap();
    assert_eq!(store.locations(), &[added]);
    assert!(matches!(store.try_save(), Err(StoreError::Io { .. })));
    assert!(!path.with_extension("tmp").exists(), "temp file left behind");
}

#[test]
fn add_rejects_non_finite_coordinate_and_keeps_saved_places() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    let first = store.add(london()).unwrap();
    let second = store.add(paris()).unwrap();

    assert!(store.add(Coordinate::new(f64::NAN, 1.0)).is_none());
    assert!(store.add(Coordinate::new(1.0, f64::INFINITY)).is_none());
    assert!(store.add(Coordinate::new(91.0, 0.0)).is_none());
    assert_eq!(store.locations(), &[first.clone(), second.clone()]);

    let reopened = store_in(&dir);
    assert_eq!(reopened.locations(), &[first, second]);
}

#[test]
fn update_rejects_non_finite_coordinate() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    let added = store.add(london()).unwrap();

    let mut broken = added.with_details("Broken", "");
    broken.latitude = f64::NAN;
    assert!(!store.update(&added, broken));
    assert_eq!(store.locations(), &[added.clone()]);
    assert_eq!(store_in(&dir).locations(), &[added]);
}
