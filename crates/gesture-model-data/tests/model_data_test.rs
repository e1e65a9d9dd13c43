use gesture_model_data::{GESTURE_MODEL_DATA, GESTURE_MODEL_DATA_LEN, ModelBlob};

#[test]
fn test_embedded_model_is_not_empty() {
    assert!(
        !GESTURE_MODEL_DATA.is_empty(),
        "an empty model cannot be loaded by the inference engine"
    );
}

#[test]
fn test_declared_length_matches_data() {
    assert_eq!(GESTURE_MODEL_DATA_LEN, GESTURE_MODEL_DATA.len());
}

#[test]
fn test_embedded_blob_verifies() {
    let blob = ModelBlob::embedded();
    assert!(blob.verify().is_ok());
    assert_eq!(blob.len(), GESTURE_MODEL_DATA_LEN);
}

#[test]
fn test_concurrent_readers_see_same_bytes() {
    // The blob is statically allocated and never written after
    // initialization, so readers need no synchronization.
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let blob = ModelBlob::embedded();
                blob.data().iter().map(|&b| b as u64).sum::<u64>()
            })
        })
        .collect();

    let sums: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(sums.windows(2).all(|w| w[0] == w[1]));
}
