use crate::{ModelDataError, Result};

/// Read-only view over a serialized model: a byte slice paired with the
/// length that was declared for it when its defining unit was generated.
///
/// The length is carried separately from the slice on purpose. The generator
/// writes it as a literal, so consistency with the actual extent of the data
/// is a property to verify, not a given.
#[derive(Debug, Clone, Copy)]
pub struct ModelBlob<'a> {
    data: &'a [u8],
    declared_len: usize,
}

impl ModelBlob<'static> {
    /// View over the model embedded in this crate.
    #[cfg(feature = "embedded_model")]
    pub fn embedded() -> Self {
        Self {
            data: crate::GESTURE_MODEL_DATA,
            declared_len: crate::GESTURE_MODEL_DATA_LEN,
        }
    }
}

impl<'a> ModelBlob<'a> {
    /// View over caller-provided model bytes with their declared length.
    pub fn from_parts(data: &'a [u8], declared_len: usize) -> Self {
        Self { data, declared_len }
    }

    /// The model bytes, opaque to this crate.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Actual number of bytes present.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The length declared for this blob at generation time.
    pub fn declared_len(&self) -> usize {
        self.declared_len
    }

    /// Checks the blob against its declared length.
    ///
    /// A loadable model must be non-empty, and the declared length must
    /// equal the actual extent of the data.
    pub fn verify(&self) -> Result<()> {
        if self.data.is_empty() {
            return Err(ModelDataError::EmptyModel);
        }
        if self.declared_len != self.data.len() {
            return Err(ModelDataError::LengthMismatch {
                declared: self.declared_len,
                actual: self.data.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_consistent() {
        let blob = ModelBlob::from_parts(&[1, 2, 3], 3);
        assert_eq!(blob.len(), 3);
        assert_eq!(blob.declared_len(), 3);
        assert!(blob.verify().is_ok());
    }

    #[test]
    fn test_length_mismatch_detected() {
        let blob = ModelBlob::from_parts(&[1, 2, 3], 4);
        match blob.verify() {
            Err(ModelDataError::LengthMismatch { declared, actual }) => {
                assert_eq!(declared, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("expected length mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_blob_rejected() {
        let blob = ModelBlob::from_parts(&[], 0);
        assert!(blob.is_empty());
        assert!(matches!(blob.verify(), Err(ModelDataError::EmptyModel)));
    }

    #[test]
    fn test_data_is_untouched() {
        let bytes = [0xDE, 0xAD, 0xBE, 0xEF];
        let blob = ModelBlob::from_parts(&bytes, 4);
        assert_eq!(blob.data(), &bytes);
    }
}
