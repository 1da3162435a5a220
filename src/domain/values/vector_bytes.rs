use crate::domain::error::DomainError;

const F64_WIDTH: usize = std::mem::size_of::<f64>();

/// Embedding laid out as raw little-endian f64 values, concatenated in order
/// with no length prefix. This is the layout a FLOAT64 vector field expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorBytes(Vec<u8>);

impl VectorBytes {
    pub fn from_embedding(values: &[f64]) -> Self {
        Self(values.iter().flat_map(|v| v.to_le_bytes()).collect())
    }

    pub fn from_raw(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn to_embedding(&self, dim: usize) -> Result<Vec<f64>, DomainError> {
        if self.0.len() != dim * F64_WIDTH {
            return Err(DomainError::InvalidInput(format!(
                "Vector buffer holds {} bytes, expected {} for dimension {dim}",
                self.0.len(),
                dim * F64_WIDTH
            )));
        }
        Ok(self
            .0
            .chunks_exact(F64_WIDTH)
            .map(|chunk| {
                let mut raw = [0u8; F64_WIDTH];
                raw.copy_from_slice(chunk);
                f64::from_le_bytes(raw)
            })
            .collect())
    }

    pub fn dimension(&self) -> usize {
        self.0.len() / F64_WIDTH
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_little_endian_without_framing() {
        let bytes = VectorBytes::from_embedding(&[1.0, -2.5]);
        let mut expected = 1.0f64.to_le_bytes().to_vec();
        expected.extend_from_slice(&(-2.5f64).to_le_bytes());
        assert_eq!(bytes.as_bytes(), expected.as_slice());
        assert_eq!(bytes.dimension(), 2);
    }

    #[test]
    fn test_decode_is_bit_exact() {
        let values = vec![0.1, -0.0, f64::MIN_POSITIVE, 1e300, -7.25, f64::EPSILON];
        let decoded = VectorBytes::from_embedding(&values)
            .to_embedding(values.len())
            .unwrap();
        for (a, b) in values.iter().zip(decoded.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_decode_wrong_dimension() {
        let bytes = VectorBytes::from_embedding(&[1.0, 2.0, 3.0]);
        assert!(matches!(bytes.to_embedding(4), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_decode_ragged_buffer() {
        let bytes = VectorBytes::from_raw(vec![0u8; 12]);
        assert!(bytes.to_embedding(1).is_err());
        assert_eq!(bytes.dimension(), 1);
    }

    #[test]
    fn test_empty_embedding() {
        let bytes = VectorBytes::from_embedding(&[]);
        assert!(bytes.as_bytes().is_empty());
        assert_eq!(bytes.to_embedding(0).unwrap(), Vec::<f64>::new());
    }
}
