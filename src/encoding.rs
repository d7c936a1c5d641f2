//! Label Encoding
//!
//! One-hot encoding of integer class labels.

use ndarray::Array2;

use crate::error::{Error, Result};

/// One-hot encode a label vector against `num_classes`.
///
/// Output shape is `[labels.len(), num_classes]`; a label outside
/// `[0, num_classes)` is an error.
pub fn one_hot(labels: &[usize], num_classes: usize) -> Result<Array2<f32>> {
    let mut encoded = Array2::<f32>::zeros((labels.len(), num_classes));
    for (i, &label) in labels.iter().enumerate() {
        if label >= num_classes {
            return Err(Error::LabelOutOfRange { label, num_classes });
        }
        encoded[[i, label]] = 1.0;
    }
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_one_hot_basic() {
        let encoded = one_hot(&[0, 1, 1], 2).unwrap();
        assert_eq!(encoded, array![[1.0, 0.0], [0.0, 1.0], [0.0, 1.0]]);
    }

    #[test]
    fn test_one_hot_empty() {
        let encoded = one_hot(&[], 4).unwrap();
        assert_eq!(encoded.dim(), (0, 4));
    }

    #[test]
    fn test_one_hot_out_of_range() {
        let result = one_hot(&[0, 2], 2);
        assert!(matches!(
            result,
            Err(Error::LabelOutOfRange {
                label: 2,
                num_classes: 2
            })
        ));
    }
}
