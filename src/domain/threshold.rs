//! Threshold newtype for Shamir Secret Sharing

use crate::error::ParameterError;

/// Threshold for Shamir Secret Sharing (3..=99)
///
/// Invariant: 2 < threshold < 100 (enforced at construction)
/// Thresholds of 1 or 2 are rejected as too weak; 100 and above would let
/// share indices outgrow the split range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Smallest accepted threshold
    pub const MIN: u8 = 3;

    /// Largest accepted threshold
    pub const MAX: u8 = 99;

    /// Creates a new threshold
    ///
    /// # Errors
    /// Returns an error if the threshold is 2 or less, or 100 or more
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_bigint::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(2).is_err());
    /// assert!(Threshold::new(100).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, ParameterError> {
        if value < Self::MIN {
            return Err(ParameterError::ThresholdTooLow(value));
        }
        if value > Self::MAX {
            return Err(ParameterError::ThresholdTooHigh(value));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
