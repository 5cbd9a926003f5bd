//! `ShareCount` newtype for Shamir Secret Sharing

use crate::error::ParameterError;

/// Number of shares to create (3..=99)
///
/// Shares are evaluated at x = 1..=count, so the count bounds the largest
/// index handed out by a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u8);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u8 = 3;

    /// Maximum valid share count (99)
    pub const MAX: u8 = 99;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns an error if count is below 3 or 100 or more
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_bigint::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// let max_count = ShareCount::new(ShareCount::MAX).unwrap();
    /// assert_eq!(*max_count, 99);
    ///
    /// assert!(ShareCount::new(2).is_err());
    /// assert!(ShareCount::new(100).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, ParameterError> {
        if value < Self::MIN {
            return Err(ParameterError::ShareCountTooLow(value));
        }
        if value > Self::MAX {
            return Err(ParameterError::ShareCountTooHigh(value));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
