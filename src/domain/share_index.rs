//! `ShareIndex` newtype for Shamir Secret Sharing

use crate::error::ParameterError;

/// Share index (1..=255)
///
/// The index is the x coordinate a share was evaluated at. Index 0 is
/// never valid: the polynomial's value there is the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u8);

impl ShareIndex {
    /// Minimum valid share index (1)
    pub const MIN: u8 = 1;

    /// Creates a new share index
    ///
    /// # Errors
    /// Returns an error if index is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_bigint::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(1).unwrap();
    /// assert_eq!(*index, 1);
    ///
    /// let max_index = ShareIndex::new(u8::MAX).unwrap();
    /// assert_eq!(*max_index, 255);
    ///
    /// assert!(ShareIndex::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, ParameterError> {
        if value < Self::MIN {
            return Err(ParameterError::ZeroShareIndex);
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ShareIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
