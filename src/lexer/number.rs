//! Range-checked decimal parsing for numeric literals.

use std::num::IntErrorKind;

#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum BoundsError {
    #[error("invalid")]
    Invalid,
    #[error("too small")]
    TooSmall,
    #[error("too large")]
    TooLarge,
}

/// Parses `text` as a base-10 integer lying in `min..=max`.
///
/// An empty range (`min > max`) is always [`BoundsError::Invalid`].
pub fn parse_bounded(text: &str, min: i64, max: i64) -> Result<i64, BoundsError> {
    if min > max {
        return Err(BoundsError::Invalid);
    }
    let value = text.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => BoundsError::TooLarge,
        IntErrorKind::NegOverflow => BoundsError::TooSmall,
        _ => BoundsError::Invalid,
    })?;

    if value < min {
        Err(BoundsError::TooSmall)
    } else if value > max {
        Err(BoundsError::TooLarge)
    } else {
        Ok(value)
    }
}
