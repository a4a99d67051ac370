use std::fmt;

use crate::error::{GraphError, Result};

/// A closed interval `[min, max]` of non-negative values.
///
/// Used to bound random edge weights and to report the observed spread of
/// edge weights or path distances.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Create a range with `0 <= min <= max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !(min >= 0.0 && max >= min && max.is_finite()) {
            return Err(GraphError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Create an edge-weight range, which additionally needs `min < max`.
    pub fn weights(min: f64, max: f64) -> Result<Self> {
        let r = Self::new(min, max)?;
        if r.is_degenerate() {
            return Err(GraphError::InvalidRange { min, max });
        }
        Ok(r)
    }

    /// Smallest range covering every value, or `None` for no values.
    pub fn spanning(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Self { min: v, max: v }),
            Some(r) => Some(Self {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
    }

    #[inline]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    #[inline]
    pub fn contains(self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}
