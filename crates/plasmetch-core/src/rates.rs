//! The per-iteration [`RateField`]: named, point-aligned rate channels.

use indexmap::IndexMap;

use crate::error::KineticsError;

/// Mapping from channel name to one value per surface point.
///
/// Rebuilt by the driver after every tracing pass from the particles'
/// accumulators. Channels iterate in insertion order, which is the order
/// the particles declared their labels in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RateField {
    channels: IndexMap<String, Vec<f64>>,
}

impl RateField {
    /// Create an empty rate field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a channel. Returns the previous values, if any.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) -> Option<Vec<f64>> {
        self.channels.insert(name.into(), values)
    }

    /// Add `values` element-wise into channel `name`, creating it if absent.
    ///
    /// Used when several tracing passes (or workers) contribute to the same
    /// channel. Panics if an existing channel has a different length.
    pub fn accumulate(&mut self, name: &str, values: &[f64]) {
        match self.channels.get_mut(name) {
            Some(existing) => {
                assert_eq!(
                    existing.len(),
                    values.len(),
                    "accumulating into channel '{name}' with a different length"
                );
                for (dst, src) in existing.iter_mut().zip(values) {
                    *dst += *src;
                }
            }
            None => {
                self.channels.insert(name.to_string(), values.to_vec());
            }
        }
    }

    /// Values of a channel, if present.
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.channels.get(name).map(|v| v.as_slice())
    }

    /// Values of a channel that must be present and hold one entry per point.
    ///
    /// # Errors
    ///
    /// [`KineticsError::MissingChannel`] if absent,
    /// [`KineticsError::LengthMismatch`] if its length differs from
    /// `point_count`.
    pub fn channel(&self, name: &str, point_count: usize) -> Result<&[f64], KineticsError> {
        let values = self.get(name).ok_or_else(|| KineticsError::MissingChannel {
            name: name.to_string(),
        })?;
        if values.len() != point_count {
            return Err(KineticsError::LengthMismatch {
                what: name.to_string(),
                expected: point_count,
                actual: values.len(),
            });
        }
        Ok(values)
    }

    /// Multiply every value of every channel by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for values in self.channels.values_mut() {
            for v in values.iter_mut() {
                *v *= factor;
            }
        }
    }

    /// Channel names in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.channels.keys().map(|k| k.as_str())
    }

    /// Iterate `(name, values)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.channels.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns `true` if no channel has been inserted.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<f64>)> for RateField {
    fn from_iter<I: IntoIterator<Item = (S, Vec<f64>)>>(iter: I) -> Self {
        let mut rates = Self::new();
        for (name, values) in iter {
            rates.insert(name, values);
        }
        rates
    }
}
