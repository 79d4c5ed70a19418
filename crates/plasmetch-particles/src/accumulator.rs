//! Per-point hit accumulators shared by the workers of a tracing pass.
//!
//! Each channel is a vector of f64 cells stored as bit patterns in
//! `AtomicU64`. Adds use a compare-exchange loop, so concurrent adds to the
//! same point commute and adds to different points never interfere. The
//! driver reads the totals only after every worker of the pass has joined.

use std::sync::atomic::{AtomicU64, Ordering};

use plasmetch_core::RateField;

use crate::contract::{Labels, ParticleContract};

/// An f64 cell supporting atomic addition.
#[derive(Debug)]
struct AtomicF64(AtomicU64);

impl AtomicF64 {
    fn zero() -> Self {
        Self(AtomicU64::new(0.0f64.to_bits()))
    }

    fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    fn store(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }

    fn fetch_add(&self, value: f64) {
        let mut current = self.0.load(Ordering::Relaxed);
        loop {
            let next = (f64::from_bits(current) + value).to_bits();
            match self
                .0
                .compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return,
                Err(actual) => current = actual,
            }
        }
    }
}

/// Accumulators for one particle species: one channel per declared label.
#[derive(Debug)]
pub struct LocalAccumulators {
    labels: Labels,
    channels: Vec<Vec<AtomicF64>>,
    point_count: usize,
}

impl LocalAccumulators {
    /// Zeroed accumulators for the given labels and point count.
    pub fn new(labels: Labels, point_count: usize) -> Self {
        let channels = labels
            .iter()
            .map(|_| (0..point_count).map(|_| AtomicF64::zero()).collect())
            .collect();
        Self {
            labels,
            channels,
            point_count,
        }
    }

    /// Zeroed accumulators laid out for `particle`'s labels.
    pub fn for_particle<P: ParticleContract + ?Sized>(particle: &P, point_count: usize) -> Self {
        Self::new(particle.local_data_labels(), point_count)
    }

    /// Atomically add `value` to `channel` at `point`.
    ///
    /// Panics if `channel` or `point` is out of range.
    pub fn add(&self, channel: usize, point: usize, value: f64) {
        self.channels[channel][point].fetch_add(value);
    }

    /// Current value of `channel` at `point`.
    pub fn value(&self, channel: usize, point: usize) -> f64 {
        self.channels[channel][point].load()
    }

    /// Copy of one channel's values.
    pub fn channel_values(&self, channel: usize) -> Vec<f64> {
        self.channels[channel].iter().map(AtomicF64::load).collect()
    }

    /// Channel labels, in channel order.
    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    /// Number of surface points per channel.
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Multiply every cell by `factor` (the driver's flux normalisation).
    pub fn scale(&mut self, factor: f64) {
        for cell in self.channels.iter_mut().flatten() {
            let v = cell.load();
            cell.store(v * factor);
        }
    }

    /// Reset every cell to zero for the next pass.
    pub fn clear(&mut self) {
        for cell in self.channels.iter_mut().flatten() {
            cell.store(0.0);
        }
    }

    /// Add every channel into `rates` under its label.
    pub fn merge_into(&self, rates: &mut RateField) {
        for (i, label) in self.labels.iter().enumerate() {
            rates.accumulate(label, &self.channel_values(i));
        }
    }

    /// Convert into a rate field holding only this species' channels.
    pub fn into_rate_field(self) -> RateField {
        let mut rates = RateField::new();
        self.merge_into(&mut rates);
        rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn add_and_read_back() {
        let acc = LocalAccumulators::new(smallvec!["a", "b"], 3);
        acc.add(0, 1, 0.5);
        acc.add(0, 1, 0.25);
        acc.add(1, 2, 2.0);
        assert_eq!(acc.value(0, 1), 0.75);
        assert_eq!(acc.channel_values(1), vec![0.0, 0.0, 2.0]);
        assert_eq!(acc.point_count(), 3);
        assert_eq!(acc.labels(), &["a", "b"]);
    }

    #[test]
    fn concurrent_adds_to_same_point_commute() {
        let acc = LocalAccumulators::new(smallvec!["flux"], 2);
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..1000 {
                        acc.add(0, 0, 1.0);
                        acc.add(0, 1, 0.5);
                    }
                });
            }
        });
        assert_eq!(acc.value(0, 0), 8000.0);
        assert_eq!(acc.value(0, 1), 4000.0);
    }

    #[test]
    fn scale_clear_and_merge() {
        let mut acc = LocalAccumulators::new(smallvec!["x"], 2);
        acc.add(0, 0, 4.0);
        acc.scale(0.5);
        assert_eq!(acc.value(0, 0), 2.0);

        let mut rates = RateField::new();
        rates.insert("x", vec![1.0, 1.0]);
        acc.merge_into(&mut rates);
        assert_eq!(rates.get("x").unwrap(), &[3.0, 1.0]);

        acc.clear();
        assert_eq!(acc.into_rate_field().get("x").unwrap(), &[0.0, 0.0]);
    }
}
