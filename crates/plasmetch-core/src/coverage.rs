//! Persistent per-point surface coverages.

use crate::labels::{E_COVERAGE, O_COVERAGE};

/// Etchant and oxygen coverage, one entry per surface point.
///
/// Every entry lies in `[0, 1]` and both arrays always have the same
/// length, equal to the current number of surface points. The kinetics
/// model owns the state and replaces both arrays together on each update;
/// particles read it during tracing as the coverage of the previous
/// completed iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageState {
    e_coverage: Vec<f64>,
    o_coverage: Vec<f64>,
}

impl CoverageState {
    /// Zero-filled coverages for `point_count` points.
    pub fn new(point_count: usize) -> Self {
        Self {
            e_coverage: vec![0.0; point_count],
            o_coverage: vec![0.0; point_count],
        }
    }

    /// Number of surface points.
    pub fn len(&self) -> usize {
        self.e_coverage.len()
    }

    /// Returns `true` if there are no surface points.
    pub fn is_empty(&self) -> bool {
        self.e_coverage.is_empty()
    }

    /// Etchant (fluorine) coverage per point.
    pub fn e_coverage(&self) -> &[f64] {
        &self.e_coverage
    }

    /// Oxygen coverage per point.
    pub fn o_coverage(&self) -> &[f64] {
        &self.o_coverage
    }

    /// `(eCoverage, oCoverage)` at a point.
    ///
    /// Panics if `point` is out of range.
    pub fn at(&self, point: usize) -> (f64, f64) {
        (self.e_coverage[point], self.o_coverage[point])
    }

    /// Look a coverage array up by its label.
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        match name {
            E_COVERAGE => Some(&self.e_coverage),
            O_COVERAGE => Some(&self.o_coverage),
            _ => None,
        }
    }

    /// Named arrays for diagnostics and visualization.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[f64])> {
        [
            (E_COVERAGE, self.e_coverage.as_slice()),
            (O_COVERAGE, self.o_coverage.as_slice()),
        ]
        .into_iter()
    }

    /// Replace both arrays at once.
    ///
    /// Panics if either array's length differs from the current point count.
    pub fn commit(&mut self, e_coverage: Vec<f64>, o_coverage: Vec<f64>) {
        assert_eq!(e_coverage.len(), self.len(), "eCoverage length changed");
        assert_eq!(o_coverage.len(), self.len(), "oCoverage length changed");
        self.e_coverage = e_coverage;
        self.o_coverage = o_coverage;
    }
}
