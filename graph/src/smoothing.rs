//! Smoothing filters producing one value per input value.
//!
//! [`RollingMedian`] mirrors a `min_periods = 1` rolling median: windows are
//! clipped at the series ends instead of producing gaps. [`SavitzkyGolay`]
//! fits a least-squares polynomial over each full window; edge values come
//! from the polynomial fitted to the first and last window.

use serde::Deserialize;

use geolod_ontology::{SmoothingKind, SmoothingParams, SmoothingSpec};

use crate::error::SmoothingError;

/// Window placement relative to the output sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    /// Window centred on the sample.
    #[default]
    Centered,
    /// Window ending at the sample.
    Trailing,
}

/// Smoothing configuration for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Window and order parameters.
    #[serde(flatten)]
    pub params: SmoothingParams,
    /// Rolling-median window placement.
    pub alignment: Alignment,
}

impl SmoothingConfig {
    /// The configured filters, in vocabulary order.
    #[must_use]
    pub fn smoothers(&self) -> Vec<Box<dyn Smoother>> {
        vec![
            Box::new(RollingMedian {
                window: self.params.rolling_window,
                alignment: self.alignment,
            }),
            Box::new(SavitzkyGolay {
                window: self.params.sg_window,
                order: self.params.sg_polyorder,
            }),
        ]
    }
}

/// A filter mapping a series to a same-length smoothed series.
pub trait Smoother {
    /// The method parameters identifying this filter in the graph.
    fn spec(&self) -> SmoothingSpec;

    /// Smooths `values`.
    ///
    /// # Errors
    ///
    /// Returns [`SmoothingError`] when the parameters do not fit the series.
    fn smooth(&self, values: &[f64]) -> Result<Vec<f64>, SmoothingError>;
}

/// Rolling median with clipped windows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollingMedian {
    /// Window length in samples.
    pub window: usize,
    /// Window placement.
    pub alignment: Alignment,
}

impl Smoother for RollingMedian {
    fn spec(&self) -> SmoothingSpec {
        SmoothingSpec::rolling_median(self.window)
    }

    fn smooth(&self, values: &[f64]) -> Result<Vec<f64>, SmoothingError> {
        let w = self.window;
        if w == 0 {
            return Err(SmoothingError::InvalidWindow {
                window: w,
                reason: "window must be positive",
            });
        }
        let n = values.len();
        let offset = match self.alignment {
            Alignment::Centered => (w - 1) / 2,
            Alignment::Trailing => 0,
        };
        let mut buf = Vec::with_capacity(w);
        let out = (0..n)
            .map(|i| {
                let end = (i + offset).min(n - 1);
                let start = (i + offset + 1).saturating_sub(w);
                buf.clear();
                buf.extend_from_slice(&values[start..=end]);
                median(&mut buf)
            })
            .collect();
        Ok(out)
    }
}

fn median(buf: &mut [f64]) -> f64 {
    buf.sort_by(f64::total_cmp);
    let mid = buf.len() / 2;
    if buf.len() % 2 == 1 {
        buf[mid]
    } else {
        (buf[mid - 1] + buf[mid]) / 2.0
    }
}

/// Savitzky–Golay polynomial smoothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SavitzkyGolay {
    /// Odd window length in samples.
    pub window: usize,
    /// Polynomial order, below `window`.
    pub order: usize,
}

impl SavitzkyGolay {
    fn check(&self, len: usize) -> Result<(), SmoothingError> {
        let (window, order) = (self.window, self.order);
        if window == 0 || window % 2 == 0 {
            return Err(SmoothingError::InvalidWindow {
                window,
                reason: "window must be a positive odd number",
            });
        }
        if order >= window {
            return Err(SmoothingError::OrderTooHigh { order, window });
        }
        if window > len {
            return Err(SmoothingError::WindowTooLong { window, len });
        }
        Ok(())
    }

    /// Projection weights: row `t` gives the fitted value at window position
    /// `t` as a weighted sum of the window samples.
    fn weights(&self) -> Result<Vec<Vec<f64>>, SmoothingError> {
        let (w, cols) = (self.window, self.order + 1);
        let half = (w / 2) as f64;
        let design: Vec<Vec<f64>> = (0..w)
            .map(|t| {
                let x = t as f64 - half;
                (0..cols).map(|k| x.powi(k as i32)).collect()
            })
            .collect();

        // Normal equations: (AᵀA) X = Aᵀ, solved for X with w right-hand sides.
        let mut lhs = vec![vec![0.0; cols]; cols];
        let mut rhs = vec![vec![0.0; w]; cols];
        for (t, row) in design.iter().enumerate() {
            for i in 0..cols {
                for j in 0..cols {
                    lhs[i][j] += row[i] * row[j];
                }
                rhs[i][t] = row[i];
            }
        }
        let x = solve(lhs, rhs).ok_or(SmoothingError::Singular {
            window: self.window,
            order: self.order,
        })?;

        Ok(design
            .iter()
            .map(|row| {
                (0..w)
                    .map(|j| (0..cols).map(|k| row[k] * x[k][j]).sum())
                    .collect()
            })
            .collect())
    }
}

impl Smoother for SavitzkyGolay {
    fn spec(&self) -> SmoothingSpec {
        SmoothingSpec::savitzky_golay(self.window, self.order)
    }

    fn smooth(&self, values: &[f64]) -> Result<Vec<f64>, SmoothingError> {
        self.check(values.len())?;
        let weights = self.weights()?;
        let (n, w, half) = (values.len(), self.window, self.window / 2);
        let apply = |t: usize, start: usize| -> f64 {
            weights[t]
                .iter()
                .zip(&values[start..start + w])
                .map(|(c, v)| c * v)
                .sum()
        };

        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let value = if i < half {
                apply(i, 0)
            } else if i >= n - half {
                apply(i + w - n, n - w)
            } else {
                apply(half, i - half)
            };
            out.push(value);
        }
        Ok(out)
    }
}

/// Gaussian elimination with partial pivoting. `rhs` holds one row per
/// unknown and one column per right-hand side.
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<Vec<f64>>) -> Option<Vec<Vec<f64>>> {
    let n = a.len();
    for col in 0..n {
        let pivot = (col..n).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        if a[pivot][col].abs() < 1e-12 {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);
        for row in col + 1..n {
            let f = a[row][col] / a[col][col];
            if f == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= f * a[col][k];
            }
            for k in 0..b[row].len() {
                b[row][k] -= f * b[col][k];
            }
        }
    }
    for col in (0..n).rev() {
        for k in 0..b[col].len() {
            let mut acc = b[col][k];
            for j in col + 1..n {
                acc -= a[col][j] * b[j][k];
            }
            b[col][k] = acc / a[col][col];
        }
    }
    Some(b)
}

/// The property used to record a smoothed value of `kind`.
#[must_use]
pub fn value_property(kind: SmoothingKind) -> &'static str {
    use geolod_ontology::model::iris::geolod;
    match kind {
        SmoothingKind::RollingMedian => geolod::SMOOTHED_VALUE_ROLLING_MEDIAN,
        SmoothingKind::SavitzkyGolay => geolod::SMOOTHED_VALUE_SAVGOL,
    }
}

/// The property linking an observation to its method node of `kind`.
#[must_use]
pub fn method_property(kind: SmoothingKind) -> &'static str {
    use geolod_ontology::model::iris::geolod;
    match kind {
        SmoothingKind::RollingMedian => geolod::SMOOTHING_METHOD_MEDIAN,
        SmoothingKind::SavitzkyGolay => geolod::SMOOTHING_METHOD_SAVGOL,
    }
}
