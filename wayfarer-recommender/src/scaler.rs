//! Per-column min-max scaling of fixed-width numeric rows.

/// Column minima and ranges learnt from a set of rows.
///
/// `transform` maps each column through `(x - min) / (max - min)`. A constant
/// column has a range of zero and maps through `x - min` instead. Values
/// outside the fitted range are not clipped.
///
/// # Examples
/// ```
/// use wayfarer_recommender::MinMaxScaler;
///
/// let scaler = MinMaxScaler::fit(&[[1.0, 4.0], [3.0, 4.0]]).expect("rows are present");
/// assert_eq!(scaler.transform(&[2.0, 4.0]), [0.5, 0.0]);
/// assert_eq!(scaler.transform(&[5.0, 6.0]), [2.0, 2.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxScaler<const N: usize> {
    min: [f64; N],
    range: [f64; N],
}

impl<const N: usize> MinMaxScaler<N> {
    /// Learn column bounds; `None` when `rows` is empty.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "column range computation")]
    pub fn fit(rows: &[[f64; N]]) -> Option<Self> {
        let (first, rest) = rows.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for row in rest {
            for ((lo, hi), value) in min.iter_mut().zip(max.iter_mut()).zip(row) {
                *lo = lo.min(*value);
                *hi = hi.max(*value);
            }
        }
        let mut range = [0.0; N];
        for ((span, lo), hi) in range.iter_mut().zip(&min).zip(&max) {
            *span = hi - lo;
        }
        Some(Self { min, range })
    }

    /// Scale a single row with the fitted bounds.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "min-max scaling")]
    pub fn transform(&self, row: &[f64; N]) -> [f64; N] {
        let mut scaled = *row;
        for ((value, lo), span) in scaled.iter_mut().zip(&self.min).zip(&self.range) {
            let shifted = *value - lo;
            *value = if *span == 0.0 { shifted } else { shifted / span };
        }
        scaled
    }

    /// Column minima seen while fitting.
    #[must_use]
    pub const fn min(&self) -> &[f64; N] {
        &self.min
    }
}
