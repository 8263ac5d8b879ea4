// File: crates/plot-core/src/series.rs
// Summary: Series records and the parallel-list (x_arrs/y_arrs + overlays) form they are paired from.

use crate::error::ConfigurationError;
use crate::style::{Color, LineStyle, Marker};

/// One (x, y) trace with its optional style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub label: Option<String>,
    pub linestyle: Option<LineStyle>,
    pub color: Option<Color>,
    pub marker: Option<Marker>,
}

impl Series {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y, ..Self::default() }
    }

    /// Build from (x, y) pairs, the layout the renderer stores internally.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let (x, y) = points.iter().copied().unzip();
        Self::new(x, y)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_linestyle(mut self, linestyle: LineStyle) -> Self {
        self.linestyle = Some(linestyle);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    pub(crate) fn check_lengths(&self, index: usize) -> Result<(), ConfigurationError> {
        if self.x.len() != self.y.len() {
            return Err(ConfigurationError::PointCountMismatch {
                index,
                x_len: self.x.len(),
                y_len: self.y.len(),
            });
        }
        Ok(())
    }
}

/// Per-series style lists aligned by position with the series collection.
/// Marker entries are already resolved so `None` inside the list means "no marker".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleOverlay {
    pub labels: Option<Vec<String>>,
    pub linestyles: Option<Vec<LineStyle>>,
    pub colors: Option<Vec<Color>>,
    pub markers: Option<Vec<Option<Marker>>>,
}

fn check_overlay<T>(
    overlay: &'static str,
    values: &Option<Vec<T>>,
    expected: usize,
) -> Result<(), ConfigurationError> {
    match values {
        Some(v) if v.len() != expected => {
            Err(ConfigurationError::OverlayLength { overlay, got: v.len(), expected })
        }
        _ => Ok(()),
    }
}

/// Parallel coordinate arrays: `x_arrs[i]` pairs with `y_arrs[i]`. Not broadcast.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesSet {
    pub x_arrs: Vec<Vec<f64>>,
    pub y_arrs: Vec<Vec<f64>>,
}

impl SeriesSet {
    pub fn new(x_arrs: Vec<Vec<f64>>, y_arrs: Vec<Vec<f64>>) -> Self {
        Self { x_arrs, y_arrs }
    }

    /// Series count is the number of y-arrays.
    pub fn len(&self) -> usize {
        self.y_arrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y_arrs.is_empty()
    }

    /// Pair arrays and overlays by position into self-contained records.
    pub fn into_series(self, overlay: StyleOverlay) -> Result<Vec<Series>, ConfigurationError> {
        let n = self.y_arrs.len();
        if self.x_arrs.len() != n {
            return Err(ConfigurationError::SeriesCountMismatch {
                x_arrs: self.x_arrs.len(),
                y_arrs: n,
            });
        }
        check_overlay("labels", &overlay.labels, n)?;
        check_overlay("linestyles", &overlay.linestyles, n)?;
        check_overlay("colors", &overlay.colors, n)?;
        check_overlay("markers", &overlay.markers, n)?;

        let mut labels = overlay.labels.map(Vec::into_iter);
        let mut linestyles = overlay.linestyles.map(Vec::into_iter);
        let mut colors = overlay.colors.map(Vec::into_iter);
        let mut markers = overlay.markers.map(Vec::into_iter);

        let series = self
            .x_arrs
            .into_iter()
            .zip(self.y_arrs)
            .map(|(x, y)| Series {
                x,
                y,
                label: labels.as_mut().and_then(Iterator::next),
                linestyle: linestyles.as_mut().and_then(Iterator::next),
                color: colors.as_mut().and_then(Iterator::next),
                marker: markers.as_mut().and_then(Iterator::next).flatten(),
            })
            .collect();
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_arrays() -> SeriesSet {
        SeriesSet::new(vec![vec![0.0, 1.0], vec![0.0, 1.0]], vec![vec![1.0, 2.0], vec![3.0, 4.0]])
    }

    #[test]
    fn pairs_overlays_by_position() {
        let overlay = StyleOverlay {
            labels: Some(vec!["a".into(), "b".into()]),
            markers: Some(vec![None, Some(Marker::Circle)]),
            ..StyleOverlay::default()
        };
        let series = two_arrays().into_series(overlay).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label.as_deref(), Some("a"));
        assert_eq!(series[1].label.as_deref(), Some("b"));
        assert_eq!(series[0].marker, None);
        assert_eq!(series[1].marker, Some(Marker::Circle));
        assert_eq!(series[1].y, vec![3.0, 4.0]);
        assert!(series.iter().all(|s| s.color.is_none() && s.linestyle.is_none()));
    }

    #[test]
    fn rejects_short_overlay() {
        let overlay = StyleOverlay {
            colors: Some(vec![Color::BLACK]),
            ..StyleOverlay::default()
        };
        let err = two_arrays().into_series(overlay).unwrap_err();
        assert_eq!(err, ConfigurationError::OverlayLength { overlay: "colors", got: 1, expected: 2 });
    }

    #[test]
    fn rejects_unpaired_arrays() {
        let set = SeriesSet::new(vec![vec![0.0]], vec![vec![1.0], vec![2.0]]);
        let err = set.into_series(StyleOverlay::default()).unwrap_err();
        assert_eq!(err, ConfigurationError::SeriesCountMismatch { x_arrs: 1, y_arrs: 2 });
    }

    #[test]
    fn from_points_splits_coordinates() {
        let s = Series::from_points(&[(0.0, 1.0), (2.0, 3.0)]);
        assert_eq!(s.x, vec![0.0, 2.0]);
        assert_eq!(s.y, vec![1.0, 3.0]);
    }
}
