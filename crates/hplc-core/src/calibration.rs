use crate::model::StandardSeries;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Straight-line fit of peak area against concentration: `area = slope * conc + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationCurve {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    /// Number of distinct concentrations in the fit.
    pub points: usize,
}

impl CalibrationCurve {
    /// Back-calculate the concentration that produces `area`.
    pub fn concentration_for(&self, area: Decimal) -> Option<f64> {
        let area = area.to_f64()?;
        Some((area - self.intercept) / self.slope)
    }
}

/// Least-squares fit of a standard series.
///
/// Returns `None` for series that cannot calibrate anything: fewer than two
/// distinct concentrations, or a flat or non-finite slope.
pub fn fit_series(series: &StandardSeries) -> Option<CalibrationCurve> {
    if series.len() < 2 {
        return None;
    }

    let points: Vec<(f64, f64)> = series
        .iter()
        .filter_map(|(conc, area)| Some((conc.to_f64()?, area.to_f64()?)))
        .collect();
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (x, y) in &points {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    if sxx == 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    if slope == 0.0 || !slope.is_finite() {
        return None;
    }
    let intercept = mean_y - slope * mean_x;
    let r_squared = if syy == 0.0 {
        1.0
    } else {
        (sxy * sxy) / (sxx * syy)
    };

    Some(CalibrationCurve {
        slope,
        intercept,
        r_squared,
        points: points.len(),
    })
}
