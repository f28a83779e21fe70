use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("step must be positive and finite, got {0} days")]
    InvalidStep(f64),
}

/// Uniform sampling grid over a window of UTC Julian Dates.
///
/// Sample k is `start + k * step`, so the sequence is an exact function of
/// the inputs and does not accumulate floating-point drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    start_jd: f64,
    end_jd: f64,
    step_days: f64,
}

impl TimeGrid {
    pub fn new(start_jd: f64, end_jd: f64, step_days: f64) -> Result<Self, GridError> {
        if !step_days.is_finite() || step_days <= 0.0 {
            return Err(GridError::InvalidStep(step_days));
        }
        Ok(Self {
            start_jd,
            end_jd,
            step_days,
        })
    }

    pub fn start_jd(&self) -> f64 {
        self.start_jd
    }

    pub fn end_jd(&self) -> f64 {
        self.end_jd
    }

    pub fn step_days(&self) -> f64 {
        self.step_days
    }

    /// Number of samples: `floor((end - start) / step) + 1`, or 0 when the
    /// window is empty.
    pub fn len(&self) -> usize {
        if self.end_jd < self.start_jd {
            0
        } else {
            ((self.end_jd - self.start_jd) / self.step_days).floor() as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> {
        let start = self.start_jd;
        let step = self.step_days;
        (0..self.len()).map(move |k| start + k as f64 * step)
    }
}
