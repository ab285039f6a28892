use crate::animation::reveal::Easing;

pub const FRAME_MS: u32 = 16;

/// Counts from zero to `target` over `duration_ms`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CountUp {
    pub target: f64,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl CountUp {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            duration_ms: 1500,
            easing: Easing::EaseOut,
        }
    }

    pub fn is_done(&self, elapsed_ms: u32) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// Elapsed time after the next frame, `None` once the count has landed.
    pub fn next_tick(&self, elapsed_ms: u32) -> Option<u32> {
        if self.is_done(elapsed_ms) {
            None
        } else {
            Some(elapsed_ms.saturating_add(FRAME_MS).min(self.duration_ms))
        }
    }

    /// Decimal places shown while counting, taken from the target (at most 2).
    pub fn decimals(&self) -> usize {
        (0..2usize)
            .find(|&places| {
                let scaled = self.target * 10f64.powi(places as i32);
                (scaled - scaled.round()).abs() < 1e-9
            })
            .unwrap_or(2)
    }

    pub fn value_at(&self, elapsed_ms: u32) -> f64 {
        if self.is_done(elapsed_ms) {
            return self.target;
        }
        let progress = self.easing.apply(f64::from(elapsed_ms) / f64::from(self.duration_ms));
        let scale = 10f64.powi(self.decimals() as i32);
        (self.target * progress * scale).round() / scale
    }

    pub fn display_at(&self, elapsed_ms: u32) -> String {
        format!("{:.*}", self.decimals(), self.value_at(elapsed_ms))
    }
}
