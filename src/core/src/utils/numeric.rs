pub struct FloatUtils;

impl FloatUtils {
    /// Round half away from zero to `decimals` places
    pub fn round_to(value: f32, decimals: u32) -> f32 {
        let factor = 10f32.powi(decimals as i32);
        (value * factor).round() / factor
    }

    pub fn clamp_percent(value: f32) -> f32 {
        value.clamp(0.0, 100.0)
    }

    /// Round a 0-100 value to a whole percentage, saturating at both ends
    pub fn to_percent(value: f32) -> u8 {
        Self::clamp_percent(value.round()) as u8
    }
}

pub struct IntegerUtils;

impl IntegerUtils {
    pub fn mean(values: &[u8]) -> Option<f32> {
        if values.is_empty() {
            return None;
        }

        let sum: u64 = values.iter().map(|&v| v as u64).sum();

        Some(sum as f32 / values.len() as f32)
    }

    /// Population standard deviation (divides by N).
    ///
    /// Works on exact integer sums, so the result does not depend on the
    /// order of `values`.
    pub fn population_std_dev(values: &[u8]) -> Option<f32> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as u64;
        let sum: u64 = values.iter().map(|&v| v as u64).sum();
        let sum_sq: u64 = values.iter().map(|&v| (v as u64) * (v as u64)).sum();

        // n * Σx² - (Σx)² is never negative for real data
        let numerator = (n * sum_sq).saturating_sub(sum * sum);
        let variance = numerator as f64 / (n * n) as f64;

        Some(variance.sqrt() as f32)
    }
}
