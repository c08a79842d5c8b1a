/// Simple rolling mean of volume.
#[derive(Debug, Clone)]
pub struct VolumeAverage {
    pub window: usize,
}

impl VolumeAverage {
    pub fn new(window: usize) -> Self {
        assert!(window >= 1, "volume window must be >= 1");
        Self { window }
    }

    /// Rolling mean per bar; `None` for the first `window - 1` bars.
    pub fn series(&self, volumes: &[f64]) -> Vec<Option<f64>> {
        let mut out = vec![None; volumes.len()];
        if volumes.len() < self.window {
            return out;
        }
        let mut sum: f64 = volumes[..self.window].iter().sum();
        out[self.window - 1] = Some(sum / self.window as f64);
        for i in self.window..volumes.len() {
            sum += volumes[i] - volumes[i - self.window];
            out[i] = Some(sum / self.window as f64);
        }
        out
    }

    pub fn compute(&self, volumes: &[f64]) -> Option<f64> {
        self.series(volumes).last().copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_before_window_fills() {
        let ma = VolumeAverage::new(5);
        let out = ma.series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(out[..4], [None, None, None, None]);
        assert_eq!(out[4], Some(3.0));
        assert_eq!(out[5], Some(4.0));
    }

    #[test]
    fn short_input_is_all_undefined() {
        let ma = VolumeAverage::new(5);
        assert!(ma.series(&[10.0, 20.0]).iter().all(Option::is_none));
        assert!(ma.compute(&[10.0, 20.0]).is_none());
    }
}
