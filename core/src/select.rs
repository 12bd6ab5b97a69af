use crate::error::ConfigError;
use crate::interp::{lerp, scurve3};
use crate::{NoiseModule, sample};

// Chooses between two sources based on a control module. Control
// values inside [lower_bound, upper_bound) pick source1, values
// outside pick source0. A non-zero edge falloff widens each boundary
// into a band over which the two sources are blended with a cubic
// smoothstep; the boundary convention is half-open at every arity.
pub struct Select<'a> {
    control: &'a dyn NoiseModule,
    source0: &'a dyn NoiseModule,
    source1: &'a dyn NoiseModule,
    lower_bound: f64,
    upper_bound: f64,
    edge_falloff: f64,
}

impl<'a> Select<'a> {
    pub fn new(
        control: &'a dyn NoiseModule,
        source0: &'a dyn NoiseModule,
        source1: &'a dyn NoiseModule,
    ) -> Self {
        Self {
            control,
            source0,
            source1,
            lower_bound: -1.0,
            upper_bound: 1.0,
            edge_falloff: 0.0,
        }
    }

    pub fn set_bounds(&mut self, lower: f64, upper: f64) -> Result<(), ConfigError> {
        if lower > upper {
            return Err(ConfigError::InvertedBounds { lower, upper });
        }
        self.lower_bound = lower;
        self.upper_bound = upper;
        Ok(())
    }

    pub fn set_edge_falloff(&mut self, falloff: f64) {
        self.edge_falloff = falloff.max(0.0);
    }

    fn eval(&self, pos: &[f64]) -> f64 {
        let cv = sample(self.control, pos);

        // The falloff cannot exceed half the selected band, or the two
        // blend regions would overlap
        let half_band = (self.upper_bound - self.lower_bound) / 2.0;
        let falloff = self.edge_falloff.min(half_band);

        if falloff > 0.0 {
            if cv < self.lower_bound - falloff {
                return sample(self.source0, pos);
            }
            if cv < self.lower_bound + falloff {
                // Rising band around the lower boundary
                let a = scurve3((cv - (self.lower_bound - falloff)) / (2.0 * falloff));
                return lerp(sample(self.source0, pos), sample(self.source1, pos), a);
            }
            if cv < self.upper_bound - falloff {
                return sample(self.source1, pos);
            }
            if cv < self.upper_bound + falloff {
                // Falling band around the upper boundary
                let a = scurve3((cv - (self.upper_bound - falloff)) / (2.0 * falloff));
                return lerp(sample(self.source1, pos), sample(self.source0, pos), a);
            }
            return sample(self.source0, pos);
        }

        if cv < self.lower_bound || cv >= self.upper_bound {
            sample(self.source0, pos)
        } else {
            sample(self.source1, pos)
        }
    }
}

impl NoiseModule for Select<'_> {
    fn get1(&self, x: f64) -> f64 {
        self.eval(&[x])
    }

    fn get2(&self, x: f64, y: f64) -> f64 {
        self.eval(&[x, y])
    }

    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.eval(&[x, y, z])
    }

    fn get4(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.eval(&[x, y, z, w])
    }

    fn get6(&self, x: f64, y: f64, z: f64, w: f64, u: f64, v: f64) -> f64 {
        self.eval(&[x, y, z, w, u, v])
    }
}
