use crate::error::ConfigError;
use crate::{NoiseModule, sample};

const DEFAULT_FREQUENCY: f64 = 1.0;
const DEFAULT_LACUNARITY: f64 = 2.0;
const DEFAULT_OCTAVES: usize = 6;

// Scale a position slice into fixed scratch space
#[inline]
fn scaled(pos: &[f64], factor: f64) -> [f64; 6] {
    let mut p = [0.0f64; 6];
    for i in 0..pos.len() {
        p[i] = pos[i] * factor;
    }
    p
}

// Fractal Brownian motion: sums `octaves` copies of the source, each
// at `lacunarity` times the previous frequency and `persistence`
// times the previous amplitude.
pub struct Fbm<'a> {
    source: &'a dyn NoiseModule,
    frequency: f64,
    lacunarity: f64,
    persistence: f64,
    octaves: usize,
}

impl<'a> Fbm<'a> {
    pub fn new(source: &'a dyn NoiseModule) -> Self {
        Self {
            source,
            frequency: DEFAULT_FREQUENCY,
            lacunarity: DEFAULT_LACUNARITY,
            persistence: 0.5,
            octaves: DEFAULT_OCTAVES,
        }
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    pub fn set_lacunarity(&mut self, lacunarity: f64) {
        self.lacunarity = lacunarity;
    }

    pub fn set_persistence(&mut self, persistence: f64) {
        self.persistence = persistence;
    }

    pub fn set_octaves(&mut self, octaves: usize) -> Result<(), ConfigError> {
        if octaves < 1 {
            return Err(ConfigError::InvalidOctaveCount);
        }
        self.octaves = octaves;
        Ok(())
    }

    fn eval(&self, pos: &[f64]) -> f64 {
        let n = pos.len();
        let mut p = scaled(pos, self.frequency);
        let mut amplitude = 1.0;
        let mut total = 0.0;
        for _ in 0..self.octaves {
            total += sample(self.source, &p[..n]) * amplitude;
            for c in &mut p[..n] {
                *c *= self.lacunarity;
            }
            amplitude *= self.persistence;
        }
        total
    }
}

impl NoiseModule for Fbm<'_> {
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

// Like Fbm but accumulates the absolute value of every octave, so each
// term is non-negative and the field reads as rounded, billowy lumps.
pub struct Billow<'a> {
    source: &'a dyn NoiseModule,
    frequency: f64,
    lacunarity: f64,
    persistence: f64,
    octaves: usize,
}

impl<'a> Billow<'a> {
    pub fn new(source: &'a dyn NoiseModule) -> Self {
        Self {
            source,
            frequency: DEFAULT_FREQUENCY,
            lacunarity: DEFAULT_LACUNARITY,
            persistence: 0.5,
            octaves: DEFAULT_OCTAVES,
        }
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    pub fn set_lacunarity(&mut self, lacunarity: f64) {
        self.lacunarity = lacunarity;
    }

    pub fn set_persistence(&mut self, persistence: f64) {
        self.persistence = persistence;
    }

    pub fn set_octaves(&mut self, octaves: usize) -> Result<(), ConfigError> {
        if octaves < 1 {
            return Err(ConfigError::InvalidOctaveCount);
        }
        self.octaves = octaves;
        Ok(())
    }

    fn eval(&self, pos: &[f64]) -> f64 {
        let n = pos.len();
        let mut p = scaled(pos, self.frequency);
        let mut amplitude = 1.0;
        let mut total = 0.0;
        for _ in 0..self.octaves {
            total += sample(self.source, &p[..n]).abs() * amplitude;
            for c in &mut p[..n] {
                *c *= self.lacunarity;
            }
            amplitude *= self.persistence;
        }
        total
    }
}

impl NoiseModule for Billow<'_> {
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

// Ridged multifractal. Each octave folds the source around `offset`,
// squares it, and scales it by a weight fed back from the previous
// octave; the feedback weight is clamped to [0, 1] before it enters
// the next octave. Octave contributions are spectrally damped by
// frequency^(-sharpness).
pub struct RidgedMulti<'a> {
    source: &'a dyn NoiseModule,
    frequency: f64,
    lacunarity: f64,
    octaves: usize,
    offset: f64,
    gain: f64,
    sharpness: f64,
}

impl<'a> RidgedMulti<'a> {
    pub fn new(source: &'a dyn NoiseModule) -> Self {
        Self {
            source,
            frequency: DEFAULT_FREQUENCY,
            lacunarity: DEFAULT_LACUNARITY,
            octaves: DEFAULT_OCTAVES,
            offset: 1.0,
            gain: 2.0,
            sharpness: 1.0,
        }
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    pub fn set_lacunarity(&mut self, lacunarity: f64) {
        self.lacunarity = lacunarity;
    }

    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    pub fn set_gain(&mut self, gain: f64) {
        self.gain = gain;
    }

    pub fn set_sharpness(&mut self, sharpness: f64) {
        self.sharpness = sharpness;
    }

    pub fn set_octaves(&mut self, octaves: usize) -> Result<(), ConfigError> {
        if octaves < 1 {
            return Err(ConfigError::InvalidOctaveCount);
        }
        self.octaves = octaves;
        Ok(())
    }

    fn eval(&self, pos: &[f64]) -> f64 {
        let n = pos.len();
        let mut p = scaled(pos, self.frequency);
        let mut weight = 1.0;
        let mut spectral_freq = self.frequency;
        let mut total = 0.0;
        for _ in 0..self.octaves {
            let mut signal = sample(self.source, &p[..n]).abs();
            signal = self.offset - signal;
            signal *= signal;
            signal *= weight;
            // Feedback for the next octave, kept inside [0, 1]
            weight = (signal * self.gain).clamp(0.0, 1.0);
            total += signal * spectral_freq.powf(-self.sharpness);

            spectral_freq *= self.lacunarity;
            for c in &mut p[..n] {
                *c *= self.lacunarity;
            }
        }
        total * 1.25 - 1.0
    }
}

impl NoiseModule for RidgedMulti<'_> {
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
