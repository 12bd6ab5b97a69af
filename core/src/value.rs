use crate::NoiseModule;
use crate::interp::Quality;

// Per-axis salts keep the lattice hash from repeating along diagonals
const AXIS_SALTS: [u64; 6] = [
    0x8E31_5B8D_6F3E_94D1,
    0xC2B2_AE3D_27D4_EB4F,
    0x1656_67B1_9E37_79F9,
    0x27D4_EB2F_1656_67C5,
    0x9E37_79B9_7F4A_7C15,
    0x3C6E_F372_FE94_F82B,
];

// splitmix64-style finalizer; fixed multiplicative/xorshift mix
#[inline]
fn mix(v: u64) -> u64 {
    let mut h = v.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    h ^= h >> 30;
    h = h.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    h ^= h >> 27;
    h = h.wrapping_mul(0x94D0_49BB_1331_11EB);
    h ^ (h >> 31)
}

// Map the top 53 hash bits onto [-1, 1]
#[inline]
fn to_unit(h: u64) -> f64 {
    (h >> 11) as f64 / (1u64 << 52) as f64 - 1.0
}

// Value coherent noise: a pseudo-random value in [-1, 1] is pinned to
// every integer lattice point and blended with the Quality-selected
// interpolant. No permutation table; each axis coordinate is hashed
// independently and folded into the seed.
pub struct Value {
    seed: u64,
    frequency: f64,
    quality: Quality,
}

impl Value {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            frequency: 1.0,
            quality: Quality::default(),
        }
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    pub fn set_quality(&mut self, quality: Quality) {
        self.quality = quality;
    }

    // The lattice value at one corner of the containing cell
    fn lattice(&self, cell: &[i64], corner: usize) -> f64 {
        let mut h = self.seed;
        for (i, &c) in cell.iter().enumerate() {
            let coord = c + ((corner >> i) & 1) as i64;
            h = mix(h ^ mix(coord as u64 ^ AXIS_SALTS[i]));
        }
        to_unit(h)
    }

    fn eval(&self, pos: &[f64]) -> f64 {
        let n = pos.len();
        let mut cell = [0i64; 6];
        let mut weight = [0.0f64; 6];
        for i in 0..n {
            let f = (pos[i] * self.frequency).floor();
            cell[i] = f as i64;
            weight[i] = self.quality.weight(pos[i] * self.frequency - f);
        }

        let mut result = 0.0;
        for corner in 0..(1usize << n) {
            let mut blend = 1.0;
            for i in 0..n {
                let w = weight[i];
                blend *= if (corner >> i) & 1 == 0 { 1.0 - w } else { w };
            }
            result += blend * self.lattice(&cell[..n], corner);
        }
        result
    }
}

impl NoiseModule for Value {
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
