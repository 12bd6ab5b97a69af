use crate::NoiseModule;

const JITTER_SALTS: [u64; 6] = [
    0xB529_7A4D_3F61_E2C9,
    0x6C62_272E_07BB_0142,
    0x517C_C1B7_2722_0A95,
    0x2545_F491_4F6C_DD1D,
    0xFF51_AFD7_ED55_8CCD,
    0xC4CE_B9FE_1A85_EC53,
];

#[inline]
fn mix(v: u64) -> u64 {
    let mut h = v.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    h ^= h >> 33;
    h = h.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    h ^ (h >> 33)
}

// Cellular noise: space is partitioned by jittered seed points, one
// per integer cell, and a query returns a per-cell pseudo-random value
// plus (optionally) the distance to the nearest seed point.
//
// The candidate scan covers every cell within a 2-cell radius per
// axis, 5^n cells at arity n. That grows steeply with dimension; 6D
// queries visit 15625 cells.
pub struct Voronoi {
    seed: u64,
    frequency: f64,
    displacement: f64,
    enable_distance: bool,
}

impl Voronoi {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            frequency: 1.0,
            displacement: 1.0,
            enable_distance: false,
        }
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    // Scales the per-cell random contribution
    pub fn set_displacement(&mut self, displacement: f64) {
        self.displacement = displacement;
    }

    // When enabled, the distance to the winning seed point is added to
    // the result, normalized by sqrt(arity) and shifted down by 1
    pub fn enable_distance(&mut self, enable: bool) {
        self.enable_distance = enable;
    }

    // Jittered offset of a cell's seed point along one axis, in [-1, 1]
    fn jitter(&self, cell: &[i64], axis: usize) -> f64 {
        let mut h = self.seed ^ JITTER_SALTS[axis];
        for &c in cell {
            h = mix(h ^ c as u64);
        }
        (h >> 11) as f64 / (1u64 << 52) as f64 - 1.0
    }

    // Per-cell pseudo-random value in [-1, 1]
    fn cell_value(&self, cell: &[i64]) -> f64 {
        let mut h = mix(self.seed);
        for &c in cell {
            h = mix(h ^ c as u64);
        }
        (h >> 11) as f64 / (1u64 << 52) as f64 - 1.0
    }

    fn eval(&self, pos: &[f64]) -> f64 {
        let n = pos.len();
        let mut p = [0.0f64; 6];
        let mut origin = [0i64; 6];
        for i in 0..n {
            p[i] = pos[i] * self.frequency;
            origin[i] = p[i].floor() as i64;
        }

        let mut best_dist = f64::MAX;
        let mut best_cell = [0i64; 6];

        // Odometer over the offsets [-2, 2]^n
        let mut off = [-2i64; 6];
        'scan: loop {
            let mut cand = [0i64; 6];
            let mut dist = 0.0;
            for i in 0..n {
                cand[i] = origin[i] + off[i];
            }
            for i in 0..n {
                let seed_pt = cand[i] as f64 + self.jitter(&cand[..n], i);
                let d = seed_pt - p[i];
                dist += d * d;
            }
            if dist < best_dist {
                best_dist = dist;
                best_cell = cand;
            }

            let mut axis = 0;
            loop {
                off[axis] += 1;
                if off[axis] <= 2 {
                    break;
                }
                off[axis] = -2;
                axis += 1;
                if axis == n {
                    break 'scan;
                }
            }
        }

        let mut value = self.displacement * self.cell_value(&best_cell[..n]);
        if self.enable_distance {
            value += best_dist.sqrt() * (n as f64).sqrt() - 1.0;
        }
        value
    }
}

impl NoiseModule for Voronoi {
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
