use glam::{DMat2, DMat3, DVec2, DVec3};

use crate::{NoiseModule, sample};

// Multiplies each incoming coordinate by a per-axis factor before
// delegating to the source. Pure coordinate-space change.
pub struct ScalePoint<'a> {
    source: &'a dyn NoiseModule,
    factors: [f64; 6],
}

impl<'a> ScalePoint<'a> {
    pub fn new(source: &'a dyn NoiseModule) -> Self {
        Self {
            source,
            factors: [1.0; 6],
        }
    }

    pub fn set_factors(&mut self, factors: [f64; 6]) {
        self.factors = factors;
    }

    pub fn set_uniform_factor(&mut self, factor: f64) {
        self.factors = [factor; 6];
    }

    fn eval(&self, pos: &[f64]) -> f64 {
        let mut p = [0.0f64; 6];
        for i in 0..pos.len() {
            p[i] = pos[i] * self.factors[i];
        }
        sample(self.source, &p[..pos.len()])
    }
}

impl NoiseModule for ScalePoint<'_> {
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

// Adds a per-axis offset to the incoming position before delegating
pub struct TranslatePoint<'a> {
    source: &'a dyn NoiseModule,
    offsets: [f64; 6],
}

impl<'a> TranslatePoint<'a> {
    pub fn new(source: &'a dyn NoiseModule) -> Self {
        Self {
            source,
            offsets: [0.0; 6],
        }
    }

    pub fn set_offsets(&mut self, offsets: [f64; 6]) {
        self.offsets = offsets;
    }

    fn eval(&self, pos: &[f64]) -> f64 {
        let mut p = [0.0f64; 6];
        for i in 0..pos.len() {
            p[i] = pos[i] + self.offsets[i];
        }
        sample(self.source, &p[..pos.len()])
    }
}

impl NoiseModule for TranslatePoint<'_> {
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

// Rotates the incoming position around the origin before delegating.
// Supports 2D (one angle) and 3D (x/y/z angles, applied x, then y,
// then z). A 1D rotation is the identity, so get1 passes straight
// through; 4D and 6D have no rotation matrix and panic.
pub struct RotatePoint<'a> {
    source: &'a dyn NoiseModule,
    mat2: DMat2,
    mat3: DMat3,
}

impl<'a> RotatePoint<'a> {
    pub fn new(source: &'a dyn NoiseModule) -> Self {
        Self {
            source,
            mat2: DMat2::IDENTITY,
            mat3: DMat3::IDENTITY,
        }
    }

    // Rotation angle, in radians, for 2D evaluation
    pub fn set_angle(&mut self, radians: f64) {
        self.mat2 = DMat2::from_angle(radians);
    }

    // Per-axis rotation angles, in radians, for 3D evaluation
    pub fn set_angles(&mut self, x: f64, y: f64, z: f64) {
        self.mat3 =
            DMat3::from_rotation_z(z) * DMat3::from_rotation_y(y) * DMat3::from_rotation_x(x);
    }
}

impl NoiseModule for RotatePoint<'_> {
    fn get1(&self, x: f64) -> f64 {
        self.source.get1(x)
    }

    fn get2(&self, x: f64, y: f64) -> f64 {
        let p = self.mat2 * DVec2::new(x, y);
        self.source.get2(p.x, p.y)
    }

    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        let p = self.mat3 * DVec3::new(x, y, z);
        self.source.get3(p.x, p.y, p.z)
    }

    fn get4(&self, _x: f64, _y: f64, _z: f64, _w: f64) -> f64 {
        panic!("rotate_point supports only 2D and 3D positions");
    }

    fn get6(&self, _x: f64, _y: f64, _z: f64, _w: f64, _u: f64, _v: f64) -> f64 {
        panic!("rotate_point supports only 2D and 3D positions");
    }
}
