use crate::NoiseModule;

// Always returns the same value. Useful as a Select input or as a
// fixed term in a larger graph.
pub struct Constant {
    value: f64,
}

impl Constant {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

impl NoiseModule for Constant {
    fn get1(&self, _x: f64) -> f64 {
        self.value
    }
}

// Unit checkerboard: -1 or +1 depending on the parity of the floored
// coordinates. Each arity folds in its own axes, so the pattern
// alternates along every dimension it is queried at.
#[derive(Default)]
pub struct Checkerboard;

impl Checkerboard {
    pub fn new() -> Self {
        Self
    }
}

fn parity(pos: &[f64]) -> f64 {
    let mut bit = 0i64;
    for &c in pos {
        bit ^= (c.floor() as i64) & 1;
    }
    if bit == 0 { -1.0 } else { 1.0 }
}

impl NoiseModule for Checkerboard {
    fn get1(&self, x: f64) -> f64 {
        parity(&[x])
    }

    fn get2(&self, x: f64, y: f64) -> f64 {
        parity(&[x, y])
    }

    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        parity(&[x, y, z])
    }

    fn get4(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        parity(&[x, y, z, w])
    }

    fn get6(&self, x: f64, y: f64, z: f64, w: f64, u: f64, v: f64) -> f64 {
        parity(&[x, y, z, w, u, v])
    }
}

// Distance to the nearest integer radius, remapped so ring centers
// peak at +1 and the midpoints between rings bottom out at -1
fn ring(dist: f64) -> f64 {
    let small = dist - dist.floor();
    let large = 1.0 - small;
    1.0 - small.min(large) * 4.0
}

// Concentric cylinders around the axis orthogonal to the (x, y)
// plane. Higher arities drop down to the 2D form.
pub struct Cylinders {
    frequency: f64,
}

impl Cylinders {
    pub fn new() -> Self {
        Self { frequency: 1.0 }
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }
}

impl Default for Cylinders {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseModule for Cylinders {
    fn get1(&self, x: f64) -> f64 {
        ring((x * self.frequency).abs())
    }

    fn get2(&self, x: f64, y: f64) -> f64 {
        let x = x * self.frequency;
        let y = y * self.frequency;
        ring((x * x + y * y).sqrt())
    }
}

// Concentric spheres around the origin, using every queried axis
pub struct Spheres {
    frequency: f64,
}

impl Spheres {
    pub fn new() -> Self {
        Self { frequency: 1.0 }
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }
}

impl Default for Spheres {
    fn default() -> Self {
        Self::new()
    }
}

impl Spheres {
    fn eval(&self, pos: &[f64]) -> f64 {
        let mut dist = 0.0;
        for &c in pos {
            let c = c * self.frequency;
            dist += c * c;
        }
        ring(dist.sqrt())
    }
}

impl NoiseModule for Spheres {
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
