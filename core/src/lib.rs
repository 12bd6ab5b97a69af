// core holds the composable noise module graph: coherent-noise
// primitives, fractal combinators, point/value transforms, threshold
// blending and the memoizing cache
pub mod cache;
pub mod error;
pub mod fractal;
pub mod interp;
pub mod modifier;
pub mod pattern;
pub mod perlin;
pub mod perm;
pub mod select;
pub mod transform;
pub mod value;
pub mod voronoi;

pub use cache::Cache;
pub use error::ConfigError;
pub use fractal::{Billow, Fbm, RidgedMulti};
pub use interp::Quality;
pub use modifier::{Bound, Clamp, Curve, Exponent, ScaleBias};
pub use pattern::{Checkerboard, Constant, Cylinders, Spheres};
pub use perlin::Perlin;
pub use select::Select;
pub use transform::{RotatePoint, ScalePoint, TranslatePoint};
pub use value::Value;
pub use voronoi::Voronoi;

// A noise module maps a 1/2/3/4/6-dimensional position to a value.
// Every module implements `get1`; each higher arity defaults to
// dropping the trailing coordinate and delegating to the next-lower
// arity, so a 2D-only module evaluated at 3D ignores z and samples
// at (x, y). 5-axis positions are intentionally unsupported.
//
// Modules are `Sync`: a composed graph may be evaluated from many
// threads at once. Configuration setters take `&mut self`, so the
// borrow checker rules out concurrent reconfiguration by construction.
pub trait NoiseModule: Sync {
    // Sample at a 1D position.
    fn get1(&self, x: f64) -> f64;

    // Sample at a 2D position.
    fn get2(&self, x: f64, _y: f64) -> f64 {
        self.get1(x)
    }

    // Sample at a 3D position.
    fn get3(&self, x: f64, y: f64, _z: f64) -> f64 {
        self.get2(x, y)
    }

    // Sample at a 4D position.
    fn get4(&self, x: f64, y: f64, z: f64, _w: f64) -> f64 {
        self.get3(x, y, z)
    }

    // Sample at a 6D position.
    fn get6(&self, x: f64, y: f64, z: f64, w: f64, _u: f64, _v: f64) -> f64 {
        self.get4(x, y, z, w)
    }
}

// Dispatch a coordinate slice to the matching arity entry point.
// Combinators use this to forward whatever arity they were called at.
pub(crate) fn sample(module: &dyn NoiseModule, pos: &[f64]) -> f64 {
    match pos {
        [x] => module.get1(*x),
        [x, y] => module.get2(*x, *y),
        [x, y, z] => module.get3(*x, *y, *z),
        [x, y, z, w] => module.get4(*x, *y, *z, *w),
        [x, y, z, w, u, v] => module.get6(*x, *y, *z, *w, *u, *v),
        p => panic!("unsupported position arity: {}", p.len()),
    }
}
