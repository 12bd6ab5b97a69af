use crate::error::ConfigError;
use crate::interp::cubic;
use crate::{NoiseModule, sample};

// Multiply-then-add on the source's output value
pub struct ScaleBias<'a> {
    source: &'a dyn NoiseModule,
    scale: f64,
    bias: f64,
}

impl<'a> ScaleBias<'a> {
    pub fn new(source: &'a dyn NoiseModule) -> Self {
        Self {
            source,
            scale: 1.0,
            bias: 0.0,
        }
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }

    fn eval(&self, pos: &[f64]) -> f64 {
        sample(self.source, pos) * self.scale + self.bias
    }
}

impl NoiseModule for ScaleBias<'_> {
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

// A clamp bound: either a fixed constant or another module evaluated
// at the same position as the query
pub enum Bound<'a> {
    Constant(f64),
    Module(&'a dyn NoiseModule),
}

impl Bound<'_> {
    fn at(&self, pos: &[f64]) -> f64 {
        match self {
            Bound::Constant(v) => *v,
            Bound::Module(m) => sample(*m, pos),
        }
    }
}

// Clamps the source's output between a lower and an upper bound.
// Constant bounds are validated at assignment; module bounds are read
// per query, and keeping them ordered is the caller's contract.
pub struct Clamp<'a> {
    source: &'a dyn NoiseModule,
    lower: Bound<'a>,
    upper: Bound<'a>,
}

impl<'a> Clamp<'a> {
    pub fn new(source: &'a dyn NoiseModule) -> Self {
        Self {
            source,
            lower: Bound::Constant(-1.0),
            upper: Bound::Constant(1.0),
        }
    }

    pub fn set_bounds(&mut self, lower: Bound<'a>, upper: Bound<'a>) -> Result<(), ConfigError> {
        if let (Bound::Constant(lo), Bound::Constant(up)) = (&lower, &upper) {
            if lo > up {
                return Err(ConfigError::InvertedBounds {
                    lower: *lo,
                    upper: *up,
                });
            }
        }
        self.lower = lower;
        self.upper = upper;
        Ok(())
    }

    fn eval(&self, pos: &[f64]) -> f64 {
        let v = sample(self.source, pos);
        let lower = self.lower.at(pos);
        let upper = self.upper.at(pos);
        if v < lower {
            lower
        } else if v > upper {
            upper
        } else {
            v
        }
    }
}

impl NoiseModule for Clamp<'_> {
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

// Remaps the source's [-1, 1] output through a power curve:
// pow(|(v + 1) / 2|, exponent) * 2 - 1
pub struct Exponent<'a> {
    source: &'a dyn NoiseModule,
    exponent: f64,
}

impl<'a> Exponent<'a> {
    pub fn new(source: &'a dyn NoiseModule) -> Self {
        Self {
            source,
            exponent: 1.0,
        }
    }

    pub fn set_exponent(&mut self, exponent: f64) {
        self.exponent = exponent;
    }

    fn eval(&self, pos: &[f64]) -> f64 {
        let v = sample(self.source, pos);
        ((v + 1.0) / 2.0).abs().powf(self.exponent) * 2.0 - 1.0
    }
}

impl NoiseModule for Exponent<'_> {
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

#[derive(Debug, Clone, Copy)]
struct ControlPoint {
    input: f64,
    output: f64,
}

// Maps the source's output through a user-supplied 1D curve, a cubic
// spline through control points kept sorted by input value. At least
// four points are required before the curve can be evaluated.
pub struct Curve<'a> {
    source: &'a dyn NoiseModule,
    points: Vec<ControlPoint>,
}

impl<'a> Curve<'a> {
    pub fn new(source: &'a dyn NoiseModule) -> Self {
        Self {
            source,
            points: Vec::new(),
        }
    }

    // Insert a control point, keeping the list sorted by input value.
    // A duplicate input value is rejected and the curve is unchanged.
    pub fn add_control_point(&mut self, input: f64, output: f64) -> Result<(), ConfigError> {
        if self.points.iter().any(|cp| cp.input == input) {
            return Err(ConfigError::DuplicateControlPoint(input));
        }
        let at = self.points.partition_point(|cp| cp.input < input);
        self.points.insert(at, ControlPoint { input, output });
        Ok(())
    }

    pub fn clear_control_points(&mut self) {
        self.points.clear();
    }

    fn eval(&self, pos: &[f64]) -> f64 {
        assert!(
            self.points.len() >= 4,
            "curve requires at least four control points"
        );
        let v = sample(self.source, pos);

        // First point whose input exceeds the source value
        let pos_idx = self.points.partition_point(|cp| cp.input <= v) as isize;
        let last = self.points.len() as isize - 1;
        let i0 = (pos_idx - 2).clamp(0, last) as usize;
        let i1 = (pos_idx - 1).clamp(0, last) as usize;
        let i2 = pos_idx.clamp(0, last) as usize;
        let i3 = (pos_idx + 1).clamp(0, last) as usize;

        // Off the ends of the curve: no span to interpolate across
        if i1 == i2 {
            return self.points[i1].output;
        }

        let in1 = self.points[i1].input;
        let in2 = self.points[i2].input;
        let alpha = (v - in1) / (in2 - in1);
        cubic(
            self.points[i0].output,
            self.points[i1].output,
            self.points[i2].output,
            self.points[i3].output,
            alpha,
        )
    }
}

impl NoiseModule for Curve<'_> {
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

#[cfg(test)]
mod tests {
    use super::{Bound, Clamp, Curve, Exponent, ScaleBias};
    use crate::error::ConfigError;
    use crate::pattern::Constant;
    use crate::perlin::Perlin;
    use crate::NoiseModule;

    #[test]
    fn scale_bias_multiplies_then_adds() {
        let source = Constant::new(0.5);
        let mut sb = ScaleBias::new(&source);
        sb.set_scale(4.0);
        sb.set_bias(1.0);
        assert_eq!(sb.get1(0.0), 3.0);
    }

    #[test]
    fn clamp_with_constant_bounds() {
        let source = Constant::new(5.0);
        let mut clamp = Clamp::new(&source);
        clamp
            .set_bounds(Bound::Constant(-0.5), Bound::Constant(0.5))
            .unwrap();
        assert_eq!(clamp.get1(0.0), 0.5);
    }

    #[test]
    fn clamp_rejects_inverted_constant_bounds() {
        let source = Constant::new(0.0);
        let mut clamp = Clamp::new(&source);
        clamp
            .set_bounds(Bound::Constant(-0.25), Bound::Constant(0.25))
            .unwrap();
        let err = clamp.set_bounds(Bound::Constant(1.0), Bound::Constant(-1.0));
        assert_eq!(
            err,
            Err(ConfigError::InvertedBounds {
                lower: 1.0,
                upper: -1.0
            })
        );
        // Previous bounds still apply
        let wide = Constant::new(9.0);
        let mut probe = Clamp::new(&wide);
        probe
            .set_bounds(Bound::Constant(-0.25), Bound::Constant(0.25))
            .unwrap();
        assert_eq!(clamp.get1(0.0), 0.0);
        assert_eq!(probe.get1(0.0), 0.25);
    }

    #[test]
    fn clamp_with_module_bounds_follows_the_position() {
        let source = Constant::new(10.0);
        let ceiling = Perlin::new(4);
        let mut clamp = Clamp::new(&source);
        clamp
            .set_bounds(Bound::Constant(-10.0), Bound::Module(&ceiling))
            .unwrap();
        // Source always exceeds the ceiling, so the clamp tracks it
        assert_eq!(clamp.get2(0.3, 0.7), ceiling.get2(0.3, 0.7));
    }

    #[test]
    fn exponent_one_is_identity() {
        let source = Constant::new(0.42);
        let exp = Exponent::new(&source);
        assert!((exp.get1(0.0) - 0.42).abs() < 1e-12);
    }

    #[test]
    fn exponent_pulls_values_toward_minus_one() {
        let source = Constant::new(0.0);
        let mut exp = Exponent::new(&source);
        exp.set_exponent(2.0);
        // (0.5)^2 * 2 - 1 = -0.5
        assert!((exp.get1(0.0) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn curve_passes_through_control_points() {
        let source = Constant::new(0.5);
        let mut curve = Curve::new(&source);
        curve.add_control_point(-1.0, -1.0).unwrap();
        curve.add_control_point(0.0, 0.25).unwrap();
        curve.add_control_point(0.5, 0.75).unwrap();
        curve.add_control_point(1.0, 1.0).unwrap();
        // Source value 0.5 is exactly a control point
        assert!((curve.get1(0.0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn curve_clamps_outside_the_control_range() {
        let source = Constant::new(5.0);
        let mut curve = Curve::new(&source);
        for (i, o) in [(-1.0, -1.0), (-0.5, 0.0), (0.5, 0.5), (1.0, 1.0)] {
            curve.add_control_point(i, o).unwrap();
        }
        assert_eq!(curve.get1(0.0), 1.0);
    }

    #[test]
    fn curve_rejects_duplicate_inputs() {
        let source = Constant::new(0.0);
        let mut curve = Curve::new(&source);
        curve.add_control_point(0.25, 1.0).unwrap();
        assert_eq!(
            curve.add_control_point(0.25, 2.0),
            Err(ConfigError::DuplicateControlPoint(0.25))
        );
    }

    #[test]
    #[should_panic]
    fn curve_requires_four_points_at_evaluate() {
        let source = Constant::new(0.0);
        let mut curve = Curve::new(&source);
        curve.add_control_point(0.0, 0.0).unwrap();
        curve.add_control_point(1.0, 1.0).unwrap();
        let _ = curve.get1(0.0);
    }
}
