// Interpolation weights shared by the lattice-based primitives.

// How the fractional lattice offset is turned into a blend weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    // Nearest corner, no blending at all
    Point,
    // Raw fractional offset
    Linear,
    // 3t^2 - 2t^3, continuous first derivative
    Cubic,
    // 6t^5 - 15t^4 + 10t^3, continuous first and second derivatives
    #[default]
    Quintic,
}

impl Quality {
    // Map a fractional offset t in [0,1) to the per-axis blend weight
    #[inline]
    pub(crate) fn weight(self, t: f64) -> f64 {
        match self {
            Quality::Point => {
                if t < 0.5 {
                    0.0
                } else {
                    1.0
                }
            }
            Quality::Linear => t,
            Quality::Cubic => t * t * (3.0 - 2.0 * t),
            Quality::Quintic => t * t * t * (t * (t * 6.0 - 15.0) + 10.0),
        }
    }
}

// Linear interpolation
#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

// Cubic smoothstep used by Select's falloff bands
#[inline]
pub(crate) fn scurve3(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

// Cubic interpolation through four knots, sampled between n1 and n2
#[inline]
pub(crate) fn cubic(n0: f64, n1: f64, n2: f64, n3: f64, a: f64) -> f64 {
    let p = (n3 - n2) - (n0 - n1);
    let q = (n0 - n1) - p;
    let r = n2 - n0;
    let s = n1;
    p * a * a * a + q * a * a + r * a + s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_fix_the_endpoints() {
        for q in [Quality::Point, Quality::Linear, Quality::Cubic, Quality::Quintic] {
            assert_eq!(q.weight(0.0), 0.0);
        }
        // Quintic and cubic are flat at the endpoints, linear is not
        assert_eq!(Quality::Quintic.weight(1.0), 1.0);
        assert_eq!(Quality::Cubic.weight(1.0), 1.0);
        assert_eq!(Quality::Linear.weight(0.25), 0.25);
    }

    #[test]
    fn point_weight_snaps_to_nearest_corner() {
        assert_eq!(Quality::Point.weight(0.49), 0.0);
        assert_eq!(Quality::Point.weight(0.51), 1.0);
    }

    #[test]
    fn cubic_passes_through_inner_knots() {
        assert!((cubic(0.0, 1.0, 2.0, 3.0, 0.0) - 1.0).abs() < 1e-12);
        assert!((cubic(0.0, 1.0, 2.0, 3.0, 1.0) - 2.0).abs() < 1e-12);
    }
}
