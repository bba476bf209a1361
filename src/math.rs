use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// 2D vector primitives
// ---------------------------------------------------------------------------

/// World-frame 2D vector (x toward the launch meridian, y prograde east).
pub type Vec2 = Vector2<f64>;

/// Rotate a vector counter-clockwise by `angle` radians.
pub fn rotate(v: &Vec2, angle: f64) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Unit vector in the direction of `v`, or zero when `v` is zero.
pub fn normalize_or_zero(v: &Vec2) -> Vec2 {
    let mag = v.norm();
    if mag > 0.0 {
        v / mag
    } else {
        Vec2::zeros()
    }
}

/// Scalar z-component of the 3D cross product of two in-plane vectors.
pub fn cross_z(a: &Vec2, b: &Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Linear interpolation from `a` to `b` by fraction `t`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
