/// The field starts tilted a quarter turn; the opening animation settles it
/// to 0 and interaction is gated until then.
pub const START_ANGLE: f32 = -90.0;

/// One press of the rotate control.
pub const ROTATION_STEP_DEG: f32 = 180.0;

pub fn normalize_angle(mut angle: f32) -> f32 {
    angle %= 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    angle
}

pub fn is_start_angle(angle: f32) -> bool {
    angle == START_ANGLE
}

/// Whether the view reads upside-down: the angle is nearer to a half turn
/// than to upright (190 counts, 90 does not).
pub fn is_upside_down_angle(angle: f32) -> bool {
    (normalize_angle(angle) - 180.0).abs() < 90.0
}

/// Blend coefficient between straight (1.0) and upside-down (0.0) digit
/// positions, linear in the animated angle.
pub fn animation_coeff(animated_angle: f32) -> f32 {
    (normalize_angle(animated_angle) / 180.0 - 1.0).abs()
}
