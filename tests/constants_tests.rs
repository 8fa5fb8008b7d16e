// Host-side tests for tuning constants and their relationships.

use field_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_SIZE_MIN > 0.0);
    assert!(PARTICLE_SIZE_VARIATION >= 0.0);
    assert!(MOUSE_EFFECT_RADIUS > 0.0);
    assert!(MOUSE_EFFECT_FORCE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Drift range must be non-empty and slow compared to the push radius
    assert!(PARTICLE_VELOCITY_MAX > PARTICLE_VELOCITY_MIN);
    assert!(PARTICLE_VELOCITY_MAX < MOUSE_EFFECT_RADIUS);

    // Sentinel pointer must sit further than one effect radius from the origin
    let [sx, sy] = POINTER_SENTINEL;
    assert!(sx + MOUSE_EFFECT_RADIUS < 0.0);
    assert!(sy + MOUSE_EFFECT_RADIUS < 0.0);
}

#[test]
fn default_params_mirror_constants() {
    let p = FieldParams::default();
    assert_eq!(p.size_min, PARTICLE_SIZE_MIN);
    assert_eq!(p.size_variation, PARTICLE_SIZE_VARIATION);
    assert_eq!(p.velocity_min, PARTICLE_VELOCITY_MIN);
    assert_eq!(p.velocity_max, PARTICLE_VELOCITY_MAX);
    assert_eq!(p.effect_radius, MOUSE_EFFECT_RADIUS);
    assert_eq!(p.effect_strength, MOUSE_EFFECT_FORCE);
}

#[test]
fn particle_color_is_translucent_gray() {
    assert!(PARTICLE_COLOR.starts_with("rgba("));
    assert!(PARTICLE_COLOR.contains("94, 94, 94"));
}
