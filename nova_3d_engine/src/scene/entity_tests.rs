/// Tests for entity components and light placement

use super::*;
use glam::Quat;

fn assert_vec_near(a: Vec3, b: Vec3) {
    assert!((a - b).length() < 1e-5, "{:?} != {:?}", a, b);
}

#[test]
fn test_point_light_takes_translation() {
    let transform = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let light = LightComponent::Point { color: Vec3::ONE, intensity: 4.0 };

    match light.to_world(&transform) {
        WorldLight::Point(p) => {
            assert_eq!(p.position, Vec3::new(1.0, 2.0, 3.0));
            assert_eq!(p.intensity, 4.0);
        }
        other => panic!("expected point light, got {:?}", other),
    }
}

#[test]
fn test_spot_light_direction_is_normalized_z_axis() {
    // Scaled and rotated so the Z column is long and points along -Y
    let transform = Mat4::from_scale_rotation_translation(
        Vec3::splat(3.0),
        Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
        Vec3::new(0.0, 5.0, 0.0),
    );
    let light = LightComponent::Spot {
        color: Vec3::X,
        intensity: 1.0,
        inner_cutoff: 0.9,
        outer_cutoff: 0.8,
    };

    match light.to_world(&transform) {
        WorldLight::Spot(s) => {
            assert_vec_near(s.position, Vec3::new(0.0, 5.0, 0.0));
            assert_vec_near(s.direction, Vec3::NEG_Y);
            assert_eq!(s.inner_cutoff, 0.9);
            assert_eq!(s.outer_cutoff, 0.8);
        }
        other => panic!("expected spot light, got {:?}", other),
    }
}

#[test]
fn test_directional_light_keeps_shadow_settings() {
    let component = LightComponent::Directional(DirectionalLight {
        direction: Vec3::X,
        casts_shadows: true,
        num_cascades: 3,
        ..Default::default()
    });

    match component.to_world(&Mat4::IDENTITY) {
        WorldLight::Directional(d) => {
            assert_vec_near(d.direction, Vec3::Z);
            assert!(d.casts_shadows);
            assert_eq!(d.num_cascades, 3);
        }
        other => panic!("expected directional light, got {:?}", other),
    }
}

#[test]
fn test_degenerate_basis_falls_back_to_down() {
    let light = LightComponent::Spot {
        color: Vec3::ONE,
        intensity: 1.0,
        inner_cutoff: 1.0,
        outer_cutoff: 0.5,
    };

    match light.to_world(&Mat4::ZERO) {
        WorldLight::Spot(s) => assert_eq!(s.direction, Vec3::NEG_Y),
        other => panic!("expected spot light, got {:?}", other),
    }
}

#[test]
fn test_sky_light_ignores_transform() {
    let light = LightComponent::Sky { color: Vec3::new(0.2, 0.3, 0.4), intensity: 0.5 };
    let world = light.to_world(&Mat4::from_translation(Vec3::splat(100.0)));
    assert_eq!(
        world,
        WorldLight::Sky(SkyLight { color: Vec3::new(0.2, 0.3, 0.4), intensity: 0.5 })
    );
}

#[test]
fn test_mesh_renderer_requires_both_halves() {
    let empty = MeshRendererComponent::default();
    assert!(empty.drawable().is_none());

    let entity = Entity::new("light").with_transform(Mat4::IDENTITY);
    assert_eq!(entity.name, "light");
    assert!(entity.mesh_renderer.is_none());
    assert!(entity.light.is_none());
}
