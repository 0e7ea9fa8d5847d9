use super::*;
use std::mem::size_of;

fn point(i: usize) -> PointLight {
    PointLight {
        color: Vec3::ONE,
        intensity: i as f32,
        position: Vec3::new(i as f32, 0.0, 0.0),
    }
}

#[test]
fn test_gpu_layout_sizes() {
    assert_eq!(size_of::<PointLightData>(), 32);
    assert_eq!(size_of::<SpotLightData>(), 48);
    assert_eq!(size_of::<DirectionalLightData>(), 32);
    assert_eq!(size_of::<SkyLightData>(), 16);
    assert_eq!(size_of::<RendererParameters>(), 32);
    assert_eq!(size_of::<ShadowHeader>() % 16, 0);
    assert_eq!(size_of::<SceneData>() % 16, 0);
}

#[test]
fn test_gpu_matrix_is_row_major() {
    let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let rows = to_gpu_matrix(&m);
    assert_eq!(rows[0], [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(rows[2], [0.0, 0.0, 1.0, 3.0]);
}

#[test]
fn test_scene_data_packs_lights() {
    let camera = Camera::new(Mat4::IDENTITY, Mat4::IDENTITY, Vec3::new(0.0, 1.0, 2.0));
    let points: Vec<_> = (0..3).map(point).collect();
    let sky = [SkyLight { color: Vec3::ONE, intensity: 0.3 }];

    let data = SceneData::new(&camera, &points, &[], &[], &sky);

    assert_eq!(data.num_point_lights, 3);
    assert_eq!(data.num_spot_lights, 0);
    assert_eq!(data.num_sky_lights, 1);
    assert_eq!(data.point_lights[2].position, [2.0, 0.0, 0.0]);
    assert_eq!(data.camera_position, [0.0, 1.0, 2.0, 1.0]);
}

#[test]
fn test_scene_data_never_exceeds_capacity() {
    let camera = Camera::default();
    let points: Vec<_> = (0..40).map(point).collect();

    let data = SceneData::new(&camera, &points, &[], &[], &[]);

    assert_eq!(data.num_point_lights as usize, MAX_LIGHTS_PER_KIND);
    assert_eq!(data.point_lights[31].intensity, 31.0);
}

#[test]
fn test_directional_caster_indices() {
    let caster = DirectionalLight { casts_shadows: true, ..Default::default() };
    let plain = DirectionalLight::default();

    let data = SceneData::new(&Camera::default(), &[], &[], &[caster, plain, caster], &[]);

    let indices: Vec<i32> = data.directional_lights[..3].iter().map(|l| l.shadow_caster_index).collect();
    assert_eq!(indices, vec![0, -1, 1]);
}

#[test]
fn test_renderer_parameters_from_settings() {
    let mut settings = RendererSettings::default();
    settings.bloom.enabled = false;
    settings.exposure = 2.0;

    let params = RendererParameters::from(&settings);

    assert_eq!(params.bloom_enabled, 0);
    assert_eq!(params.exposure, 2.0);
    assert_eq!(params.tone_mapping, settings.tone_mapping.shader_index());
}
