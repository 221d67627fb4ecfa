use pretty_assertions::assert_eq;
use raycaster::{
    camera::Dimensions,
    integrators::WhittedIntegrator,
    renderer::{Frame, Renderer},
    scene::{parse_scene, Scene},
};

const DEMO_SCENE: &str = include_str!("../../../demos/spheres.json");

fn render(scene: &Scene, integrator: &WhittedIntegrator, width: u32, height: u32) -> Frame {
    Renderer::new(scene, integrator, Dimensions { width, height }).run_monothreaded(|_| ())
}

#[test]
fn single_pixel_sees_lit_sphere() {
    let scene = parse_scene(
        r#"[
            { "type": "camera", "width": 1, "height": 1 },
            { "type": "sphere", "position": [0, 0, 5], "radius": 1, "diffuse_color": [1, 0, 0] },
            { "type": "light", "position": [0, 0, 0], "color": [1, 1, 1] }
        ]"#,
    )
    .unwrap();

    let frame = render(&scene, &WhittedIntegrator::default(), 1, 1);
    assert_eq!(frame.pixel(0, 0), Some([255, 0, 0]));
    assert_eq!(frame.pixel(1, 0), None);
}

#[test]
fn nothing_to_see() {
    let scene = parse_scene(
        r#"[
            { "type": "camera", "width": 1, "height": 1 },
            { "type": "light", "position": [0, 3, 0], "color": [1, 1, 1] }
        ]"#,
    )
    .unwrap();

    for (width, height) in [(1, 1), (3, 2), (17, 9)] {
        let frame = render(&scene, &WhittedIntegrator::default(), width, height);
        assert_eq!(frame.pixels.len(), width as usize * height as usize);
        assert!(frame.as_bytes().iter().all(|&byte| byte == 0));
    }
}

#[test]
fn floor_shows_in_bottom_rows_only() {
    let scene = parse_scene(
        r#"[
            { "type": "camera", "width": 1, "height": 1 },
            { "type": "plane", "position": [0, -1, 0], "normal": [0, 1, 0], "diffuse_color": [1, 1, 1] },
            { "type": "light", "position": [0, 5, 5], "color": [1, 1, 1] }
        ]"#,
    )
    .unwrap();

    let frame = render(&scene, &WhittedIntegrator::default(), 4, 4);
    let rows: Vec<_> = frame.rows().collect();
    assert!(rows[0].iter().all(|pixel| *pixel == [0, 0, 0]));
    assert!(rows[1].iter().all(|pixel| *pixel == [0, 0, 0]));
    assert!(rows[3].iter().all(|pixel| *pixel != [0, 0, 0]));
}

#[test]
fn demo_scene_renders_identically_in_both_modes() {
    let scene = parse_scene(DEMO_SCENE).unwrap();
    let integrator = WhittedIntegrator {
        refraction: true,
        ..Default::default()
    };
    let renderer = Renderer::new(
        &scene,
        &integrator,
        Dimensions {
            width: 40,
            height: 30,
        },
    );

    let mono = renderer.run_monothreaded(|_| ());
    let multi = renderer.run_multithreaded(|_| ());
    assert_eq!(mono, multi);
    assert!(mono.as_bytes().iter().any(|&byte| byte != 0));
}

#[test]
fn depth_limit_only_changes_reflective_scenes() {
    let matte = parse_scene(
        r#"[
            { "type": "camera", "width": 1, "height": 1 },
            { "type": "plane", "position": [0, -1, 0], "normal": [0, 1, 0], "diffuse_color": [0.5, 0.5, 0.5] },
            { "type": "sphere", "position": [0, 0, 4], "radius": 1, "diffuse_color": [0, 1, 0], "specular_color": [1, 1, 1] },
            { "type": "light", "position": [2, 4, 0], "color": [1, 1, 1] }
        ]"#,
    )
    .unwrap();

    let shallow = WhittedIntegrator {
        max_depth: 0,
        ..Default::default()
    };
    assert_eq!(
        render(&matte, &shallow, 12, 12),
        render(&matte, &WhittedIntegrator::default(), 12, 12)
    );
}
