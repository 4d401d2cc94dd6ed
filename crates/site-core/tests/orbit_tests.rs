// Host-side tests for orbit placement and projection.

use site_core::*;
use std::f32::consts::{FRAC_PI_2, TAU};

const EPS: f32 = 1e-5;

#[test]
fn sphere_points_lie_on_the_unit_sphere() {
    for n in 1..40 {
        for i in 0..n {
            let p = sphere_point(i, n);
            assert!((p.length() - 1.0).abs() < 1e-4, "n={n} i={i} |p|={}", p.length());
        }
    }
}

#[test]
fn sphere_points_are_balanced() {
    for n in [3usize, 8, 12, 24, 50, 200] {
        let layout = OrbitLayout::new(n);
        assert_eq!(layout.len(), n);

        let y_sum: f32 = layout.points().iter().map(|p| p.y).sum();
        let z_sum: f32 = layout.points().iter().map(|p| p.z).sum();
        assert!(y_sum.abs() < 1e-3, "n={n} y_sum={y_sum}");
        assert!((z_sum / n as f32).abs() < 0.05, "n={n} z_sum={z_sum}");
    }
}

#[test]
fn default_video_points_sum_to_roughly_zero_depth() {
    let layout = OrbitLayout::new(ORBIT_VIDEO_IDS.len());
    let z_sum: f32 = layout.points().iter().map(|p| p.z).sum();
    assert!(z_sum.abs() < 0.1, "z_sum={z_sum}");
}

#[test]
fn depth_cues_stay_within_their_ranges() {
    let viewports = [
        Viewport::new(360.0, 640.0),
        Viewport::new(1024.0, 768.0),
        Viewport::new(2560.0, 1440.0),
    ];
    for vp in viewports {
        let params = OrbitParams::for_viewport(vp);
        for n in 1..=12 {
            let layout = OrbitLayout::new(n);
            for step in 0..64 {
                let angle = step as f32 / 64.0 * TAU;
                for t in layout.project(angle, &params) {
                    assert!((0.0..=1.0).contains(&t.depth));
                    assert!(t.opacity >= 0.40 - EPS && t.opacity <= 1.00 + EPS);
                    assert!(t.scale >= 0.76 - EPS && t.scale <= 1.12 + EPS);
                    assert!((0..=1000).contains(&t.z_index));
                    assert!(t.blur_px >= 0.0 && t.blur_px <= 0.9 + EPS);
                }
            }
        }
    }
}

#[test]
fn rotation_brings_the_first_point_to_the_front() {
    let params = OrbitParams::for_viewport(Viewport::new(1280.0, 800.0));
    let layout = OrbitLayout::new(1);
    // A single point sits on the equator facing +x
    let p = layout.points()[0];
    assert!((p.x - 1.0).abs() < EPS && p.y.abs() < EPS && p.z.abs() < EPS);

    let at_rest = layout.project(0.0, &params)[0];
    assert!((at_rest.depth - 0.5).abs() < EPS);
    assert_eq!(at_rest.z_index, 500);
    assert!((at_rest.position.x - params.radius).abs() < 1e-3);

    let front = layout.project(FRAC_PI_2, &params)[0];
    assert!((front.depth - 1.0).abs() < 1e-4);
    assert!((front.opacity - 1.0).abs() < 1e-4);
    assert!((front.scale - 1.12).abs() < 1e-4);
    assert!(front.blur_px < 1e-4);

    let back = layout.project(-FRAC_PI_2, &params)[0];
    assert!(back.depth < 1e-4);
    assert!((back.opacity - 0.40).abs() < 1e-4);
    assert!((back.scale - 0.76).abs() < 1e-4);
}

#[test]
fn vertical_offset_is_flattened_by_y_scale() {
    let vp = Viewport::new(1280.0, 600.0);
    let params = OrbitParams::for_viewport(vp);
    let layout = OrbitLayout::new(4);
    for (p, t) in layout.points().iter().zip(layout.project(0.3, &params)) {
        let expected = p.y * params.radius * params.y_scale;
        assert!((t.position.y - expected).abs() < 1e-3);
    }
}

#[test]
fn radius_tracks_viewport_width_within_bounds() {
    assert_eq!(OrbitParams::for_viewport(Viewport::new(500.0, 800.0)).radius, 160.0);
    assert_eq!(OrbitParams::for_viewport(Viewport::new(1000.0, 800.0)).radius, 220.0);
    assert_eq!(OrbitParams::for_viewport(Viewport::new(3000.0, 800.0)).radius, 340.0);
}

#[test]
fn y_scale_tracks_viewport_height_within_bounds() {
    let y = |h: f32| OrbitParams::for_viewport(Viewport::new(1280.0, h)).y_scale;
    assert!((y(300.0) - 0.52).abs() < EPS);
    assert!((y(600.0) - 0.60).abs() < EPS);
    assert!((y(2000.0) - 0.70).abs() < EPS);
}

#[test]
fn narrow_viewports_get_slower_flatter_orbit() {
    let narrow = OrbitParams::for_viewport(Viewport::new(767.0, 800.0));
    let wide = OrbitParams::for_viewport(Viewport::new(768.0, 800.0));

    assert_eq!(narrow.speed, ORBIT_SPEED_NARROW);
    assert_eq!(wide.speed, ORBIT_SPEED_WIDE);
    assert_eq!((narrow.tilt_x_deg, narrow.tilt_y_deg, narrow.base_z), (-8.0, 14.0, 24.0));
    assert_eq!((wide.tilt_x_deg, wide.tilt_y_deg, wide.base_z), (-10.0, 18.0, 40.0));
}

#[test]
fn angle_is_proportional_to_elapsed_time_unless_reduced() {
    let params = OrbitParams::for_viewport(Viewport::new(1280.0, 800.0));
    assert!((params.angle(1000.0, false) - 0.22).abs() < 1e-6);
    assert!((params.angle(2000.0, false) - 0.44).abs() < 1e-6);
    assert_eq!(params.angle(123_456.0, true), 0.0);
}

#[test]
fn css_output_matches_expected_format() {
    let params = OrbitParams::for_viewport(Viewport::new(1280.0, 800.0));
    assert_eq!(
        params.scene_transform_css(),
        "rotateX(-10deg) rotateY(18deg) translateZ(40px)"
    );

    let t = OrbitLayout::new(1).project(0.0, &params)[0];
    let css = t.transform_css();
    assert!(css.starts_with("translate3d("));
    assert!(css.contains("translate(-50%, -50%)"));
    assert!(css.ends_with(&format!("scale({})", t.scale)));
    assert_eq!(t.filter_css(), format!("blur({}px)", t.blur_px));
}

#[test]
fn default_videos_link_to_youtube() {
    let videos: Vec<OrbitVideo<'static>> = default_videos().collect();
    assert_eq!(videos.len(), 3);
    assert_eq!(
        videos[0].thumbnail_url(),
        "https://img.youtube.com/vi/JT7jlgqqSuU/hqdefault.jpg"
    );
    assert_eq!(
        videos[2].watch_url(),
        "https://www.youtube.com/watch?v=TZJUg9_QVy8"
    );
}

#[test]
fn backing_store_clamps_device_pixel_ratio() {
    let vp = Viewport::new(1280.0, 800.0);
    assert_eq!(vp.with_device_pixel_ratio(3.0).backing_scale(), 2.0);
    assert_eq!(vp.with_device_pixel_ratio(0.5).backing_scale(), 1.0);
    assert_eq!(vp.with_device_pixel_ratio(f64::NAN).backing_scale(), 1.0);
    assert_eq!(vp.with_device_pixel_ratio(1.5).backing_size(), (1920, 1200));
}
