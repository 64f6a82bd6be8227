use folio_core::pointer::{HEADING_SPRING, ROSE_SPRING, SKY_SPRING};
use folio_core::{raw_target, ContainerBounds, ParallaxRig, PointerOffset, Spring};

const BOUNDS: ContainerBounds = ContainerBounds {
    left: 0.0,
    top: 0.0,
    width: 200.0,
    height: 100.0,
};

fn assert_close(actual: f64, expected: f64) {
    let delta = (actual - expected).abs();
    assert!(
        delta <= 1e-9,
        "expected {:.6} got {:.6} (delta {:.6})",
        expected,
        actual,
        delta
    );
}

#[test]
fn offset_is_scaled_distance_from_center() {
    let target = raw_target(BOUNDS, 150.0, 90.0);
    assert_close(target.x, 7.5);
    assert_close(target.y, 6.0);
}

#[test]
fn small_upward_offset_is_not_clamped() {
    let target = raw_target(BOUNDS, 10.0, 10.0);
    assert_close(target.x, -13.5);
    assert_close(target.y, -6.0);
}

#[test]
fn downward_offset_has_no_upper_bound() {
    let target = raw_target(BOUNDS, 100.0, 1000.0);
    assert_close(target.x, 0.0);
    assert_close(target.y, 142.5);
}

#[test]
fn vertical_offset_is_floored() {
    let tall = ContainerBounds {
        left: 0.0,
        top: 0.0,
        width: 200.0,
        height: 1000.0,
    };
    let target = raw_target(tall, 100.0, 0.0);
    assert_close(target.y, -30.0);
    let far_left = raw_target(tall, -10_000.0, 500.0);
    assert_close(far_left.x, -1515.0);
}

#[test]
fn container_origin_is_respected() {
    let shifted = ContainerBounds {
        left: 40.0,
        top: 20.0,
        ..BOUNDS
    };
    let target = raw_target(shifted, 190.0, 110.0);
    assert_close(target.x, 7.5);
    assert_close(target.y, 6.0);
}

#[test]
fn degenerate_bounds_give_zero_offset() {
    let empty = ContainerBounds {
        width: 0.0,
        height: 0.0,
        ..BOUNDS
    };
    assert_eq!(raw_target(empty, 150.0, 90.0), PointerOffset::ZERO);
    let nan = ContainerBounds {
        width: f64::NAN,
        ..BOUNDS
    };
    assert_eq!(raw_target(nan, 150.0, 90.0), PointerOffset::ZERO);
}

#[test]
fn springs_converge_without_oscillating_away() {
    let target = PointerOffset::new(-90.0, 142.5);
    for config in [HEADING_SPRING, ROSE_SPRING, SKY_SPRING] {
        let mut spring = Spring::new(config);
        spring.set_target(target);
        let mut worst = f64::MAX;
        for _ in 0..600 {
            let value = spring.step(1.0 / 60.0);
            let distance = (value.x - target.x).abs().max((value.y - target.y).abs());
            assert!(distance.is_finite());
            assert!(distance <= 200.0, "{config:?} drifted to {distance}");
            worst = distance;
        }
        assert!(worst < 0.01, "{config:?} still {worst} away");
        assert!(spring.is_at_rest());
    }
}

#[test]
fn layers_move_at_different_paces() {
    let mut rig = ParallaxRig::new();
    rig.on_pointer_move(BOUNDS, 200.0, 100.0);
    for _ in 0..6 {
        rig.step(1.0 / 60.0);
    }
    let frame = rig.frame();
    assert_ne!(frame.heading, frame.rose);
    assert_ne!(frame.rose, frame.sky);
    assert_ne!(frame.heading, frame.sky);
}

#[test]
fn rig_reports_rest_once_settled() {
    let mut rig = ParallaxRig::new();
    assert!(rig.is_at_rest());
    assert!(!rig.step(1.0 / 60.0));

    rig.on_pointer_move(BOUNDS, 150.0, 90.0);
    assert!(rig.step(1.0 / 60.0));
    let mut frames = 0;
    while rig.step(1.0 / 60.0) {
        frames += 1;
        assert!(frames < 1200, "rig never settled");
    }
    let target = raw_target(BOUNDS, 150.0, 90.0);
    let frame = rig.frame();
    assert_eq!(frame.heading, target);
    assert_eq!(frame.rose, target);
    assert_eq!(frame.sky, target);
}
