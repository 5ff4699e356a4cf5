// Placement and viewport clamping of onboarding tips

use onboarding_wasm::layout::{clamp_ranges, compute_position, AnchorTransform};
use onboarding_wasm::models::{Placement, Rect, Size, ViewportSize};

const TARGET: Rect = Rect::new(100.0, 100.0, 50.0, 20.0);
const CONTAINER: Size = Size::new(200.0, 80.0);
const VIEWPORT: ViewportSize = ViewportSize::new(1000.0, 800.0);

#[test]
fn test_top_placement() {
    let pos = compute_position(TARGET, CONTAINER, VIEWPORT, Placement::Top);

    // x = 100 + 25 = 125, already inside [100, 800]
    assert_eq!(pos.x, 125.0);
    assert_eq!(pos.y, 75.0);
    assert_eq!(pos.transform.as_css(), "translate(-50%,-100%)");
}

#[test]
fn test_right_placement() {
    let pos = compute_position(TARGET, CONTAINER, VIEWPORT, Placement::Right);

    // x = 100 + min(50 + 25, 1000 - 100)
    assert_eq!(pos.x, 175.0);
    assert_eq!(pos.y, 110.0);
    assert_eq!(pos.transform.as_css(), "translateY(-50%)");
}

#[test]
fn test_bottom_placement_clamps_at_right_edge() {
    let target = Rect::new(950.0, 100.0, 50.0, 20.0);
    let pos = compute_position(target, CONTAINER, VIEWPORT, Placement::Bottom);

    // raw 975 lowered to 1000 - 200
    assert_eq!(pos.x, 800.0);
    assert_eq!(pos.y, 120.0);
    assert_eq!(pos.transform.as_css(), "translate(-50%,25%)");
}

#[test]
fn test_bottom_placement_clamps_at_left_edge() {
    let target = Rect::new(0.0, 100.0, 20.0, 20.0);
    let pos = compute_position(target, CONTAINER, VIEWPORT, Placement::Bottom);

    // raw 10 raised to 200 / 2
    assert_eq!(pos.x, 100.0);
}

#[test]
fn test_top_does_not_clamp_vertically() {
    let target = Rect::new(400.0, 5.0, 50.0, 20.0);
    let pos = compute_position(target, CONTAINER, VIEWPORT, Placement::Top);
    assert_eq!(pos.y, -20.0);
}

#[test]
fn test_left_does_not_clamp_horizontally() {
    let target = Rect::new(10.0, 100.0, 50.0, 20.0);
    let pos = compute_position(target, CONTAINER, VIEWPORT, Placement::Left);
    assert_eq!(pos.x, -15.0);
    assert_eq!(pos.transform, AnchorTransform::RightMiddle);
}

#[test]
fn test_unrecognized_placement_matches_bottom() {
    let target = Rect::new(950.0, 100.0, 50.0, 20.0);
    let bottom = compute_position(target, CONTAINER, VIEWPORT, Placement::Bottom);

    for name in ["", "middle", "Bottom", "TOP"] {
        let pos = compute_position(target, CONTAINER, VIEWPORT, Placement::parse(name));
        assert_eq!(pos, bottom, "placement {:?} should behave like bottom", name);
    }
}

#[test]
fn test_clamped_axis_stays_within_range() {
    let sizes = [-40.0, 0.0, 1.0, 20.0, 150.0];
    let origins = [-500.0, -1.0, 0.0, 250.0, 990.0, 5000.0];
    let containers = [
        Size::new(0.0, 0.0),
        Size::new(200.0, 80.0),
        Size::new(-30.0, -30.0),
        Size::new(300.0, 1000.0),
    ];

    for placement in Placement::ALL {
        for &x in &origins {
            for &y in &origins {
                for &w in &sizes {
                    for &h in &sizes {
                        for &container in &containers {
                            let target = Rect::new(x, y, w, h);
                            let pos = compute_position(target, container, VIEWPORT, placement);
                            let (x_range, y_range) =
                                clamp_ranges(target, container, VIEWPORT, placement);

                            if let Some(range) = x_range.filter(|r| r.min <= r.max) {
                                assert!(
                                    range.contains(pos.x),
                                    "{} x={} outside {:?}",
                                    placement,
                                    pos.x,
                                    range
                                );
                            }
                            if let Some(range) = y_range.filter(|r| r.min <= r.max) {
                                assert!(
                                    range.contains(pos.y),
                                    "{} y={} outside {:?}",
                                    placement,
                                    pos.y,
                                    range
                                );
                            }
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_unclamped_axis_follows_target_edge() {
    for (placement, expected_y) in [(Placement::Top, 75.0), (Placement::Bottom, 120.0)] {
        let pos = compute_position(TARGET, CONTAINER, VIEWPORT, placement);
        assert_eq!(pos.y, expected_y, "{}", placement);
    }
    for (placement, expected_x) in [(Placement::Left, 75.0), (Placement::TopLeft, 100.0)] {
        let pos = compute_position(TARGET, CONTAINER, VIEWPORT, placement);
        assert_eq!(pos.x, expected_x, "{}", placement);
    }
}

#[test]
fn test_compute_position_is_deterministic() {
    for placement in Placement::ALL {
        let first = compute_position(TARGET, CONTAINER, VIEWPORT, placement);
        let second = compute_position(TARGET, CONTAINER, VIEWPORT, placement);
        assert_eq!(first, second);
    }
}

#[test]
fn test_degenerate_inputs_are_defined() {
    let zero = Rect::new(0.0, 0.0, 0.0, 0.0);
    for placement in Placement::ALL {
        let pos = compute_position(zero, Size::new(0.0, 0.0), ViewportSize::new(0.0, 0.0), placement);
        assert!(pos.x.is_finite() && pos.y.is_finite(), "{}", placement);
    }
}

#[test]
fn test_headless_viewport_fallback() {
    let target = Rect::new(1000.0, 100.0, 50.0, 20.0);
    let pos = compute_position(target, CONTAINER, ViewportSize::default(), Placement::Top);
    // 1024 - 200
    assert_eq!(pos.x, 824.0);
}
