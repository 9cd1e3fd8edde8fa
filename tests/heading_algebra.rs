// tests/heading_algebra.rs
use glam::IVec2;
use mars_rover::{Heading, RoverState};

#[test]
fn test_four_rotations_return_to_start() {
    for h in Heading::ALL {
        for clockwise in [true, false] {
            let turned = h
                .rotate(clockwise)
                .rotate(clockwise)
                .rotate(clockwise)
                .rotate(clockwise);
            assert_eq!(turned, h, "{h} clockwise={clockwise}");
        }
    }
}

#[test]
fn test_rotation_matches_vector_algebra() {
    for h in Heading::ALL {
        let v = h.vector();
        // Clockwise: (dx, dy) -> (dy, -dx)
        assert_eq!(h.rotate(true).vector(), IVec2::new(v.y, -v.x));
        // Counter-clockwise is the perpendicular: (dx, dy) -> (-dy, dx)
        assert_eq!(h.rotate(false).vector(), v.perp());
    }
}

#[test]
fn test_from_vector_only_accepts_cardinal_units() {
    for h in Heading::ALL {
        assert_eq!(Heading::from_vector(h.vector()), Some(h));
    }
    assert_eq!(Heading::from_vector(IVec2::ZERO), None);
    assert_eq!(Heading::from_vector(IVec2::new(1, 1)), None);
    assert_eq!(Heading::from_vector(IVec2::new(0, 2)), None);
}

#[test]
fn test_move_forward_then_backward_returns_home() {
    let no_danger = |_: i32, _: i32| false;
    for h in Heading::ALL {
        for start in [IVec2::ZERO, IVec2::new(-7, 13), IVec2::new(100, -3)] {
            let state = RoverState::new(start, h);
            let there = state.moved(true, no_danger);
            assert_eq!(there.position, start + h.vector());
            let back = there.moved(false, no_danger);
            assert_eq!(back, RoverState::new(start, h));
            assert!(!back.stopped);
        }
    }
}

#[test]
fn test_blocked_move_keeps_position_and_stops() {
    let state = RoverState::new((2, 2), Heading::East);
    let mut probed = Vec::new();
    let next = state.moved(true, |x, y| {
        probed.push((x, y));
        true
    });

    assert_eq!(probed, vec![(3, 2)], "probe must see the candidate cell");
    assert_eq!(next.position, IVec2::new(2, 2));
    assert_eq!(next.heading, Heading::East);
    assert!(next.stopped);
}

#[test]
fn test_rotation_clears_stopped() {
    let state = RoverState::new((0, 0), Heading::North).with_stopped(true);
    let next = state.rotated(true);
    assert_eq!(next.heading, Heading::East);
    assert_eq!(next.position, IVec2::ZERO);
    assert!(!next.stopped);
}

#[test]
fn test_state_rendering() {
    let state = RoverState::new((3, -2), Heading::West).with_stopped(true);
    assert_eq!(state.to_string(), "(3, -2) WEST stopped");
    assert_eq!(state.with_stopped(false).to_string(), "(3, -2) WEST");
}

#[test]
fn test_unrepresentable_cell_is_danger() {
    let state = RoverState::new((0, i32::MAX), Heading::North);
    let mut probed = false;
    let next = state.moved(true, |_, _| {
        probed = true;
        false
    });

    assert!(!probed, "no cell exists past the edge to probe");
    assert_eq!(next, state.with_stopped(true));
}
