//! Rules tests for the volumetric pit

use blockfall::core::GameSession;
use blockfall::types::{Axis, Intent, PieceKind};

fn volumetric_with_active(
    extents: [u8; 3],
    kind: PieceKind,
) -> GameSession<3> {
    (0..500)
        .map(|seed| GameSession::volumetric(extents[0], extents[1], extents[2], seed))
        .find(|s| s.active().unwrap().kind == kind)
        .expect("seed scan found no such piece")
}

#[test]
fn test_spawn_is_centered_on_both_lateral_axes() {
    let session = volumetric_with_active([6, 10, 5], PieceKind::O);
    let piece = session.active().unwrap();
    // floor(6/2) - floor(2/2) = 2 horizontally, depth layer floor(5/2) = 2
    assert_eq!(piece.pos, [2, 0, 2]);
    for coord in piece.cells() {
        assert_eq!(coord[2], 2);
    }
}

#[test]
fn test_depth_moves_stay_in_bounds() {
    let mut session = GameSession::volumetric(6, 10, 3, 99);
    assert_eq!(session.active().unwrap().pos[2], 1);

    assert!(session.apply(Intent::MoveForward));
    assert_eq!(session.active().unwrap().pos[2], 2);
    assert!(!session.apply(Intent::MoveForward));

    assert!(session.apply(Intent::MoveBackward));
    assert!(session.apply(Intent::MoveBackward));
    assert_eq!(session.active().unwrap().pos[2], 0);
    assert!(!session.apply(Intent::MoveBackward));
}

#[test]
fn test_layer_rows_clear_independently() {
    // An O dropped into a prepared bottom row of the spawn layer clears
    // that row only; neighboring layers keep their contents
    let mut session = volumetric_with_active([4, 6, 3], PieceKind::O);
    assert_eq!(session.active().unwrap().pos, [1, 0, 1]);

    // Bottom row of layer 1 full except the two columns under the O;
    // markers in layers 0 and 2
    session.board_mut().set([0, 5, 1], Some(PieceKind::S));
    session.board_mut().set([3, 5, 1], Some(PieceKind::S));
    session.board_mut().set([0, 5, 0], Some(PieceKind::T));
    session.board_mut().set([0, 5, 2], Some(PieceKind::J));

    session.apply(Intent::HardDrop);

    // Drop of 4 rows, one line cleared: 110 + 4
    assert_eq!(session.score(), 114);

    // The O's upper row compacted down onto the bottom of layer 1
    assert_eq!(session.board().get([1, 5, 1]), Some(Some(PieceKind::O)));
    assert_eq!(session.board().get([2, 5, 1]), Some(Some(PieceKind::O)));
    assert!(session.board().is_empty([0, 5, 1]));
    assert!(session.board().is_empty([3, 5, 1]));

    // Neighbor layers untouched
    assert_eq!(session.board().get([0, 5, 0]), Some(Some(PieceKind::T)));
    assert_eq!(session.board().get([0, 5, 2]), Some(Some(PieceKind::J)));
}

#[test]
fn test_every_rotation_axis_collapses_to_the_planar_turn() {
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let mut turned = GameSession::volumetric(8, 12, 4, 31337);
        let mut planar = GameSession::volumetric(8, 12, 4, 31337);
        assert_eq!(
            turned.apply(Intent::RotateAbout(axis)),
            planar.apply(Intent::Rotate)
        );
        assert_eq!(turned.active(), planar.active());
    }
}

#[test]
fn test_single_layer_pit_plays_like_a_well() {
    // Depth 1 reproduces the flat variant: same seed, same intents, same
    // flat cell contents and score as the 2D rotation-only well
    let seed = 555;
    let mut pit = GameSession::volumetric(10, 20, 1, seed);
    let mut well = GameSession::basic(10, 20, seed);

    for _ in 0..40 {
        for intent in [
            Intent::MoveLeft,
            Intent::Rotate,
            Intent::MoveDown,
            Intent::MoveRight,
            Intent::HardDrop,
        ] {
            assert_eq!(pit.apply(intent), well.apply(intent));
        }
        if pit.game_over() {
            break;
        }
    }

    assert_eq!(pit.snapshot().cells, well.snapshot().cells);
    assert_eq!(pit.score(), well.score());
    assert_eq!(pit.level(), well.level());
    assert_eq!(pit.game_over(), well.game_over());
}

#[test]
fn test_pit_game_over_on_blocked_spawn() {
    let mut session = volumetric_with_active([4, 6, 3], PieceKind::O);
    let footprint = session.active().unwrap().cells();

    // Choke the spawn layer's top rows, one column left open
    for y in 0..3 {
        for x in 1..4 {
            let coord = [x, y, 1];
            if !footprint.contains(&coord) {
                session.board_mut().set(coord, Some(PieceKind::Z));
            }
        }
    }

    session.apply(Intent::HardDrop);
    assert!(session.game_over());
    assert!(session.active().is_none());
    assert!(!session.advance_gravity());
}
