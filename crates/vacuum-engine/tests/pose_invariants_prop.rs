//! Property tests over random command sequences.

use std::time::Instant;

use proptest::prelude::*;
use vacuum_core::{Command, CommandError, Direction, Pose, Rotation};
use vacuum_engine::{apply_rotation, handle, Session, SessionConfig};
use vacuum_space::Room;
use vacuum_test_utils::placed_pose;

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::North),
        Just(Direction::South),
        Just(Direction::East),
        Just(Direction::West),
    ]
}

fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        1 => (-2i64..8, -2i64..8, prop_oneof![
            Just("north"), Just("South"), Just("EAST"), Just("west"), Just(""), Just("up"),
        ])
            .prop_map(|(x, y, d)| Command::place(x, y, d)),
        4 => Just(Command::Move),
        2 => Just(Command::Rotate(Rotation::Left)),
        2 => Just(Command::Rotate(Rotation::Right)),
        1 => Just(Command::Report),
        1 => Just(Command::Reset),
    ]
}

fn in_bounds(pose: &Pose, room: &Room) -> bool {
    match pose.placed() {
        Some(p) => room.contains(p.x.into(), p.y.into()),
        None => true,
    }
}

proptest! {
    #[test]
    fn reachable_poses_stay_in_bounds(
        w in 1u32..8,
        h in 1u32..8,
        commands in prop::collection::vec(arb_command(), 0..60),
    ) {
        let room = Room::new(w, h).unwrap();
        let mut pose = Pose::Unplaced;
        for command in &commands {
            let t = handle(pose, command, &room);
            if t.result.is_err() {
                prop_assert_eq!(t.pose, pose);
            }
            prop_assert!(in_bounds(&t.pose, &room));
            pose = t.pose;
        }
    }

    #[test]
    fn moves_change_one_coordinate_by_one(
        x in 0i32..5,
        y in 0i32..5,
        d in arb_direction(),
    ) {
        let room = Room::new(5, 5).unwrap();
        let start = Pose::Placed(placed_pose(x, y, d));
        let t = handle(start, &Command::Move, &room);
        match (t.result, t.pose.placed()) {
            (Ok(()), Some(next)) => {
                prop_assert_eq!(next.direction, d);
                prop_assert_eq!((next.x - x).abs() + (next.y - y).abs(), 1);
            }
            (Err(CommandError::Boundary(v)), _) => {
                prop_assert_eq!(v.direction, d);
                prop_assert_eq!(t.pose, start);
            }
            (other, _) => prop_assert!(false, "unexpected move result {:?}", other),
        }
    }

    #[test]
    fn left_then_right_is_identity(x in 0i32..5, y in 0i32..5, d in arb_direction()) {
        let p = placed_pose(x, y, d);
        prop_assert_eq!(apply_rotation(apply_rotation(p, Rotation::Left), Rotation::Right), p);
        prop_assert_eq!(apply_rotation(apply_rotation(p, Rotation::Right), Rotation::Left), p);
    }

    #[test]
    fn session_counters_add_up(commands in prop::collection::vec(arb_command(), 0..40)) {
        let mut s = Session::new(SessionConfig::default()).unwrap();
        let now = Instant::now();
        let mut accepted = 0u64;
        for (i, command) in commands.iter().enumerate() {
            let receipt = s.submit(command.clone(), now);
            prop_assert_eq!(receipt.seq.0, i as u64);
            accepted += u64::from(receipt.accepted);
            prop_assert!(in_bounds(&s.pose(), s.room()));
            prop_assert_eq!(s.controls().move_forward, s.pose().is_placed());
        }
        let m = s.metrics();
        prop_assert_eq!(m.commands_submitted, commands.len() as u64);
        prop_assert_eq!(m.commands_accepted, accepted);
        prop_assert_eq!(
            m.commands_rejected(),
            m.placement_rejections + m.boundary_violations + m.invalid_operations
        );
    }

    #[test]
    fn reset_is_idempotent(commands in prop::collection::vec(arb_command(), 0..20)) {
        let room = Room::new(5, 5).unwrap();
        let mut pose = Pose::Unplaced;
        for command in &commands {
            pose = handle(pose, command, &room).pose;
        }
        let once = handle(pose, &Command::Reset, &room).pose;
        let twice = handle(once, &Command::Reset, &room).pose;
        prop_assert_eq!(once, Pose::Unplaced);
        prop_assert_eq!(twice, Pose::Unplaced);
    }
}
