use vacuum_core::Direction;
use vacuum_space::Room;

#[test]
fn blocked_steps_are_exactly_the_border_cells() {
    let room = Room::new(4, 3).unwrap();
    for (x, y) in room.canonical_ordering() {
        for d in Direction::ALL {
            let on_border = match d {
                Direction::North => y == 2,
                Direction::South => y == 0,
                Direction::East => x == 3,
                Direction::West => x == 0,
            };
            assert_eq!(
                room.step(x, y, d).is_none(),
                on_border,
                "step from ({x}, {y}) towards {d}"
            );
        }
    }
}

#[test]
fn wide_rooms_step_without_overflow() {
    let room = Room::new(Room::MAX_DIM, 1).unwrap();
    let last = (Room::MAX_DIM - 1) as i32;
    assert_eq!(room.step(last, 0, Direction::East), None);
    assert_eq!(room.step(last, 0, Direction::West), Some((last - 1, 0)));
}
