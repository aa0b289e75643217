use super::Position;

/// The direction in which the snake is travelling.  "Up" is towards smaller
/// `y` values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the position `step` units away from `pos` in this direction.
    /// No bounds checking is performed; coordinates saturate at the limits
    /// of `i32`, which are outside any arena.
    pub(crate) fn advance(self, pos: Position, step: i32) -> Position {
        let Position { x, y } = pos;
        match self {
            Direction::Up => Position::new(x, y.saturating_sub(step)),
            Direction::Down => Position::new(x, y.saturating_add(step)),
            Direction::Left => Position::new(x.saturating_sub(step), y),
            Direction::Right => Position::new(x.saturating_add(step), y),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Position::new(100, 50), 10, Position::new(100, 40))]
    #[case(Direction::Down, Position::new(100, 50), 10, Position::new(100, 60))]
    #[case(Direction::Left, Position::new(100, 50), 10, Position::new(90, 50))]
    #[case(Direction::Right, Position::new(100, 50), 10, Position::new(110, 50))]
    #[case(Direction::Left, Position::new(0, 50), 10, Position::new(-10, 50))]
    #[case(Direction::Up, Position::new(30, 0), 20, Position::new(30, -20))]
    #[case(Direction::Right, Position::new(i32::MAX - 5, 0), 10, Position::new(i32::MAX, 0))]
    #[case(Direction::Up, Position::new(0, i32::MIN + 5), 10, Position::new(0, i32::MIN))]
    fn test_direction_advance(
        #[case] d: Direction,
        #[case] pos: Position,
        #[case] step: i32,
        #[case] r: Position,
    ) {
        assert_eq!(d.advance(pos, step), r);
    }

    #[rstest]
    #[case(Direction::Up, Direction::Down)]
    #[case(Direction::Down, Direction::Up)]
    #[case(Direction::Left, Direction::Right)]
    #[case(Direction::Right, Direction::Left)]
    fn test_reverse(#[case] d: Direction, #[case] r: Direction) {
        assert_eq!(d.reverse(), r);
        assert_eq!(d.reverse().reverse(), d);
    }
}
