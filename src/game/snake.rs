use super::direction::Direction;
use super::{Arena, Position};
use crate::consts;
use std::collections::VecDeque;

/// Snake state.  Snate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of the rest of the snake, starting with the segment
    /// right behind the head and ending with the tail
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake is currently moving
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a snake with its head at
    /// [`INITIAL_HEAD`][consts::INITIAL_HEAD], moving in
    /// [`INITIAL_DIRECTION`][consts::INITIAL_DIRECTION], with the rest of
    /// its [`INITIAL_LENGTH`][consts::INITIAL_LENGTH] segments trailing
    /// behind it one `arena.step` apart
    pub(super) fn initial(arena: Arena) -> Snake {
        let behind = consts::INITIAL_DIRECTION.reverse();
        let body = std::iter::successors(Some(consts::INITIAL_HEAD), |&p| {
            Some(behind.advance(p, arena.step))
        })
        .skip(1)
        .take(consts::INITIAL_LENGTH - 1)
        .collect();
        Snake {
            head: consts::INITIAL_HEAD,
            body,
            direction: consts::INITIAL_DIRECTION,
        }
    }

    pub(super) fn head(&self) -> Position {
        self.head
    }

    pub(super) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Iterate over all of the snake's positions, head first
    pub(super) fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Change the snake's direction to `direction`, unless that would make
    /// it turn back into itself
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.direction = direction;
        }
    }

    /// Put a new head `step` units in front of the current one.  The tail
    /// stays where it is; call [`Snake::shrink()`] afterwards unless the
    /// snake is growing.  Returns the new head position.
    pub(super) fn advance(&mut self, step: i32) -> Position {
        let new_head = self.direction.advance(self.head, step);
        self.body.push_front(self.head);
        self.head = new_head;
        new_head
    }

    /// Remove the tail segment
    pub(super) fn shrink(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Is the head on top of some other part of the snake?
    pub(super) fn bites_itself(&self) -> bool {
        self.body.contains(&self.head)
    }
}
