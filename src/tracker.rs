use std::collections::HashSet;

use log::{debug, trace};

use crate::direction::Direction;
use crate::error::Result;
use crate::rope::Rope;
use crate::vector::Position;

/// `count` unit steps of the head in one direction.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub direction: Direction,
    pub count: u64,
}

/// Simulation state for one run: the rope and every position its tail has
/// occupied, starting position included.
#[derive(Debug)]
pub struct Tracker {
    rope: Rope,
    visited: HashSet<Position>,
}

impl Tracker {
    pub fn new(rope_length: usize) -> Result<Tracker> {
        let rope = Rope::new(rope_length)?;
        let visited = HashSet::from([rope.tail()]);

        Ok(Tracker { rope, visited })
    }

    pub fn step(&mut self, direction: Direction) {
        self.rope.step(direction);
        self.visited.insert(self.rope.tail());
    }

    pub fn apply(&mut self, Move { direction, count }: Move) {
        for _i in 0..count {
            self.step(direction);
        }

        trace!("{:?} x{}: {}", direction, count, self.rope);
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Runs `moves` through a fresh rope of `rope_length` knots and returns how
/// many distinct positions the last knot visited.
pub fn simulate<I>(moves: I, rope_length: usize) -> Result<usize>
where
    I: IntoIterator<Item = Move>,
{
    let tracker = moves
        .into_iter()
        .fold(Tracker::new(rope_length)?, |mut tracker, m| {
            tracker.apply(m);
            tracker
        });

    let count = tracker.visited_count();
    debug!("{} knots: tail visited {} positions", rope_length, count);

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::Error;
    use Direction::*;

    use proptest::prelude::*;
    use rstest::rstest;

    fn moves(list: &[(Direction, u64)]) -> Vec<Move> {
        list.iter()
            .map(|&(direction, count)| Move { direction, count })
            .collect()
    }

    fn small_example() -> Vec<Move> {
        moves(&[
            (Right, 4),
            (Up, 4),
            (Left, 3),
            (Down, 1),
            (Right, 4),
            (Down, 1),
            (Left, 5),
            (Right, 2),
        ])
    }

    fn large_example() -> Vec<Move> {
        moves(&[
            (Right, 5),
            (Up, 8),
            (Left, 8),
            (Down, 3),
            (Right, 17),
            (Down, 10),
            (Left, 25),
            (Up, 20),
        ])
    }

    #[rstest]
    #[case(small_example(), 2, 13)]
    #[case(small_example(), 10, 1)]
    #[case(large_example(), 10, 36)]
    #[case(moves(&[(Right, 4)]), 1, 5)]
    #[case(moves(&[(Right, 4), (Left, 4)]), 1, 5)]
    #[case(moves(&[(Up, 3)]), 2, 3)]
    #[case(vec![], 1, 1)]
    #[case(vec![], 10, 1)]
    fn test_simulate(#[case] input: Vec<Move>, #[case] knots: usize, #[case] expected: usize) {
        assert_eq!(simulate(input, knots).unwrap(), expected);
    }

    #[test]
    fn test_simulate_empty_rope() {
        assert!(matches!(simulate(small_example(), 0), Err(Error::EmptyRope)));
    }

    #[test]
    fn test_tracker_seeds_starting_position() {
        let tracker = Tracker::new(4).unwrap();
        assert_eq!(tracker.visited_count(), 1);

        let mut tracker = Tracker::new(1).unwrap();
        tracker.apply(Move {
            direction: Up,
            count: 0,
        });
        assert_eq!(tracker.visited_count(), 1);
        assert_eq!(tracker.rope().head(), Position::default());
    }

    #[test]
    fn test_simulate_consumes_one_pass_iterator() {
        let once = small_example().into_iter();
        assert_eq!(simulate(once, 2).unwrap(), 13);
    }

    fn cardinal() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Up), Just(Down), Just(Left), Just(Right)]
    }

    fn move_list() -> impl Strategy<Value = Vec<Move>> {
        prop::collection::vec(
            (cardinal(), 0u64..12).prop_map(|(direction, count)| Move { direction, count }),
            0..40,
        )
    }

    proptest! {
        #[test]
        fn prop_rope_stays_connected(input in move_list(), knots in 1usize..12) {
            let mut tracker = Tracker::new(knots).unwrap();
            for Move { direction, count } in input {
                for _i in 0..count {
                    tracker.step(direction);
                    prop_assert!(tracker.rope().is_connected(), "{}", tracker.rope());
                }
            }
        }

        #[test]
        fn prop_zero_moves_change_nothing(
            input in move_list(),
            knots in 1usize..12,
            direction in cardinal(),
            at in any::<prop::sample::Index>(),
        ) {
            let mut padded = input.clone();
            padded.insert(at.index(input.len() + 1), Move { direction, count: 0 });

            prop_assert_eq!(simulate(input, knots).unwrap(), simulate(padded, knots).unwrap());
        }

        #[test]
        fn prop_simulate_is_deterministic(input in move_list(), knots in 1usize..12) {
            let first = simulate(input.clone(), knots).unwrap();
            let second = simulate(input, knots).unwrap();

            prop_assert_eq!(first, second);
            prop_assert!(first >= 1);
        }
    }
}
