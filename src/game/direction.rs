//! Turn costs between headings.
//!
//! Negative values turn left, positive values turn right, the magnitude is the
//! number of quarter turns. Reversals are always `2`. The table is read as
//! data and must not be replaced by modular arithmetic.

use crate::game::types::Heading;

const DIRECTION_COST: [[i32; 4]; 4] = [
    //  N   E   S   W
    [0, 1, 2, -1], // N
    [-1, 0, 1, 2], // E
    [2, -1, 0, 1], // S
    [1, 2, -1, 0], // W
];

impl Heading {
    fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// Signed cost of rotating from `self` to `to`.
    pub fn turn_cost(self, to: Heading) -> i32 {
        DIRECTION_COST[self.index()][to.index()]
    }
}
