use serde::{Deserialize, Serialize};
use std::iter;

use super::action::Direction;

/// A cell on the game grid.
///
/// Carries no bounds of its own; walls are enforced by
/// [`Snake::detect_collision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move coordinate by delta. Wraps at the `i32` limits, which always lands off-grid.
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Move coordinate one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Check if the coordinate lies in `[0, grid_size)` on both axes
    pub fn is_within(&self, grid_size: i32) -> bool {
        (0..grid_size).contains(&self.x) && (0..grid_size).contains(&self.y)
    }
}

/// One unit of the snake (or the apple): a coordinate plus an opaque display tag.
///
/// The tag is a color name or an asset path and only matters to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodySegment {
    pub coordinate: Coordinate,
    pub display_tag: String,
}

impl BodySegment {
    pub fn new(coordinate: Coordinate, display_tag: impl Into<String>) -> Self {
        Self {
            coordinate,
            display_tag: display_tag.into(),
        }
    }
}

/// What the snake's head ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// Head reached the food
    Apple,
    /// Head left the grid
    Wall,
    /// Head hit its own body
    Snake,
}

/// The snake: one head plus a non-empty body ordered from neck to tail
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    head: BodySegment,
    /// Never contains the head, never empty, only grows
    body: Vec<BodySegment>,
    /// Set by `consume_apple`, cleared by the next `update`
    extend_pending: bool,
}

impl Snake {
    /// Create a snake from a head and at least one body segment.
    ///
    /// `first` sits directly behind the head, `rest` continues towards the tail.
    pub fn new(
        head: BodySegment,
        first: BodySegment,
        rest: impl IntoIterator<Item = BodySegment>,
    ) -> Self {
        let body = iter::once(first).chain(rest).collect();
        Self {
            head,
            body,
            extend_pending: false,
        }
    }

    /// Create the starting snake: a head plus two body segments trailing to its left
    pub fn starting(head: Coordinate, head_tag: &str, body_tag: &str) -> Self {
        Self::new(
            BodySegment::new(head, head_tag),
            BodySegment::new(head.moved_by(-1, 0), body_tag),
            [BodySegment::new(head.moved_by(-2, 0), body_tag)],
        )
    }

    /// Get the head segment
    pub fn head(&self) -> &BodySegment {
        &self.head
    }

    /// Get the body segments (excluding the head), neck first
    pub fn body_parts(&self) -> &[BodySegment] {
        &self.body
    }

    /// Head followed by body, head-to-tail.
    ///
    /// Renderers and index-based lookups rely on this order.
    pub fn all_parts(&self) -> impl Iterator<Item = &BodySegment> + '_ {
        iter::once(&self.head).chain(self.body.iter())
    }

    /// Number of segments including the head
    pub fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Always false; a snake has at least a head and one body segment
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if any segment (head included) sits on `coordinate`
    pub fn occupies(&self, coordinate: Coordinate) -> bool {
        self.all_parts().any(|part| part.coordinate == coordinate)
    }

    pub fn is_growth_pending(&self) -> bool {
        self.extend_pending
    }

    /// Advance the snake one cell in `direction`.
    ///
    /// Every body segment takes the position its predecessor held before this
    /// call. With growth pending, a new tail segment is appended on the cell
    /// the old tail vacated. Reversal is not prevented here; the resulting
    /// self-collision is reported by [`Snake::detect_collision`].
    pub fn update(&mut self, direction: Direction) {
        let mut vacated = self.head.coordinate;
        self.head.coordinate = vacated.moved_in_direction(direction);

        for segment in &mut self.body {
            vacated = std::mem::replace(&mut segment.coordinate, vacated);
        }

        if self.extend_pending {
            let tag = self
                .body
                .last()
                .map(|tail| tail.display_tag.clone())
                .unwrap_or_default();
            self.body.push(BodySegment::new(vacated, tag));
            self.extend_pending = false;
        }
    }

    /// Classify the head's current cell. First match wins: apple, wall, own body.
    pub fn detect_collision(&self, grid_size: i32, food: Coordinate) -> Option<Collision> {
        let head = self.head.coordinate;

        if head == food {
            Some(Collision::Apple)
        } else if !head.is_within(grid_size) {
            Some(Collision::Wall)
        } else if self.body.iter().any(|segment| segment.coordinate == head) {
            Some(Collision::Snake)
        } else {
            None
        }
    }

    /// Schedule one segment of growth for the next `update`
    pub fn consume_apple(&mut self) {
        self.extend_pending = true;
    }

    /// Display tag for the part at `index` in [`Snake::all_parts`] order.
    ///
    /// The last direction is accepted so renderers can orient head/tail assets;
    /// tags are currently direction-independent.
    pub fn part_background(&self, index: usize, _last_direction: Direction) -> Option<&str> {
        self.all_parts()
            .nth(index)
            .map(|part| part.display_tag.as_str())
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::starting(Coordinate::new(5, 5), "yellow", "green")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn coords(snake: &Snake) -> Vec<Coordinate> {
        snake.all_parts().map(|part| part.coordinate).collect()
    }

    /// Snake with the given head and body cells, all tagged "t"
    fn snake_at(head: (i32, i32), body: &[(i32, i32)]) -> Snake {
        let mut cells = body
            .iter()
            .map(|&(x, y)| BodySegment::new(Coordinate::new(x, y), "t"));
        let first = cells.next().expect("test snake needs a body");
        Snake::new(BodySegment::new(Coordinate::new(head.0, head.1), "t"), first, cells)
    }

    #[test]
    fn test_coordinate_movement() {
        let pos = Coordinate::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Coordinate::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Coordinate::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Up), Coordinate::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Down), Coordinate::new(5, 4));
    }

    #[test]
    fn test_update_at_i32_limit_does_not_panic() {
        let mut snake = snake_at((i32::MAX, 0), &[(i32::MAX - 1, 0)]);
        snake.update(Direction::Right);
        assert_eq!(snake.head().coordinate, Coordinate::new(i32::MIN, 0));
        assert_eq!(snake.detect_collision(10, Coordinate::new(0, 0)), Some(Collision::Wall));
    }

    #[test]
    fn test_starting_snake() {
        let snake = Snake::default();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head().coordinate, Coordinate::new(5, 5));
        assert_eq!(snake.head().display_tag, "yellow");
        assert_eq!(
            snake.body_parts(),
            &[
                BodySegment::new(Coordinate::new(4, 5), "green"),
                BodySegment::new(Coordinate::new(3, 5), "green"),
            ]
        );
        assert!(!snake.is_growth_pending());
    }

    #[test]
    fn test_all_parts_is_head_to_tail() {
        let snake = Snake::default();
        assert_eq!(
            coords(&snake),
            vec![
                Coordinate::new(5, 5),
                Coordinate::new(4, 5),
                Coordinate::new(3, 5)
            ]
        );
    }

    #[test]
    fn test_update_shifts_chain() {
        let mut snake = Snake::default();
        snake.update(Direction::Up);
        assert_eq!(
            coords(&snake),
            vec![
                Coordinate::new(5, 6),
                Coordinate::new(5, 5),
                Coordinate::new(4, 5)
            ]
        );
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_growth_is_delayed_one_tick() {
        let mut snake = Snake::default();
        snake.consume_apple();
        assert_eq!(snake.len(), 3);
        assert!(snake.is_growth_pending());

        snake.update(Direction::Right);
        assert_eq!(snake.len(), 4);
        assert!(!snake.is_growth_pending());
        // New tail lands where the old tail was
        assert_eq!(snake.body_parts()[2].coordinate, Coordinate::new(3, 5));
        assert_eq!(snake.body_parts()[2].display_tag, "green");

        snake.update(Direction::Right);
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_reversal_is_not_prevented() {
        let mut snake = Snake::default();
        snake.update(Direction::Left);
        assert_eq!(snake.head().coordinate, Coordinate::new(4, 5));
        assert_eq!(snake.detect_collision(10, Coordinate::new(0, 0)), Some(Collision::Snake));
    }

    #[test]
    fn test_apple_beats_self_collision() {
        let snake = snake_at((3, 3), &[(3, 3), (2, 3)]);
        assert_eq!(snake.detect_collision(10, Coordinate::new(3, 3)), Some(Collision::Apple));
        assert_eq!(snake.detect_collision(10, Coordinate::new(0, 0)), Some(Collision::Snake));
    }

    #[test]
    fn test_apple_beats_wall() {
        let snake = snake_at((10, 5), &[(9, 5)]);
        assert_eq!(snake.detect_collision(10, Coordinate::new(10, 5)), Some(Collision::Apple));
    }

    #[test]
    fn test_wall_beats_self_collision() {
        let snake = snake_at((-1, 5), &[(-1, 5)]);
        assert_eq!(snake.detect_collision(10, Coordinate::new(0, 0)), Some(Collision::Wall));
    }

    #[test]
    fn test_wall_boundaries() {
        let food = Coordinate::new(7, 7);
        for head in [(10, 5), (-1, 5), (5, 10), (5, -1)] {
            let snake = snake_at(head, &[(5, 5)]);
            assert_eq!(snake.detect_collision(10, food), Some(Collision::Wall), "{head:?}");
        }
        for head in [(9, 9), (0, 0)] {
            let snake = snake_at(head, &[(5, 5)]);
            assert_eq!(snake.detect_collision(10, food), None, "{head:?}");
        }
    }

    #[test]
    fn test_detect_collision_does_not_mutate() {
        let snake = Snake::default();
        let before = snake.clone();
        let _ = snake.detect_collision(10, Coordinate::new(5, 5));
        assert_eq!(snake, before);
    }

    #[test]
    fn test_part_background() {
        let snake = Snake::default();
        assert_eq!(snake.part_background(0, Direction::Right), Some("yellow"));
        assert_eq!(snake.part_background(2, Direction::Right), Some("green"));
        assert_eq!(snake.part_background(3, Direction::Right), None);
    }

    #[test]
    fn test_occupies() {
        let snake = Snake::default();
        assert!(snake.occupies(Coordinate::new(5, 5)));
        assert!(snake.occupies(Coordinate::new(3, 5)));
        assert!(!snake.occupies(Coordinate::new(6, 5)));
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    fn arb_snake() -> impl Strategy<Value = Snake> {
        (
            (-20i32..20, -20i32..20),
            prop::collection::vec((-20i32..20, -20i32..20), 1..12),
            any::<bool>(),
        )
            .prop_map(|(head, body, grow)| {
                let mut snake = snake_at(head, &body);
                if grow {
                    snake.consume_apple();
                }
                snake
            })
    }

    proptest! {
        #[test]
        fn update_moves_head_one_unit(mut snake in arb_snake(), direction in arb_direction()) {
            let old = snake.head().coordinate;
            snake.update(direction);
            let new = snake.head().coordinate;
            let (dx, dy) = direction.delta();
            prop_assert_eq!(new, Coordinate::new(old.x + dx, old.y + dy));
        }

        #[test]
        fn update_shifts_each_segment_into_predecessor(mut snake in arb_snake(), direction in arb_direction()) {
            let before = coords(&snake);
            let grew = snake.is_growth_pending();
            snake.update(direction);
            let after = coords(&snake);

            for i in 1..before.len() {
                prop_assert_eq!(after[i], before[i - 1]);
            }
            if grew {
                prop_assert_eq!(after.len(), before.len() + 1);
                prop_assert_eq!(after[before.len()], before[before.len() - 1]);
            } else {
                prop_assert_eq!(after.len(), before.len());
            }
            prop_assert!(!snake.is_growth_pending());
        }
    }
}
