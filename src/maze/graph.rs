//! Connectivity and goal placement
//!
//! The goal is the far end of the longest simple path from the start. The
//! search is an exhaustive backtracking DFS with no memoization, so its cost
//! grows exponentially with the number of open cells. Hand-authored mazes are
//! tens of cells, which keeps this fast; large generated mazes would need a
//! different strategy. The walk keeps its frames on a heap `Vec`, so path
//! length is bounded by memory rather than by the thread's stack.

use std::collections::VecDeque;

use super::grid::{CellKind, Coord, Grid, MazeError};

/// Neighbor order: right, left, down, up (row delta, col delta)
///
/// Determines which of several equally long paths wins.
pub const DIRECTIONS: [(i64, i64); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// A maze grid plus its precomputed start and goal
#[derive(Debug, Clone)]
pub struct MazeGraph {
    grid: Grid,
    start: Coord,
    /// Longest path from start; last entry is the goal
    path: Vec<Coord>,
}

impl MazeGraph {
    /// Wrap a grid and compute its goal
    pub fn new(grid: Grid) -> Self {
        let start = scan_start(&grid);
        let path = longest_path_from(&grid, start);
        log::debug!(
            "Maze {}x{}: start ({}, {}), goal ({}, {}), path length {}",
            grid.rows(),
            grid.cols(),
            start.row,
            start.col,
            path[path.len() - 1].row,
            path[path.len() - 1].col,
            path.len()
        );
        Self { grid, start, path }
    }

    /// Build from coded rows (0 = open, 1 = wall, 2 = start)
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MazeError> {
        Ok(Self::new(Grid::from_rows(rows)?))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// First Start cell in row-major order, or (0, 0) if the maze has none
    ///
    /// The fallback is not validated: a maze without a start marker whose
    /// top-left cell is a wall spawns the ball inside that wall.
    pub fn find_start(&self) -> Coord {
        self.start
    }

    /// Far end of the longest path from the start
    ///
    /// Equals the start when nothing else is reachable.
    pub fn find_goal(&self) -> Coord {
        self.path[self.path.len() - 1]
    }

    /// The path whose endpoint is the goal, start first
    pub fn longest_path(&self) -> &[Coord] {
        &self.path
    }

    /// Passable in-bounds neighbors in [`DIRECTIONS`] order
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        neighbors(&self.grid, coord)
    }

    /// Whether `coord` can be reached from the start
    pub fn is_reachable(&self, coord: Coord) -> bool {
        let Some(target) = self.grid.index(coord) else {
            return false;
        };
        if coord == self.start {
            return true;
        }
        let mut seen = vec![false; self.grid.len()];
        let mut queue = VecDeque::new();
        if let Some(i) = self.grid.index(self.start) {
            seen[i] = true;
            queue.push_back(self.start);
        }
        while let Some(cell) = queue.pop_front() {
            for next in neighbors(&self.grid, cell) {
                let Some(i) = self.grid.index(next) else {
                    continue;
                };
                if seen[i] {
                    continue;
                }
                if i == target {
                    return true;
                }
                seen[i] = true;
                queue.push_back(next);
            }
        }
        false
    }
}

fn scan_start(grid: &Grid) -> Coord {
    grid.iter()
        .find(|&(_, kind)| kind == CellKind::Start)
        .map(|(coord, _)| coord)
        .unwrap_or(Coord::ORIGIN)
}

/// The cell one step from `coord` in direction `(dr, dc)`, if passable
fn step(grid: &Grid, coord: Coord, (dr, dc): (i64, i64)) -> Option<Coord> {
    let row = coord.row as i64 + dr;
    let col = coord.col as i64 + dc;
    if row < 0 || col < 0 {
        return None;
    }
    let next = Coord::new(row as usize, col as usize);
    grid.is_passable(next).then_some(next)
}

fn neighbors(grid: &Grid, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
    DIRECTIONS.iter().filter_map(move |&dir| step(grid, coord, dir))
}

/// Exhaustive DFS; the first path found at the maximum length wins
///
/// Each frame is a cell plus the index of the next direction to try. The
/// best path is recorded when a frame is popped: a path of equal length can
/// only finish later if it was also discovered later, so strict comparison
/// keeps the first one in traversal order.
fn longest_path_from(grid: &Grid, start: Coord) -> Vec<Coord> {
    let mut visited = vec![false; grid.len()];
    if let Some(i) = grid.index(start) {
        visited[i] = true;
    }
    let mut frames: Vec<(Coord, usize)> = vec![(start, 0)];
    let mut best: Vec<Coord> = Vec::new();

    while let Some(frame) = frames.last_mut() {
        let (at, dir) = *frame;
        if dir == DIRECTIONS.len() {
            if frames.len() > best.len() {
                best = frames.iter().map(|&(c, _)| c).collect();
            }
            frames.pop();
            if let Some(i) = grid.index(at) {
                visited[i] = false;
            }
            continue;
        }
        frame.1 += 1;

        let Some(next) = step(grid, at, DIRECTIONS[dir]) else {
            continue;
        };
        let Some(i) = grid.index(next) else {
            continue;
        };
        if visited[i] {
            continue;
        }
        visited[i] = true;
        frames.push((next, 0));
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_valid_path(grid: &Grid, path: &[Coord]) -> bool {
        let steps_ok = path.windows(2).all(|w| {
            let dr = w[0].row.abs_diff(w[1].row);
            let dc = w[0].col.abs_diff(w[1].col);
            dr + dc == 1
        });
        let mut seen = std::collections::HashSet::new();
        let unique = path.iter().all(|c| seen.insert(*c));
        steps_ok && unique && path[1..].iter().all(|&c| grid.is_passable(c))
    }

    #[test]
    fn test_small_maze_goal() {
        let maze = MazeGraph::from_rows(&[[2u8, 0, 1], [0, 0, 1], [1, 0, 0]]).unwrap();
        assert_eq!(maze.find_start(), Coord::new(0, 0));
        assert_eq!(maze.find_goal(), Coord::new(2, 2));
        // (0,0) (0,1) (1,1) (2,1) (2,2): the right-first branch is found first
        assert_eq!(
            maze.longest_path(),
            &[
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(2, 1),
                Coord::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_straight_corridor_far_end() {
        for n in 1..8 {
            let mut row = vec![0u8; n];
            row[0] = 2;
            let maze = MazeGraph::from_rows(&[row]).unwrap();
            assert_eq!(maze.find_goal(), Coord::new(0, n - 1));
            assert_eq!(maze.longest_path().len(), n);
        }
    }

    #[test]
    fn test_vertical_corridor_from_bottom() {
        let maze = MazeGraph::from_rows(&[[0u8], [0], [0], [2]]).unwrap();
        assert_eq!(maze.find_start(), Coord::new(3, 0));
        assert_eq!(maze.find_goal(), Coord::new(0, 0));
    }

    #[test]
    fn test_isolated_start_is_goal() {
        let maze = MazeGraph::from_rows(&[[1u8, 1, 1], [1, 2, 1], [1, 1, 0]]).unwrap();
        assert_eq!(maze.find_goal(), Coord::new(1, 1));
        assert_eq!(maze.longest_path().len(), 1);
    }

    #[test]
    fn test_missing_start_defaults_to_origin() {
        let maze = MazeGraph::from_rows(&[[0u8, 0], [1, 0]]).unwrap();
        assert_eq!(maze.find_start(), Coord::ORIGIN);
        assert_eq!(maze.find_goal(), Coord::new(1, 1));

        // Fallback is kept even when the origin is a wall
        let walled = MazeGraph::from_rows(&[[1u8, 0, 0]]).unwrap();
        assert_eq!(walled.find_start(), Coord::ORIGIN);
        assert_eq!(walled.grid().get(Coord::ORIGIN), Some(CellKind::Wall));
        assert_eq!(walled.find_goal(), Coord::new(0, 2));
    }

    #[test]
    fn test_first_start_marker_wins() {
        let maze = MazeGraph::from_rows(&[[0u8, 0, 2], [2, 0, 0]]).unwrap();
        assert_eq!(maze.find_start(), Coord::new(0, 2));
    }

    #[test]
    fn test_tie_broken_by_direction_order() {
        // Two arms of equal length; right is explored before left
        let maze = MazeGraph::from_rows(&[[0u8, 0, 2, 0, 0]]).unwrap();
        assert_eq!(maze.find_goal(), Coord::new(0, 4));

        // Down is explored before up
        let maze = MazeGraph::from_rows(&[[0u8], [2], [0]]).unwrap();
        assert_eq!(maze.find_goal(), Coord::new(2, 0));
    }

    #[test]
    fn test_backtracking_finds_longer_branch() {
        // Right-first walk hits a dead end; the longer loop goes down
        let maze = MazeGraph::from_rows(&[
            [2u8, 0, 1, 1],
            [0, 1, 1, 1],
            [0, 0, 0, 0],
            [1, 1, 1, 0],
        ])
        .unwrap();
        assert_eq!(maze.find_goal(), Coord::new(3, 3));
        assert_eq!(maze.longest_path().len(), 7);
    }

    #[test]
    fn test_open_loop_visits_every_cell() {
        // 2x3 open block has a Hamiltonian path from the corner
        let maze = MazeGraph::from_rows(&[[2u8, 0, 0], [0, 0, 0]]).unwrap();
        assert_eq!(maze.longest_path().len(), 6);
        assert!(is_valid_path(maze.grid(), maze.longest_path()));
    }

    #[test]
    fn test_long_corridor_does_not_recurse() {
        let mut row = vec![0u8; 200_000];
        row[0] = 2;
        let maze = MazeGraph::from_rows(&[row]).unwrap();
        assert_eq!(maze.find_goal(), Coord::new(0, 199_999));
        assert_eq!(maze.longest_path().len(), 200_000);
    }

    #[test]
    fn test_reachability() {
        let maze = MazeGraph::from_rows(&[[2u8, 0, 1, 0], [1, 0, 1, 0]]).unwrap();
        assert!(maze.is_reachable(Coord::new(0, 0)));
        assert!(maze.is_reachable(Coord::new(1, 1)));
        assert!(!maze.is_reachable(Coord::new(0, 3)));
        assert!(!maze.is_reachable(Coord::new(0, 2)));
        assert!(!maze.is_reachable(Coord::new(5, 5)));
    }

    #[test]
    fn test_neighbors_order() {
        let maze = MazeGraph::from_rows(&[[0u8, 0, 0], [0, 2, 0], [0, 0, 0]]).unwrap();
        let n: Vec<_> = maze.neighbors(Coord::new(1, 1)).collect();
        assert_eq!(
            n,
            vec![
                Coord::new(1, 2),
                Coord::new(1, 0),
                Coord::new(2, 1),
                Coord::new(0, 1),
            ]
        );
    }

    fn arb_rows() -> impl Strategy<Value = Vec<Vec<u8>>> {
        (1usize..=4, 1usize..=4).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(
                prop::collection::vec(prop_oneof![3 => Just(0u8), 1 => Just(1u8)], cols),
                rows,
            )
            .prop_map(|mut grid| {
                grid[0][0] = 2;
                grid
            })
        })
    }

    proptest! {
        #[test]
        fn prop_goal_is_passable_reachable_and_stable(rows in arb_rows()) {
            let maze = MazeGraph::from_rows(&rows).unwrap();
            let goal = maze.find_goal();

            let kind = maze.grid().get(goal).unwrap();
            prop_assert!(matches!(kind, CellKind::Open | CellKind::Start));
            prop_assert!(maze.is_reachable(goal));
            prop_assert!(is_valid_path(maze.grid(), maze.longest_path()));

            let again = MazeGraph::from_rows(&rows).unwrap();
            prop_assert_eq!(again.find_goal(), goal);
            prop_assert_eq!(maze.find_goal(), goal);
        }
    }
}
