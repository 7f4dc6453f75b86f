use crate::problem::SearchProblem;

/// A grid coordinate. `x` runs right, `y` runs down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn manhattan(self, other: Cell) -> i64 {
        i64::from((self.x - other.x).abs()) + i64::from((self.y - other.y).abs())
    }
}

/// Rectangular grid map demo domain, parsed from text:
/// `.` open (cost 1), `1`..`9` open with that entry cost, `#` wall,
/// `S` start, `G` goal (both cost 1). Exactly one `S` and one `G`.
///
/// Implements [`SearchProblem`] with 4-neighbor moves, step cost equal to
/// the entered cell's cost, and a Manhattan-distance heuristic (admissible
/// because every step costs at least 1).
#[derive(Debug, Clone)]
pub struct GridMap {
    width: i32,
    height: i32,
    cells: Vec<Option<i64>>, // entry cost per cell; None = wall
    start: Cell,
    goal: Cell,
}

impl GridMap {
    /// Parse a map from text. Rows must be equal-length; trailing blank
    /// lines are ignored.
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut rows: Vec<&str> = text.lines().collect();
        while rows.last().is_some_and(|r| r.trim().is_empty()) {
            rows.pop();
        }
        if rows.is_empty() {
            return Err("Empty grid map".to_string());
        }

        let width = rows[0].chars().count();
        let mut cells: Vec<Option<i64>> = Vec::with_capacity(width * rows.len());
        let mut start: Option<Cell> = None;
        let mut goal: Option<Cell> = None;

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(format!(
                    "Ragged grid: row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                ));
            }
            for (x, ch) in row.chars().enumerate() {
                let here = cell_at(x, y)?;
                let cost = match ch {
                    '.' => Some(1),
                    '#' => None,
                    'S' => {
                        if let Some(prev) = start {
                            return Err(format!(
                                "Duplicate start: ({}, {}) and ({}, {})",
                                prev.x, prev.y, here.x, here.y
                            ));
                        }
                        start = Some(here);
                        Some(1)
                    }
                    'G' => {
                        if let Some(prev) = goal {
                            return Err(format!(
                                "Duplicate goal: ({}, {}) and ({}, {})",
                                prev.x, prev.y, here.x, here.y
                            ));
                        }
                        goal = Some(here);
                        Some(1)
                    }
                    '1'..='9' => Some(i64::from(ch as u8 - b'0')),
                    other => {
                        return Err(format!(
                            "Invalid map character {:?} at ({}, {})",
                            other, here.x, here.y
                        ))
                    }
                };
                cells.push(cost);
            }
        }

        let start = start.ok_or_else(|| "Missing start cell 'S'".to_string())?;
        let goal = goal.ok_or_else(|| "Missing goal cell 'G'".to_string())?;

        let width = i32::try_from(width).map_err(|_| "Grid too wide".to_string())?;
        let height = i32::try_from(rows.len()).map_err(|_| "Grid too tall".to_string())?;

        Ok(Self {
            width,
            height,
            cells,
            start,
            goal,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Entry cost at `cell`; `None` for walls and out-of-bounds cells.
    #[inline]
    pub fn cost_at(&self, cell: Cell) -> Option<i64> {
        if !self.in_bounds(cell) {
            return None;
        }
        let idx = usize::try_from(i64::from(cell.y) * i64::from(self.width) + i64::from(cell.x)).ok()?;
        self.cells.get(idx).copied().flatten()
    }
}

#[inline]
fn cell_at(x: usize, y: usize) -> Result<Cell, String> {
    let x = i32::try_from(x).map_err(|_| "Grid too wide".to_string())?;
    let y = i32::try_from(y).map_err(|_| "Grid too tall".to_string())?;
    Ok(Cell::new(x, y))
}

impl SearchProblem for GridMap {
    type State = Cell;

    #[inline]
    fn heuristic(&self, state: &Cell) -> i64 {
        state.manhattan(self.goal)
    }

    fn neighbors(&self, state: &Cell) -> Vec<Cell> {
        let candidates = [
            Cell::new(state.x, state.y - 1),
            Cell::new(state.x + 1, state.y),
            Cell::new(state.x, state.y + 1),
            Cell::new(state.x - 1, state.y),
        ];
        candidates
            .into_iter()
            .filter(|c| self.cost_at(*c).is_some())
            .collect()
    }

    #[inline]
    fn step_cost(&self, _from: &Cell, to: &Cell) -> i64 {
        // Walls are never produced as neighbors; fall back to the uniform
        // cost only for callers probing arbitrary pairs.
        self.cost_at(*to).unwrap_or(1)
    }

    #[inline]
    fn is_goal(&self, state: &Cell) -> bool {
        *state == self.goal
    }
}
