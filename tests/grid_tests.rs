use bestpath::{Cell, GridMap, SearchProblem};

#[test]
fn parses_dimensions_endpoints_and_costs() {
    let map = GridMap::parse("S12\n.#9\n..G\n").expect("parse");

    assert_eq!(map.width(), 3);
    assert_eq!(map.height(), 3);
    assert_eq!(map.start(), Cell::new(0, 0));
    assert_eq!(map.goal(), Cell::new(2, 2));

    assert_eq!(map.cost_at(Cell::new(0, 0)), Some(1), "start costs 1");
    assert_eq!(map.cost_at(Cell::new(1, 0)), Some(1));
    assert_eq!(map.cost_at(Cell::new(2, 0)), Some(2));
    assert_eq!(map.cost_at(Cell::new(2, 1)), Some(9));
    assert_eq!(map.cost_at(Cell::new(1, 1)), None, "wall has no cost");
    assert_eq!(map.cost_at(Cell::new(5, 5)), None, "out of bounds");
}

#[test]
fn trailing_blank_lines_are_ignored() {
    let map = GridMap::parse("SG\n\n\n").expect("parse");
    assert_eq!(map.height(), 1);
    assert_eq!(map.width(), 2);
}

#[test]
fn neighbors_respect_walls_and_bounds() {
    let map = GridMap::parse("S#.\n..G\n").expect("parse");

    // Corner start: right is a wall, only down remains.
    assert_eq!(map.neighbors(&Cell::new(0, 0)), vec![Cell::new(0, 1)]);

    // (1,1) is walled above and at the bottom edge; left and right remain.
    let mut n = map.neighbors(&Cell::new(1, 1));
    n.sort_by_key(|c| (c.x, c.y));
    assert_eq!(n, vec![Cell::new(0, 1), Cell::new(2, 1)]);
}

#[test]
fn step_cost_is_the_entered_cell() {
    let map = GridMap::parse("S5\n.G\n").expect("parse");
    assert_eq!(map.step_cost(&Cell::new(0, 0), &Cell::new(1, 0)), 5);
    assert_eq!(map.step_cost(&Cell::new(0, 0), &Cell::new(0, 1)), 1);
}

#[test]
fn heuristic_is_manhattan_distance() {
    let map = GridMap::parse("S234\n2#42\n234G\n").expect("parse");
    assert_eq!(map.heuristic(&map.start()), 5);
    assert_eq!(map.heuristic(&Cell::new(3, 0)), 2);
    assert_eq!(map.heuristic(&map.goal()), 0);
}

#[test]
fn parse_errors_are_specific() {
    let cases = [
        ("", "Empty grid map"),
        ("   \n", "Empty grid map"),
        ("S..\n..\n..G", "Ragged grid: row 1 has 2 cells, expected 3"),
        ("S.S\n..G", "Duplicate start"),
        ("S.G\n..G", "Duplicate goal"),
        ("...\n..G", "Missing start cell 'S'"),
        ("S..\n...", "Missing goal cell 'G'"),
        ("S.X\n..G", "Invalid map character 'X' at (2, 0)"),
    ];
    for (text, expected) in cases {
        let err = GridMap::parse(text).expect_err("must fail");
        assert!(
            err.contains(expected),
            "input {text:?}: got {err:?}, expected {expected:?}"
        );
    }
}
