use super::{AdjacencyTable, CELL_COUNT, Direction, HexCell, Season};

/// Radius of the flower in hexes around the centre cell.
const RADIUS: i32 = 3;

/// Axial (dq, dr) offsets for the moving directions, flat-top layout.
const MOVE_OFFSETS: [(Direction, (i32, i32)); 6] = [
    (Direction::N, (0, -1)),
    (Direction::NE, (1, -1)),
    (Direction::SE, (1, 0)),
    (Direction::S, (0, 1)),
    (Direction::SW, (-1, 1)),
    (Direction::NW, (-1, 0)),
];

fn offset(direction: Direction) -> (i32, i32) {
    MOVE_OFFSETS
        .iter()
        .find(|(d, _)| *d == direction)
        .map(|(_, o)| *o)
        .unwrap_or((0, 0))
}

/// Axial coordinates of every cell.
///
/// Cells are numbered column by column (q = -3..=3) and top to bottom
/// within a column, so cell 0 is the top of the leftmost column and cell 18
/// is the centre.
pub fn axial_coords() -> [(i32, i32); CELL_COUNT] {
    let mut coords = [(0, 0); CELL_COUNT];
    let mut next = 0;
    for q in -RADIUS..=RADIUS {
        for r in -RADIUS..=RADIUS {
            let s = -q - r;
            if q.abs().max(r.abs()).max(s.abs()) <= RADIUS {
                coords[next] = (q, r);
                next += 1;
            }
        }
    }
    coords
}

/// Cell at the given axial coordinates, if it is part of the flower.
pub fn cell_at(q: i32, r: i32) -> Option<HexCell> {
    axial_coords()
        .iter()
        .position(|&c| c == (q, r))
        .map(|i| HexCell(i as u8))
}

/// Vertical band of a cell in half-hex steps; negative is the top.
fn band(cell: HexCell) -> Option<i32> {
    let (q, r) = *axial_coords().get(cell.index())?;
    Some(2 * r + q)
}

fn season_for_band(v: i32) -> Season {
    match v {
        v if v <= -3 => Season::Winter,
        v if v <= 0 => Season::Spring,
        v if v <= 2 => Season::Fall,
        _ => Season::Summer,
    }
}

/// The season whose region contains `cell`.
pub fn season_region(cell: HexCell) -> Option<Season> {
    band(cell).map(season_for_band)
}

fn step(cell: HexCell, direction: Direction) -> Option<HexCell> {
    let (q, r) = *axial_coords().get(cell.index())?;
    let (dq, dr) = offset(direction);
    cell_at(q + dq, r + dr)
}

/// Where a step leaving the region re-enters: the far edge of the region
/// along the same line.
fn wrap_target(cell: HexCell, direction: Direction, season: Season) -> HexCell {
    let back = direction.opposite();
    let mut current = cell;
    while let Some(prev) = step(current, back) {
        if season_region(prev) != Some(season) {
            break;
        }
        current = prev;
    }
    current
}

/// Build the adjacency table for one season.
///
/// Cells inside the season's region get all six transitions, wrapping at
/// the region edge. Cells outside the region get the `None` sentinel in
/// every column.
pub fn build_adjacency(season: Season) -> AdjacencyTable {
    let mut table: AdjacencyTable = [[None; 6]; CELL_COUNT];
    for (i, row) in table.iter_mut().enumerate() {
        let cell = HexCell(i as u8);
        if season_region(cell) != Some(season) {
            continue;
        }
        for (col, &direction) in Direction::MOVES.iter().enumerate() {
            let next = match step(cell, direction) {
                Some(n) if season_region(n) == Some(season) => n,
                _ => wrap_target(cell, direction, season),
            };
            row[col] = Some(next);
        }
    }
    table
}

/// Starting cells for a fresh walk: one band in the middle of each region.
pub fn starting_cells(season: Season) -> Vec<HexCell> {
    let start_band = match season {
        Season::Winter => -4,
        Season::Spring => -1,
        Season::Fall => 1,
        Season::Summer => 4,
    };
    (0..CELL_COUNT as u8)
        .map(HexCell)
        .filter(|c| band(*c) == Some(start_band))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashSet, VecDeque};

    #[test]
    fn flower_has_37_distinct_cells() {
        let coords = axial_coords();
        let unique: HashSet<_> = coords.iter().collect();
        assert_eq!(unique.len(), CELL_COUNT);
        assert_eq!(coords[18], (0, 0));
    }

    #[test]
    fn cell_at_inverts_axial_coords() {
        for (i, &(q, r)) in axial_coords().iter().enumerate() {
            assert_eq!(cell_at(q, r), Some(HexCell(i as u8)));
        }
        assert_eq!(cell_at(4, 0), None);
    }

    #[test]
    fn interior_neighbors_are_mutual() {
        for i in 0..CELL_COUNT as u8 {
            let cell = HexCell(i);
            for direction in Direction::MOVES {
                if let Some(n) = step(cell, direction) {
                    assert_eq!(step(n, direction.opposite()), Some(cell));
                }
            }
        }
    }

    #[test]
    fn region_sizes() {
        let count = |season| {
            (0..CELL_COUNT as u8)
                .filter(|i| season_region(HexCell(*i)) == Some(season))
                .count()
        };
        assert_eq!(count(Season::Winter), 10);
        assert_eq!(count(Season::Spring), 10);
        assert_eq!(count(Season::Fall), 7);
        assert_eq!(count(Season::Summer), 10);
    }

    #[test]
    fn spring_contains_cell_17() {
        assert_eq!(season_region(HexCell(17)), Some(Season::Spring));
    }

    #[test]
    fn wrap_from_top_edge_lands_on_bottom_edge_of_region() {
        // Cell 17 is (0, -1); north of it is winter, so the walk wraps south
        // to the bottom of the spring band in the same column: (0, 0).
        let table = build_adjacency(Season::Spring);
        assert_eq!(table[17][0], Some(HexCell(18)));
    }

    #[test]
    fn every_region_is_connected_under_its_adjacency() {
        for season in Season::ALL {
            let table = build_adjacency(season);
            let start = starting_cells(season)[0];
            let mut seen = HashSet::from([start]);
            let mut queue = VecDeque::from([start]);
            while let Some(cell) = queue.pop_front() {
                for next in table[cell.index()].iter().flatten() {
                    if seen.insert(*next) {
                        queue.push_back(*next);
                    }
                }
            }
            let region: HashSet<HexCell> = (0..CELL_COUNT as u8)
                .map(HexCell)
                .filter(|c| season_region(*c) == Some(season))
                .collect();
            assert_eq!(seen, region, "{:?} region not connected", season);
        }
    }
}
