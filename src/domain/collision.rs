//! Collision resolution between the agent's circle and solid grid cells.
//!
//! Only the four unit cells sharing the lattice corner nearest the agent are
//! examined. That keeps resolution O(1) in the grid size and is sound as long
//! as both the stride and the body radius stay below one cell, which the
//! configuration assumes. Resolution runs in two passes: axis-aligned face
//! corrections first, then radial corner corrections against the face-resolved
//! position.

use super::{Grid, Position};

/// Push `position` out of any solid cell it penetrates. Returns the corrected
/// position and whether any correction was applied.
pub fn resolve(grid: &Grid, position: Position, radius: f64) -> (Position, bool) {
    let cell_x = position.x().round() as i64;
    let cell_y = position.y().round() as i64;
    let cells = [
        (cell_x - 1, cell_y - 1),
        (cell_x - 1, cell_y),
        (cell_x, cell_y),
        (cell_x, cell_y - 1),
    ];

    let mut resolved = position;
    let mut collided = false;

    // All face corrections complete before the first corner check; corner
    // contacts must be measured from the face-resolved position.
    for &cell in &cells {
        if let Some(pushed) = resolve_face(grid, cell, resolved, radius) {
            resolved = pushed;
            collided = true;
        }
    }

    for &cell in &cells {
        if let Some(pushed) = resolve_corner(grid, cell, resolved, radius) {
            resolved = pushed;
            collided = true;
        }
    }

    (resolved, collided)
}

/// Axis-aligned correction against one cell. When the position lies within the
/// cell's span on one axis and closer than `radius` to a face on the other,
/// it is pushed out perpendicular to that face. Both axes are evaluated from
/// the same starting position and a single cell may correct both.
fn resolve_face(grid: &Grid, cell: (i64, i64), position: Position, radius: f64) -> Option<Position> {
    let (cell_x, cell_y) = cell;
    if !grid.is_solid(cell_x, cell_y) {
        return None;
    }

    let (x0, x1) = (cell_x as f64, cell_x as f64 + 1.0);
    let (y0, y1) = (cell_y as f64, cell_y as f64 + 1.0);
    let center_x = (x0 + x1) / 2.0;
    let center_y = (y0 + y1) / 2.0;

    let (x, y): (f64, f64) = position.into();
    let mut new_x = x;
    let mut new_y = y;

    if x0 <= x && x <= x1 {
        if y > center_y && y - y1 < radius {
            new_y = y1 + radius;
        } else if y < center_y && y0 - y < radius {
            new_y = y0 - radius;
        }
    }

    if y0 <= y && y <= y1 {
        if x > center_x && x - x1 < radius {
            new_x = x1 + radius;
        } else if x < center_x && x0 - x < radius {
            new_x = x0 - radius;
        }
    }

    if new_x != x || new_y != y {
        Some(Position::new(new_x, new_y))
    } else {
        None
    }
}

/// Radial correction against one cell's nearest corner. A position within
/// `radius` of the corner is pushed outward along the corner-to-position
/// vector until it sits at exactly `radius`.
fn resolve_corner(
    grid: &Grid,
    cell: (i64, i64),
    position: Position,
    radius: f64,
) -> Option<Position> {
    let (cell_x, cell_y) = cell;
    if !grid.is_solid(cell_x, cell_y) {
        return None;
    }

    let (x0, x1) = (cell_x as f64, cell_x as f64 + 1.0);
    let (y0, y1) = (cell_y as f64, cell_y as f64 + 1.0);
    let center_x = (x0 + x1) / 2.0;
    let center_y = (y0 + y1) / 2.0;

    let (x, y): (f64, f64) = position.into();
    let corner_x = if x <= center_x { x0 } else { x1 };
    let corner_y = if y <= center_y { y0 } else { y1 };

    let (dx, dy) = (x - corner_x, y - corner_y);
    let distance_squared = dx * dx + dy * dy;
    if distance_squared >= radius * radius {
        return None;
    }

    // Deferred square root: only taken once a contact is certain.
    let distance = distance_squared.sqrt();
    if distance == 0.0 {
        // Center exactly on the corner leaves no outward direction; skip.
        return None;
    }

    Some(Position::new(
        corner_x + dx * radius / distance,
        corner_y + dy * radius / distance,
    ))
}
