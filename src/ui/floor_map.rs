//! Character rendering of a floor plan with its markers.

use crate::models::{Marker, MarkerKind};
use crate::utils::colors::{BLUE, CYAN, RED, paint};

pub const MAP_WIDTH: usize = 60;
pub const MAP_HEIGHT: usize = 20;

fn glyph(kind: MarkerKind) -> char {
    match kind {
        MarkerKind::Asset => 'A',
        MarkerKind::Patient => 'P',
        MarkerKind::Emergency => '!',
    }
}

/// Grid cell of a percentage position.
pub fn cell_of(x: u32, y: u32) -> (usize, usize) {
    let col = (x as usize * MAP_WIDTH / 100).min(MAP_WIDTH - 1);
    let row = (y as usize * MAP_HEIGHT / 100).min(MAP_HEIGHT - 1);
    (col, row)
}

/// Plain character grid; markers sharing a cell show as `*`, and an
/// emergency always wins the cell.
pub fn grid(markers: &[Marker]) -> Vec<Vec<char>> {
    let mut cells = vec![vec![' '; MAP_WIDTH]; MAP_HEIGHT];
    for m in markers {
        let (col, row) = cell_of(m.position.x, m.position.y);
        let g = glyph(m.kind);
        cells[row][col] = match cells[row][col] {
            ' ' => g,
            '!' => '!',
            _ if g == '!' => '!',
            _ => '*',
        };
    }
    cells
}

pub fn render(markers: &[Marker]) -> String {
    let border = format!("+{}+", "-".repeat(MAP_WIDTH));
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');

    for row in grid(markers) {
        out.push('|');
        for c in row {
            match c {
                'A' => out.push_str(&paint("A", BLUE)),
                'P' => out.push_str(&paint("P", CYAN)),
                '!' => out.push_str(&paint("!", RED)),
                other => out.push(other),
            }
        }
        out.push_str("|\n");
    }

    out.push_str(&border);
    out.push('\n');
    out.push_str("A = asset   P = patient   ! = emergency   * = several\n");
    out
}
