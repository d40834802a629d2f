// src/engine/grid.rs
#![forbid(unsafe_code)]

use crate::engine::constants::N;

pub type FaceGrid<T> = [[T; N]; N];

/// Which kind of strip a twist exchanges on a neighbouring face.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    Row,
    Col,
}

/// The single rotation primitive: a quarter turn counter-clockwise.
/// `out[r][c] = g[c][N-1-r]`.
pub fn rotate_ccw<T: Clone>(grid: &mut FaceGrid<T>) {
    let src = grid.clone();
    for r in 0..N {
        for c in 0..N {
            grid[r][c] = src[c][N - 1 - r].clone();
        }
    }
}

/// Apply `times` primitive quarter turns (taken mod 4).
pub fn rotate_quarter_turns<T: Clone>(grid: &mut FaceGrid<T>, times: usize) {
    for _ in 0..(times % 4) {
        rotate_ccw(grid);
    }
}

/// Copy a row or column out of a grid, cells in increasing index order.
pub fn read_strip<T: Clone>(grid: &FaceGrid<T>, axis: Axis, index: usize) -> [T; N] {
    debug_assert!(index < N);
    match axis {
        Axis::Row => grid[index].clone(),
        Axis::Col => core::array::from_fn(|r| grid[r][index].clone()),
    }
}

/// Write a strip back; `reversed` stores it in decreasing index order.
pub fn write_strip<T: Clone>(
    grid: &mut FaceGrid<T>,
    axis: Axis,
    index: usize,
    cells: &[T; N],
    reversed: bool,
) {
    debug_assert!(index < N);
    for k in 0..N {
        let v = if reversed {
            cells[N - 1 - k].clone()
        } else {
            cells[k].clone()
        };
        match axis {
            Axis::Row => grid[index][k] = v,
            Axis::Col => grid[k][index] = v,
        }
    }
}
