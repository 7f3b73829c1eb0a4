// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use planar_geometry::{Path, Rectangle, Vec2};

use crate::log;

/// Samples the graph of `y = f(x)` across the horizontal extent of `bounds`.
///
/// `samples` abscissas are spaced evenly from `bounds.min_x` to
/// `bounds.max_x`, both included. Wherever `f` returns `None` or a
/// non-finite value the graph is broken, so each returned path is one
/// continuous run. Runs of a single point are dropped, and fewer than two
/// samples produce no paths.
///
/// The vertical extent of `bounds` is not used for clipping; renderers clip
/// the paths to the screen.
pub fn sample_graph<F>(f: F, bounds: Rectangle, samples: usize) -> Vec<Path>
where
    F: Fn(f64) -> Option<f64>,
{
    let mut runs = Vec::new();
    if samples < 2 {
        return runs;
    }
    let step = bounds.width() / (samples - 1) as f64;
    let mut run = Vec::new();
    for i in 0..samples {
        let x = if i == samples - 1 {
            bounds.max_x
        } else {
            bounds.min_x + i as f64 * step
        };
        match f(x).filter(|y| y.is_finite()) {
            Some(y) => run.push(Vec2::new(x, y)),
            None => {
                log::trace!(x, "graph: sample dropped");
                flush(&mut runs, &mut run);
            }
        }
    }
    flush(&mut runs, &mut run);
    runs
}

fn flush(runs: &mut Vec<Path>, run: &mut Vec<Vec2>) {
    if run.len() >= 2 {
        runs.push(Path::new(core::mem::take(run)));
    } else {
        run.clear();
    }
}
