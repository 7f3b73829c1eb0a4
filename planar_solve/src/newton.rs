// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use planar_geometry::Vec2;

use crate::jacobian::{DEFAULT_STEP, jacobian_at};
use crate::log;

/// How a Newton iteration ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RootStatus {
    /// The residual dropped below the tolerance.
    Converged,
    /// The iteration budget ran out first.
    IterationLimit,
    /// The Jacobian at the last iterate could not be inverted.
    SingularJacobian,
    /// An iterate went non-finite, or the search stopped with a residual
    /// beyond [`NewtonSolver::divergence_factor`] times the starting one.
    Diverged,
}

/// The result of a root search.
///
/// The point is always meaningful as a best effort; the status only reports
/// how much trust to put in it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootEstimate {
    /// Last accepted iterate.
    pub point: Vec2,
    /// `‖f(point)‖`.
    pub residual: f64,
    /// Newton steps taken.
    pub iterations: u32,
    /// Termination reason.
    pub status: RootStatus,
}

impl RootEstimate {
    /// Returns `true` if the residual met the tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == RootStatus::Converged
    }
}

/// Newton-Raphson configuration for 2D maps.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonSolver {
    /// Maximum number of Newton steps.
    pub max_iterations: u32,
    /// Residual below which the search stops successfully.
    pub tolerance: f64,
    /// Forward-difference step for the Jacobian.
    pub step: f64,
    /// Residual growth, relative to the starting residual, reported as
    /// divergence when the search ends there. It never stops the search.
    pub divergence_factor: f64,
    /// Starting point used by [`NewtonSolver::inverse`].
    pub initial: Vec2,
}

impl Default for NewtonSolver {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            tolerance: 1e-7,
            step: DEFAULT_STEP,
            divergence_factor: 1e6,
            initial: Vec2::new(1.0, 1.0),
        }
    }
}

impl NewtonSolver {
    /// Sets the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the finite-difference step.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the divergence threshold.
    #[must_use]
    pub fn with_divergence_factor(mut self, divergence_factor: f64) -> Self {
        self.divergence_factor = divergence_factor;
        self
    }

    /// Sets the default starting point.
    #[must_use]
    pub fn with_initial(mut self, initial: Vec2) -> Self {
        self.initial = initial;
        self
    }

    /// Searches for `x` with `f(x) ≈ 0`, starting at `initial`.
    ///
    /// Iterates until the residual is below the tolerance, the iteration
    /// budget is spent, or the Jacobian is singular. A non-finite iterate
    /// also stops the search, keeping the last finite one.
    pub fn find_root<F>(&self, f: F, initial: Vec2) -> RootEstimate
    where
        F: Fn(Vec2) -> Vec2,
    {
        let mut x = initial;
        let mut fx = f(x);
        if !x.is_finite() || !fx.is_finite() {
            log::debug!(?initial, "newton: non-finite starting point");
            return RootEstimate {
                point: x,
                residual: fx.magnitude(),
                iterations: 0,
                status: RootStatus::Diverged,
            };
        }
        let limit = self.divergence_factor * fx.magnitude().max(self.tolerance);

        let mut iterations = 0;
        let status = loop {
            let residual = fx.magnitude();
            if residual < self.tolerance {
                break RootStatus::Converged;
            }
            if iterations >= self.max_iterations {
                break RootStatus::IterationLimit;
            }
            let j = jacobian_at(&f, x, self.step);
            let Ok(delta) = j.solve(fx) else {
                break RootStatus::SingularJacobian;
            };
            let next = x - delta;
            let f_next = f(next);
            if !next.is_finite() || !f_next.is_finite() {
                break RootStatus::Diverged;
            }
            x = next;
            fx = f_next;
            iterations += 1;
            log::trace!(iterations, residual = fx.magnitude(), "newton step");
        };
        let status = match status {
            RootStatus::IterationLimit | RootStatus::SingularJacobian
                if fx.magnitude() > limit =>
            {
                RootStatus::Diverged
            }
            status => status,
        };

        if status != RootStatus::Converged {
            log::debug!(?status, iterations, ?x, "newton: no converged root");
        }
        RootEstimate {
            point: x,
            residual: fx.magnitude(),
            iterations,
            status,
        }
    }

    /// Returns the numerical inverse of `f`, starting every search at
    /// [`NewtonSolver::initial`].
    pub fn inverse<F>(self, f: F) -> impl Fn(Vec2) -> Vec2
    where
        F: Fn(Vec2) -> Vec2,
    {
        move |y| self.find_root(|x| f(x) - y, self.initial).point
    }
}

/// Searches for a root of `f` with the default [`NewtonSolver`].
pub fn find_root_2d<F>(f: F, initial: Vec2) -> RootEstimate
where
    F: Fn(Vec2) -> Vec2,
{
    NewtonSolver::default().find_root(f, initial)
}

/// Numerical inverse of `f`: `y ↦ x` with `f(x) ≈ y`, starting at `(1, 1)`.
///
/// Best effort: when the search does not converge the last iterate is
/// returned anyway. Use [`NewtonSolver::find_root`] to inspect the status.
pub fn inverse_2d<F>(f: F) -> impl Fn(Vec2) -> Vec2
where
    F: Fn(Vec2) -> Vec2,
{
    NewtonSolver::default().inverse(f)
}

/// Like [`inverse_2d`], starting every search at `initial`.
pub fn inverse_2d_from<F>(f: F, initial: Vec2) -> impl Fn(Vec2) -> Vec2
where
    F: Fn(Vec2) -> Vec2,
{
    NewtonSolver::default().with_initial(initial).inverse(f)
}

#[cfg(test)]
mod tests {
    use planar_geometry::Matrix2;

    use super::*;

    #[test]
    fn identity_converges_in_one_step() {
        let est = find_root_2d(|v| v - Vec2::new(3.0, 4.0), Vec2::new(1.0, 1.0));
        assert!(est.converged());
        assert_eq!(est.iterations, 1);
        assert!(est.point.distance(Vec2::new(3.0, 4.0)) < 1e-6);
    }

    #[test]
    fn starting_on_the_root_takes_no_steps() {
        let est = find_root_2d(|v| v, Vec2::ZERO);
        assert_eq!(est.status, RootStatus::Converged);
        assert_eq!(est.iterations, 0);
        assert_eq!(est.point, Vec2::ZERO);
    }

    #[test]
    fn constant_map_has_singular_jacobian() {
        let start = Vec2::new(2.0, -1.0);
        let est = find_root_2d(|_| Vec2::new(1.0, 1.0), start);
        assert_eq!(est.status, RootStatus::SingularJacobian);
        assert_eq!(est.point, start);
        assert_eq!(est.iterations, 0);
    }

    #[test]
    fn iteration_limit_returns_best_effort() {
        // Newton on z ↦ z² only halves the distance to the double root.
        let solver = NewtonSolver::default().with_max_iterations(3);
        let est = solver.find_root(|v| v.complex_mul(v), Vec2::new(1.0, 1.0));
        assert_eq!(est.status, RootStatus::IterationLimit);
        assert_eq!(est.iterations, 3);
        assert!(est.point.magnitude() < Vec2::new(1.0, 1.0).magnitude());
    }

    #[test]
    fn non_finite_iterates_are_reported_as_divergence() {
        let start = Vec2::new(1.0, 1.0);
        let est = find_root_2d(
            |v| {
                if v.x < 0.0 {
                    Vec2::new(f64::NAN, f64::NAN)
                } else {
                    v + Vec2::new(5.0, 5.0)
                }
            },
            start,
        );
        assert_eq!(est.status, RootStatus::Diverged);
        assert_eq!(est.point, start);
    }

    #[test]
    fn residual_growth_does_not_stop_the_search() {
        // From just right of zero the first step of x² − 1 overshoots to
        // x ≈ 50, far past the divergence limit, then walks back to 1.
        let f = |v: Vec2| Vec2::new(v.x * v.x - 1.0, v.y);
        let start = Vec2::new(0.01, 0.0);
        let solver = NewtonSolver::default().with_divergence_factor(100.0);

        let est = solver.find_root(f, start);
        assert_eq!(est.status, RootStatus::Converged);
        assert!(est.point.distance(Vec2::new(1.0, 0.0)) < 1e-6, "{est:?}");
        assert!(est.iterations > 5);

        // Stopped right after the overshoot, the large residual is flagged.
        let est = solver.with_max_iterations(1).find_root(f, start);
        assert_eq!(est.status, RootStatus::Diverged);
        assert_eq!(est.iterations, 1);
        assert!(est.point.x > 40.0, "{est:?}");
    }

    #[test]
    fn non_finite_start_is_reported_as_divergence() {
        let est = find_root_2d(|v| v, Vec2::new(f64::INFINITY, 0.0));
        assert_eq!(est.status, RootStatus::Diverged);
        assert_eq!(est.iterations, 0);
    }

    #[test]
    fn inverse_of_linear_map() {
        let m = Matrix2::new(2.0, 1.0, -1.0, 3.0);
        let inv = inverse_2d(move |v| m.apply(v));
        let y = Vec2::new(4.0, -9.0);
        let x = inv(y);
        assert!(m.apply(x).distance(y) < 1e-6, "got {x:?}");
    }

    #[test]
    fn inverse_of_squaring_map_uses_initial_guess() {
        // z ↦ z² has two pre-images; the guess picks the branch.
        let f = |v: Vec2| v.complex_mul(v);
        let y = Vec2::new(0.0, 2.0); // (1 + i)² = 2i
        let pos = inverse_2d_from(f, Vec2::new(2.0, 2.0))(y);
        let neg = inverse_2d_from(f, Vec2::new(-2.0, -2.0))(y);
        assert!(pos.distance(Vec2::new(1.0, 1.0)) < 1e-6, "got {pos:?}");
        assert!(neg.distance(Vec2::new(-1.0, -1.0)) < 1e-6, "got {neg:?}");
    }

    #[test]
    fn builder_setters() {
        let s = NewtonSolver::default()
            .with_tolerance(1e-3)
            .with_step(1e-4)
            .with_divergence_factor(10.0)
            .with_initial(Vec2::ZERO);
        assert_eq!(s.tolerance, 1e-3);
        assert_eq!(s.step, 1e-4);
        assert_eq!(s.divergence_factor, 10.0);
        assert_eq!(s.initial, Vec2::ZERO);
        assert_eq!(s.max_iterations, 20);
    }
}
