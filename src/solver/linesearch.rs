use crate::algebra::*;

/// Result of a backtracking line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearchOutcome<T> {
    /// step length to take
    pub step: T,
    /// whether `step` satisfies the sufficient decrease condition
    pub accepted: bool,
    /// number of times the step was shrunk
    pub shrinks: u32,
}

/// Backtracking line search on the sufficient decrease
/// (Armijo) condition
///
/// ```text
/// φ(x + s*d) <= φ(x) + alpha * s * g'd
/// ```
///
/// starting from `s = 1` and shrinking by `beta` at most `max_iter`
/// times.  When no step is accepted, the smallest step tried is
/// returned with `accepted == false`.
#[derive(Debug, Clone)]
pub struct BacktrackingLineSearch<T> {
    pub alpha: T,
    pub beta: T,
    pub max_iter: u32,
}

impl<T> BacktrackingLineSearch<T>
where
    T: FloatT,
{
    pub fn new(alpha: T, beta: T, max_iter: u32) -> Self {
        Self {
            alpha,
            beta,
            max_iter,
        }
    }

    /// Search along `direction` from `x`, where `value` is the function
    /// value at `x` and `gradient` its gradient.  The closure `phi`
    /// returns the function value at a trial point, or `None` for a
    /// point outside the function's domain.  Such a point never
    /// satisfies the decrease condition.
    pub fn search<F>(
        &self,
        mut phi: F,
        x: &[T],
        value: T,
        gradient: &[T],
        direction: &[T],
    ) -> LineSearchOutcome<T>
    where
        F: FnMut(&[T]) -> Option<T>,
    {
        let slope = gradient.dot(direction);
        let mut trial = vec![T::zero(); x.len()];
        let mut step = T::one();
        let mut shrinks = 0;

        loop {
            trial.waxpby(T::one(), x, step, direction);

            let accepted = match phi(&trial) {
                Some(v) => v <= value + self.alpha * step * slope,
                None => false,
            };

            if accepted || shrinks == self.max_iter {
                return LineSearchOutcome {
                    step,
                    accepted,
                    shrinks,
                };
            }

            step *= self.beta;
            shrinks += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: &[f64]) -> Option<f64> {
        Some(x[0] * x[0])
    }

    #[test]
    fn test_linesearch_full_step() {
        let ls = BacktrackingLineSearch::new(0.01, 0.5, 20);
        // Newton step on x^2 from x = 1
        let out = ls.search(square, &[1.], 1., &[2.], &[-1.]);
        assert_eq!(
            out,
            LineSearchOutcome {
                step: 1.,
                accepted: true,
                shrinks: 0
            }
        );
    }

    #[test]
    fn test_linesearch_backtracks() {
        let ls = BacktrackingLineSearch::new(0.01, 0.5, 20);
        // gradient step overshoots to x = -1
        let out = ls.search(square, &[1.], 1., &[2.], &[-2.]);
        assert_eq!(out.step, 0.5);
        assert!(out.accepted);
        assert_eq!(out.shrinks, 1);
    }

    #[test]
    fn test_linesearch_rejected_points() {
        let ls = BacktrackingLineSearch::new(0.01, 0.5, 20);
        // x^2 restricted to x > 0.5
        let mut calls = 0;
        let phi = |x: &[f64]| {
            calls += 1;
            if x[0] > 0.5 {
                Some(x[0] * x[0])
            } else {
                None
            }
        };
        let out = ls.search(phi, &[1.], 1., &[2.], &[-2.]);
        assert_eq!(out.step, 0.125);
        assert!(out.accepted);
        assert_eq!(out.shrinks, 3);
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_linesearch_failure() {
        let ls = BacktrackingLineSearch::new(0.01, 0.5, 5);
        // ascent direction, never accepted
        let out = ls.search(square, &[1.], 1., &[2.], &[1.]);
        assert_eq!(out.step, 0.5f64.powi(5));
        assert!(!out.accepted);
        assert_eq!(out.shrinks, 5);
    }
}
