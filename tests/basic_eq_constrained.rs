#![allow(non_snake_case)]
use logbarrier::{algebra::*, solver::*};

fn quiet_settings() -> BarrierSettings<f64> {
    BarrierSettingsBuilder::default()
        .verbose(false)
        .build()
        .unwrap()
}

// negative entropy Σ x_i log(x_i), defined for x > 0
fn neg_entropy(x: &[f64]) -> Evaluation<f64> {
    let n = x.len();
    let value = x.iter().map(|&xi| xi * xi.ln()).sum();
    let gradient = x.iter().map(|&xi| 1. + xi.ln()).collect();
    let mut hessian = Matrix::zeros((n, n));
    for i in 0..n {
        hessian[(i, i)] = 1. / x[i];
    }
    Evaluation::new(value, gradient, hessian)
}

fn entropy_problem() -> BarrierProblem<f64> {
    let mut problem = BarrierProblem::new(3, neg_entropy).unwrap();
    problem
        .add_inequality(AffineFunction::new(vec![-1., 0., 0.], 0.))
        .add_inequality(AffineFunction::new(vec![0., -1., 0.], 0.))
        .add_inequality(AffineFunction::new(vec![0., 0., -1.], 0.));

    let eq = EqualityConstraints::new(Matrix::from(&[[1., 1., 1.]]), vec![1.]).unwrap();
    problem.set_equalities(eq).unwrap();
    problem
}

#[test]
fn test_eq_constrained_entropy() {
    let mut solver = BarrierSolver::new(entropy_problem(), &[0.2, 0.3, 0.5], quiet_settings()).unwrap();
    solver.solve().unwrap();

    assert!(solver.solution.status.is_converged());

    // maximum entropy distribution is uniform
    let third = 1. / 3.;
    let refsol = vec![third, third, third];
    assert!(solver.solution.x.dist(&refsol) <= 1e-6);

    let refobj = -f64::ln(3.);
    assert!(f64::abs(solver.solution.obj_val - refobj) <= 1e-6);

    // stationarity: 1 + log(1/3) + ν = 0
    let refdual = f64::ln(3.) - 1.;
    assert!(f64::abs(solver.solution.eq_dual[0] - refdual) <= 1e-4);
    assert!(solver.solution.eq_residual.norm_inf() <= 1e-10);
}

#[test]
fn test_eq_constrained_infeasible_start_equality() {
    // equality need not hold at x0, the Newton steps restore it
    let mut solver = BarrierSolver::new(entropy_problem(), &[0.2, 0.3, 0.4], quiet_settings()).unwrap();
    solver.solve().unwrap();

    assert!(solver.solution.status.is_converged());
    assert!(solver.solution.eq_residual.norm_inf() <= 1e-10);
    assert!(f64::abs(solver.solution.x.sum() - 1.) <= 1e-10);
}

#[test]
fn test_eq_constrained_two_rows() {
    // minimize ||x||²  s.t.  x1 + x2 + x3 + x4 = 2,  x1 - x4 = 0,  x >= 0
    let f = QuadraticFunction::new(Matrix::identity(4), vec![0.; 4], 0.).unwrap();
    let g: Vec<_> = (0..4)
        .map(|i| {
            let mut a = vec![0.; 4];
            a[i] = -1.;
            AffineFunction::new(a, 0.)
        })
        .collect();
    let A = Matrix::from(&[
        [1., 1., 1., 1.], //
        [1., 0., 0., -1.], //
    ]);
    let eq = EqualityConstraints::new(A, vec![2., 0.]).unwrap();

    let solution = interior_point(f, g, Some(eq), &[0.4, 0.6, 0.6, 0.4], quiet_settings()).unwrap();

    assert!(solution.status.is_converged());
    assert!(solution.x.dist(&[0.5, 0.5, 0.5, 0.5]) <= 1e-6);
    assert_eq!(solution.eq_dual.len(), 2);
    assert_eq!(solution.eq_residual.len(), 2);
    assert!(solution.eq_residual.norm_inf() <= 1e-10);
}

#[test]
fn test_eq_constrained_no_inequalities() {
    // with no inequality constraints the gap bound m/t is zero
    // from the start, and x0 is returned unchanged
    let f = QuadraticFunction::new(Matrix::identity(2), vec![0.; 2], 0.).unwrap();
    let mut problem = BarrierProblem::new(2, f).unwrap();
    let eq = EqualityConstraints::new(Matrix::from(&[[1., 1.]]), vec![1.]).unwrap();
    problem.set_equalities(eq).unwrap();

    let mut solver = BarrierSolver::new(problem, &[0.25, 0.75], quiet_settings()).unwrap();
    solver.solve().unwrap();

    assert_eq!(solver.solution.status, SolverStatus::Solved);
    assert_eq!(solver.solution.x, vec![0.25, 0.75]);
    assert_eq!(solver.solution.outer_iterations, 0);
    assert_eq!(solver.solution.inner_iterations, 0);
    assert_eq!(solver.solution.path, vec![vec![0.25, 0.75]]);
    assert_eq!(solver.solution.obj_trace, vec![0.3125]);
}
