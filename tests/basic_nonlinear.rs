#![allow(non_snake_case)]
use logbarrier::{algebra::*, solver::*};

fn quiet_settings() -> BarrierSettings<f64> {
    BarrierSettingsBuilder::default()
        .verbose(false)
        .build()
        .unwrap()
}

// the unit disc  x1² + x2² - 1 < 0
struct UnitDisc;

impl SmoothFunction<f64> for UnitDisc {
    fn evaluate(&self, x: &[f64]) -> Evaluation<f64> {
        Evaluation::new(
            self.value(x),
            vec![2. * x[0], 2. * x[1]],
            Matrix::from(&[[2., 0.], [0., 2.]]),
        )
    }

    fn value(&self, x: &[f64]) -> f64 {
        x.sumsq() - 1.
    }
}

#[test]
fn test_nonlinear_disc() {
    // minimize x1 + x2 over the unit disc
    let f = AffineFunction::new(vec![1., 1.], 0.);
    let mut problem = BarrierProblem::new(2, f).unwrap();
    problem.add_inequality(UnitDisc);

    let mut solver = BarrierSolver::new(problem, &[0., 0.], quiet_settings()).unwrap();
    solver.solve().unwrap();

    assert!(solver.solution.status.is_converged());

    let r = f64::sqrt(0.5);
    assert!(solver.solution.x.dist(&[-r, -r]) <= 1e-6);
    assert!(f64::abs(solver.solution.obj_val + f64::sqrt(2.)) <= 1e-6);

    // 1/t <= 1e-8 first holds at t = 1e8
    assert_eq!(solver.solution.outer_iterations, 8);

    // the central path stays on the diagonal
    for x in solver.solution.path.iter() {
        assert!(f64::abs(x[0] - x[1]) <= 1e-12);
        assert!(x.sumsq() < 1.);
    }
}

#[test]
fn test_nonlinear_closure_constraint() {
    // minimize x²  s.t.  x > 1, written as the closure 1 - x < 0
    let f = QuadraticFunction::new(Matrix::from(&[[2.]]), vec![0.], 0.).unwrap();
    let g = |x: &[f64]| Evaluation::new(1. - x[0], vec![-1.], Matrix::zeros((1, 1)));

    let solution = interior_point(f, vec![g], None, &[2.], quiet_settings()).unwrap();

    assert!(solution.status.is_converged());
    assert!(f64::abs(solution.x[0] - 1.) <= 1e-6);
    assert!(f64::abs(solution.obj_val - 1.) <= 1e-6);
    assert!(solution.ineq_vals[0] < 0.);
}

#[test]
fn test_nonlinear_f32() {
    // single precision, with a tolerance it can reach
    let settings = BarrierSettingsBuilder::<f32>::default()
        .epsilon(1e-4)
        .verbose(false)
        .build()
        .unwrap();

    let f = AffineFunction::new(vec![-1f32, -1.], 0.);
    let g = vec![
        AffineFunction::new(vec![1f32, 0.], -1.),
        AffineFunction::new(vec![0f32, 1.], -1.),
        AffineFunction::new(vec![-1f32, 0.], 0.),
        AffineFunction::new(vec![0f32, -1.], 0.),
    ];

    let solution = interior_point(f, g, None, &[0.5f32, 0.5], settings).unwrap();
    assert!(solution.status.is_converged());
    assert!(solution.x.dist(&[1., 1.]) <= 1e-3);
}
