#![allow(non_snake_case)]
use logbarrier::{algebra::*, solver::*};

// a collection of tests to ensure that data of
// incompatible dimension won't be accepted

fn api_dim_check_problem() -> BarrierProblem<f64> {
    let f = QuadraticFunction::new(Matrix::identity(3), vec![0.; 3], 0.).unwrap();
    let mut problem = BarrierProblem::new(3, f).unwrap();
    problem.add_inequality(AffineFunction::new(vec![1., 1., 1.], -1.));
    problem
}

#[test]
fn api_dim_check_working() {
    // This example should work because dimensions are
    // all compatible.  All following checks vary one
    // of these sizes to test dimension checks

    let mut problem = api_dim_check_problem();
    let eq = EqualityConstraints::new(Matrix::from(&[[1., -1., 0.]]), vec![0.]).unwrap();
    problem.set_equalities(eq).unwrap();

    let settings = BarrierSettings::default();
    let solver = BarrierSolver::new(problem, &[0.; 3], settings);
    assert!(solver.is_ok());
}

#[test]
fn api_dim_check_bad_x0() {
    let problem = api_dim_check_problem();
    let settings = BarrierSettings::default();

    let err = BarrierSolver::new(problem, &[0.; 2], settings).err();
    assert_eq!(
        err,
        Some(SolverError::Problem(ProblemError::StartingPointDimension {
            n: 3,
            len: 2
        }))
    );
}

#[test]
fn api_dim_check_bad_A_cols() {
    let mut problem = api_dim_check_problem();
    let eq = EqualityConstraints::new(Matrix::from(&[[1., -1.]]), vec![0.]).unwrap();
    assert_eq!(
        problem.set_equalities(eq).err(),
        Some(ProblemError::EqualityMatrixDimension { n: 3, cols: 2 })
    );
}

#[test]
fn api_dim_check_bad_b() {
    let A = Matrix::from(&[[1., -1., 0.]]);
    assert_eq!(
        EqualityConstraints::new(A, vec![0., 1.]).err(),
        Some(ProblemError::EqualityRhsDimension { rows: 1, rhs: 2 })
    );
}

#[test]
fn api_dim_check_bad_gradient() {
    let mut problem = api_dim_check_problem();
    problem.add_inequality(|_x: &[f64]| Evaluation::new(-1., vec![0.; 2], Matrix::zeros((3, 3))));

    let settings = BarrierSettingsBuilder::default()
        .verbose(false)
        .build()
        .unwrap();
    let mut solver = BarrierSolver::new(problem, &[0.; 3], settings).unwrap();

    assert_eq!(
        solver.solve(),
        Err(SolverError::EvaluationDimension {
            function: EvaluatedFunction::Inequality(1),
            n: 3
        })
    );
    assert_eq!(solver.solution.status, SolverStatus::NumericalError);
}

#[test]
fn api_dim_check_bad_objective_hessian() {
    let f = |x: &[f64]| Evaluation::new(x.sumsq(), x.to_vec(), Matrix::zeros((2, 3)));
    let g = vec![AffineFunction::new(vec![1., 1.], -1.)];
    let settings = BarrierSettingsBuilder::default()
        .verbose(false)
        .build()
        .unwrap();

    assert_eq!(
        interior_point(f, g, None, &[0., 0.], settings).err(),
        Some(SolverError::EvaluationDimension {
            function: EvaluatedFunction::Objective,
            n: 2
        })
    );
}

#[test]
fn api_bad_settings() {
    let mut settings = BarrierSettings::default();
    settings.mu = 0.5;

    let err = BarrierSolver::new(api_dim_check_problem(), &[0.; 3], settings).err();
    assert_eq!(
        err,
        Some(SolverError::Settings(SettingsError::BadFieldValue("mu")))
    );
}

#[test]
fn api_singular_newton_system() {
    // x2 is unbounded and enters neither the Hessian
    // nor any constraint, so the Newton system is singular
    let f = AffineFunction::new(vec![1., 1.], 0.);
    let g = vec![AffineFunction::new(vec![-1., 0.], 0.)];
    let settings = BarrierSettingsBuilder::default()
        .verbose(false)
        .build()
        .unwrap();

    let mut problem = BarrierProblem::new(2, f).unwrap();
    for gi in g {
        problem.add_inequality(gi);
    }
    let mut solver = BarrierSolver::new(problem, &[1., 0.], settings).unwrap();

    assert_eq!(
        solver.solve(),
        Err(SolverError::SingularSystem(
            DenseFactorizationError::Singular(1)
        ))
    );
    assert_eq!(solver.solution.status, SolverStatus::NumericalError);
    assert_eq!(solver.solution.x, vec![1., 0.]);
}

#[test]
fn api_dim_check_bad_affine_constraint() {
    let f = AffineFunction::new(vec![1., 1.], 0.);
    let g = vec![AffineFunction::new(vec![1., 1., 1.], -5.)];
    let settings = BarrierSettingsBuilder::default()
        .verbose(false)
        .build()
        .unwrap();

    assert_eq!(
        interior_point(f, g, None, &[0., 0.], settings).err(),
        Some(SolverError::EvaluationDimension {
            function: EvaluatedFunction::Inequality(0),
            n: 2
        })
    );
}

#[test]
fn api_dim_check_bad_affine_objective() {
    let f = AffineFunction::new(vec![1., 1., 1.], 0.);
    let g = vec![AffineFunction::new(vec![1., 1.], -5.)];
    let settings = BarrierSettings::default();

    assert_eq!(
        interior_point(f, g, None, &[0., 0.], settings).err(),
        Some(SolverError::EvaluationDimension {
            function: EvaluatedFunction::Objective,
            n: 2
        })
    );
}

#[test]
fn api_dim_check_constraint_added_after_new() {
    let settings = BarrierSettingsBuilder::default()
        .verbose(false)
        .build()
        .unwrap();
    let mut solver = BarrierSolver::new(api_dim_check_problem(), &[0.; 3], settings).unwrap();

    solver
        .problem
        .add_inequality(AffineFunction::new(vec![1., 1.], -1.));

    assert_eq!(
        solver.solve(),
        Err(SolverError::EvaluationDimension {
            function: EvaluatedFunction::Inequality(1),
            n: 3
        })
    );
    assert_eq!(solver.solution.status, SolverStatus::NumericalError);
}

#[test]
fn api_dim_check_bad_quadratic() {
    let P = Matrix::identity(3);
    assert_eq!(
        QuadraticFunction::new(P, vec![0.; 2], 0.).err(),
        Some(ProblemError::QuadraticDimension {
            rows: 3,
            cols: 3,
            len: 2
        })
    );

    let P = Matrix::zeros((2, 3));
    assert!(QuadraticFunction::new(P, vec![0.; 2], 0.).is_err());
}
