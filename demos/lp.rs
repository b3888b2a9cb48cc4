use logbarrier::solver::*;

fn main() {
    // LP Example
    //
    // minimize    -x - y
    // subject to  0 <= y <= 1
    //             x <= 2
    //             y >= 1 - x

    let f = AffineFunction::new(vec![-1., -1.], 0.);

    let mut problem = BarrierProblem::new(2, f).unwrap();
    problem
        .add_inequality(AffineFunction::new(vec![0., 1.], -1.))
        .add_inequality(AffineFunction::new(vec![1., 0.], -2.))
        .add_inequality(AffineFunction::new(vec![0., -1.], 0.))
        .add_inequality(AffineFunction::new(vec![-1., -1.], 1.));

    let settings = BarrierSettings::default();

    let mut solver = BarrierSolver::new(problem, &[0.5, 0.75], settings).unwrap();

    solver.solve().unwrap();

    println!("Solution = {:?}", solver.solution.x);

    // objective value after each barrier weight
    for (k, (x, fx)) in solver
        .solution
        .path
        .iter()
        .zip(solver.solution.obj_trace.iter())
        .enumerate()
    {
        println!("{k:>2}: x = {x:?}, f(x) = {fx}");
    }
}
