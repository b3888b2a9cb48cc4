#![allow(non_snake_case)]
use logbarrier::algebra::*;
use logbarrier::solver::*;

fn main() {
    // This example shows how to use a custom termination function
    // to halt the solver

    // minimize x1 + x2 over the unit disc
    let f = AffineFunction::new(vec![1., 1.], 0.);
    let disc = |x: &[f64]| {
        Evaluation::new(
            x.sumsq() - 1.,
            vec![2. * x[0], 2. * x[1]],
            Matrix::from(&[[2., 0.], [0., 2.]]),
        )
    };

    let mut problem = BarrierProblem::new(2, f).unwrap();
    problem.add_inequality(disc);

    let settings = BarrierSettingsBuilder::default()
        .mu(4.)
        .build()
        .unwrap();

    let mut solver = BarrierSolver::new(problem, &[0., 0.], settings).unwrap();

    // stop once the suboptimality bound is small enough
    let f = |info: &BarrierInfo<f64>| {
        if info.gap_bound > 1e-3 {
            println!("tick");
            false //continue
        } else {
            println!("BOOM!\n");
            true // stop
        }
    };

    solver.set_termination_callback(f);
    solver.solve().unwrap();

    // setup a custom termination function that carries internal state
    let mut counter = 0;
    let fmut = move |info: &BarrierInfo<f64>| {
        counter += 1;
        println!(
            "Barrier weight {:e}: Newton steps = {}, counter = {}",
            info.t, info.newton_steps, counter
        );
        counter >= 5
    };

    solver.set_termination_callback(fmut);
    solver.solve().unwrap();

    // turn the callback off and solve to completion
    solver.unset_termination_callback();
    solver.solve().unwrap();

    println!("Solution = {:?}", solver.solution.x);
}
