#![allow(non_snake_case)]
use logbarrier::algebra::*;
use logbarrier::solver::*;

fn main() {
    // QP Example
    //
    // minimize    x² + y² + (z+1)²
    // subject to  x, y, z >= 0
    //             x + y + z = 1

    // ½x'Px + q'x + r with P = 2I, q = (0,0,2), r = 1
    let P = Matrix::from(&[
        [2., 0., 0.], //
        [0., 2., 0.], //
        [0., 0., 2.], //
    ]);
    let q = vec![0., 0., 2.];
    let f = QuadraticFunction::new(P, q, 1.).unwrap();

    // -x_i < 0
    let g = vec![
        AffineFunction::new(vec![-1., 0., 0.], 0.),
        AffineFunction::new(vec![0., -1., 0.], 0.),
        AffineFunction::new(vec![0., 0., -1.], 0.),
    ];

    let A = Matrix::from(&[[1., 1., 1.]]);
    let b = vec![1.];
    let eq = EqualityConstraints::new(A, b).unwrap();

    let x0 = [0.1, 0.2, 0.7];
    let settings = BarrierSettings::default();

    let solution = interior_point(f, g, Some(eq), &x0, settings).unwrap();

    println!("Solution = {:?}", solution.x);
    println!("Objective = {:?}", solution.obj_val);
    println!("Multiplier = {:?}", solution.eq_dual);
}
