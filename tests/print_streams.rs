#![allow(non_snake_case)]

use logbarrier::{algebra::*, io::ConfigurablePrintTarget, solver::*};

fn test_print_solver() -> BarrierSolver<f64> {
    // minimize x²  s.t.  x > 1
    let f = QuadraticFunction::new(Matrix::from(&[[2.]]), vec![0.], 0.).unwrap();
    let mut problem = BarrierProblem::new(1, f).unwrap();
    problem.add_inequality(AffineFunction::new(vec![-1.], 1.));
    let settings = BarrierSettings::default();
    BarrierSolver::new(problem, &[2.], settings).unwrap()
}

#[test]
fn test_print_to_stdout() {
    let mut solver = test_print_solver();
    solver.print_to_stdout();
    solver.solve().unwrap();
}

#[test]
fn test_print_to_buffer() {
    let mut solver = test_print_solver();
    solver.print_to_buffer();
    solver.solve().unwrap();
    let result = solver.get_print_buffer().unwrap();
    assert!(result.contains("logbarrier"));
    assert!(result.contains("inequalities  = 1"));
    assert!(result.contains("Terminated with status"));

    // one status line per barrier weight
    let lines = result
        .lines()
        .filter(|l| l.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .count();
    assert_eq!(lines as u32, solver.info.outer_iterations);
}

#[test]
fn test_print_buffer_not_configured() {
    let mut solver = test_print_solver();
    solver.print_to_sink();
    assert!(solver.get_print_buffer().is_err());
}

#[test]
fn test_print_quiet() {
    let mut solver = test_print_solver();
    solver.settings.verbose = false;
    solver.print_to_buffer();
    solver.solve().unwrap();
    assert!(solver.get_print_buffer().unwrap().is_empty());
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    solver.print_to_file(file.into_file());
    solver.solve().unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("logbarrier"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    solver.print_to_stream(stream);
    solver.solve().unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("logbarrier"));
}

#[test]
fn test_print_to_sink() {
    let mut solver = test_print_solver();
    solver.print_to_sink();
    solver.solve().unwrap();
    // no output
}
