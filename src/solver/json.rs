use super::BarrierSolution;
use crate::algebra::*;

use serde::{de::DeserializeOwned, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

/// Reading and writing of solutions, including their path and
/// objective trace, as JSON
pub trait SolutionJSONReadWrite: Sized {
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error>;
    fn read_from_file(file: &mut File) -> Result<Self, io::Error>;
}

impl<T> SolutionJSONReadWrite for BarrierSolution<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json = serde_json::to_string(self)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let solution = serde_json::from_str(&buffer)?;
        Ok(solution)
    }
}

#[test]
fn test_json_io() {
    use crate::solver::SolverStatus;
    use std::io::{Seek, SeekFrom};

    let solution = BarrierSolution {
        x: vec![0.5, 0.25],
        obj_val: -0.75,
        ineq_vals: vec![-0.5],
        eq_residual: vec![],
        eq_dual: vec![],
        path: vec![vec![1., 1.], vec![0.5, 0.25]],
        obj_trace: vec![-2., -0.75],
        status: SolverStatus::Solved,
        outer_iterations: 1,
        inner_iterations: 4,
        solve_time: 1e-3,
    };

    let mut file = tempfile::tempfile().unwrap();
    solution.write_to_file(&mut file).unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let solution2 = BarrierSolution::<f64>::read_from_file(&mut file).unwrap();
    assert_eq!(solution.x, solution2.x);
    assert_eq!(solution.path, solution2.path);
    assert_eq!(solution.obj_trace, solution2.obj_trace);
    assert_eq!(solution.status, solution2.status);
}
