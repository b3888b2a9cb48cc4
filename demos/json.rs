use logbarrier::solver::*;
use std::fs::File;
use std::io::{Seek, SeekFrom};

fn main() {
    // solve a small LP and save the solution, including the
    // path of iterates, as json for plotting

    let f = AffineFunction::new(vec![-1., -1.], 0.);
    let g = vec![
        AffineFunction::new(vec![0., 1.], -1.),
        AffineFunction::new(vec![1., 0.], -2.),
        AffineFunction::new(vec![0., -1.], 0.),
        AffineFunction::new(vec![-1., -1.], 1.),
    ];

    let settings = BarrierSettingsBuilder::default()
        .verbose(false)
        .build()
        .unwrap();

    let solution = interior_point(f, g, None, &[0.5, 0.75], settings).unwrap();

    let filename = std::env::temp_dir().join("logbarrier_lp.json");
    let mut file = File::options()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(&filename)
        .unwrap();
    solution.write_to_file(&mut file).unwrap();

    // read it back
    file.seek(SeekFrom::Start(0)).unwrap();
    let loaded = BarrierSolution::<f64>::read_from_file(&mut file).unwrap();

    println!("wrote {} path points to {:?}", loaded.path.len(), filename);
}
