use std::path::PathBuf;
use log::info;
use ndarray as nd;
use lib::{ init_logger, mkdir, write_columns };
use slshoot::solve::Solver;

// tabulate u(x_end) over a range of eigenvalues for the default problem

fn main() -> anyhow::Result<()> {
    init_logger()?;

    let solver = Solver::default();
    let lambdas: nd::Array1<f64> = nd::Array1::linspace(0.0, 50.0, 501);
    let ends: nd::Array1<f64> = solver.shoot_scan(&lambdas)?;
    let sign_changes
        = ends.iter().zip(ends.iter().skip(1))
        .filter(|(a, b)| **a * **b < 0.0)
        .count();
    info!("u(end) changes sign {} times over the scan", sign_changes);

    let outdir = PathBuf::from("output");
    mkdir(&outdir)?;
    write_columns(
        outdir.join("shoot_scan.csv"),
        &["lambda".to_string(), "u_end".to_string()],
        &[lambdas.view(), ends.view()],
    )?;
    Ok(())
}
