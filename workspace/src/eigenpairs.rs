use std::path::PathBuf;
use log::info;
use ndarray as nd;
use lib::{ init_logger, mkdir, write_columns };
use slshoot::solve::Solver;

const NUM_EIGENVALUES: usize = 8;

fn main() -> anyhow::Result<()> {
    init_logger()?;

    let solver = Solver::default();
    let (lambdas, wfs) = solver.find_multiple_eigenvalues(NUM_EIGENVALUES)?;
    for (k, lambda) in lambdas.iter().enumerate() {
        info!("lambda_{} = {:.6}", k, lambda);
    }

    let outdir = PathBuf::from("output");
    mkdir(&outdir)?;
    let index: nd::Array1<f64> = (0..lambdas.len()).map(|k| k as f64).collect();
    write_columns(
        outdir.join("eigenvalues.csv"),
        &["n".to_string(), "lambda".to_string()],
        &[index.view(), lambdas.view()],
    )?;

    let mut headers: Vec<String> = vec!["x".to_string()];
    headers.extend((0..wfs.nrows()).map(|k| format!("u_{}", k)));
    let mut columns: Vec<nd::ArrayView1<f64>> = vec![solver.domain().get_x().view()];
    columns.extend(wfs.outer_iter());
    write_columns(outdir.join("eigenfunctions.csv"), &headers, &columns)?;
    info!("wrote results to {}", outdir.display());
    Ok(())
}
