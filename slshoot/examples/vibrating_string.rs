use std::f64::consts::PI;
use slshoot::{
    integrate::IntegratorConfig,
    operator::Constant,
    solve::{ Domain, Solver },
};

// solve for the modes of a vibrating string, u'' + λ u = 0 on (0, π), for
// which λ = n²

fn main() {
    let domain = Domain::new_linspace(0.0, PI, 1000).unwrap();
    let solver
        = Solver::from_domain(domain, Constant::string())
        .with_integrator(IntegratorConfig { rtol: 1e-10, atol: 1e-12, ..Default::default() });

    // successive searches from λ = 1
    let (lambdas, _) = solver.find_multiple_eigenvalues(4).unwrap();
    for (n, lambda) in lambdas.iter().enumerate() {
        println!("expected: {:.6}", ((n + 1) as f64).powi(2));
        println!("computed: {:.6}", lambda);
    }

    // a scan picks up the modes the successive search can't reach
    let scan = ndarray::Array1::linspace(0.3, 50.3, 101);
    for pair in solver.solve_scan(&scan).unwrap() {
        println!("scan: {:.6}", pair.lambda);
    }
}
