use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Single-threaded reference generator; results are row-major.
pub fn generate_fractal<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Alg::Success> {
    let extent = algorithm.extent();

    (0..extent.height())
        .flat_map(|y| (0..extent.width()).map(move |x| (x, y)))
        .map(|(x, y)| algorithm.compute(x, y))
        .collect()
}
