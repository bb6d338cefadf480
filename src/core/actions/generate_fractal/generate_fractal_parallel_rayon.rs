use rayon::prelude::*;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Generates fractal data in parallel with cancellation support.
///
/// Rows are distributed over rayon's work-stealing pool. Each row checks
/// the token when it starts and every [`CANCEL_CHECK_INTERVAL_PIXELS`]
/// pixels after that, so a superseded render stops promptly.
///
/// Returns the same row-major ordering as
/// [`generate_fractal`](crate::core::actions::generate_fractal::generate_fractal::generate_fractal),
/// so the output is identical however the rows were scheduled.
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    C: CancelToken,
{
    let extent = algorithm.extent();
    let row_width = extent.width() as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, Cancelled> = (0..extent.height())
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for x in 0..extent.width() {
                if x as usize % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                row.push(algorithm.compute(x, y));
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use crate::core::data::screen_extent::ScreenExtent;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug)]
    struct StubAlgorithm {
        extent: ScreenExtent,
    }

    impl FractalAlgorithm for StubAlgorithm {
        type Success = u64;

        fn extent(&self) -> ScreenExtent {
            self.extent
        }

        fn compute(&self, x: u32, y: u32) -> u64 {
            u64::from(x) * 1000 + u64::from(y)
        }
    }

    fn stub(width: u32, height: u32) -> StubAlgorithm {
        StubAlgorithm {
            extent: ScreenExtent::new(width, height).unwrap(),
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let algorithm = stub(11, 9);

        let sequential = generate_fractal(&algorithm);
        let parallel = generate_fractal_parallel_rayon_cancelable(&algorithm, &NeverCancel).unwrap();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let algorithm = stub(1, 1);

        let result = generate_fractal_parallel_rayon_cancelable(&algorithm, &NeverCancel).unwrap();

        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_rayon_with_large_extent() {
        let algorithm = stub(2500, 101);

        let sequential = generate_fractal(&algorithm);
        let parallel = generate_fractal_parallel_rayon_cancelable(&algorithm, &NeverCancel).unwrap();

        assert_eq!(parallel.len(), 2500 * 101);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_pre_cancelled_token_returns_cancelled() {
        let algorithm = stub(10, 10);
        let token = || true;

        let result = generate_fractal_parallel_rayon_cancelable(&algorithm, &token);

        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn test_cancellation_mid_render_stops_work() {
        let algorithm = stub(64, 64);
        let checks = AtomicUsize::new(0);
        let flag = AtomicBool::new(false);
        let token = || {
            if checks.fetch_add(1, Ordering::Relaxed) >= 8 {
                flag.store(true, Ordering::Relaxed);
            }
            flag.load(Ordering::Relaxed)
        };

        let result = generate_fractal_parallel_rayon_cancelable(&algorithm, &token);

        assert_eq!(result, Err(Cancelled));
    }
}
