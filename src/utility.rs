use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

use crate::search::path::ShortestPathRequest;

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} {pos}/{len} estimated remaining: {eta_precise}")
    {
        bar.set_style(style);
    }
    bar
}

/// Random request with `source != target`, or `None` if the graph has fewer
/// than two vertices.
pub fn random_request<R: Rng>(number_of_vertices: u32, rng: &mut R) -> Option<ShortestPathRequest> {
    if number_of_vertices <= 1 {
        return None;
    }

    let source = rng.gen_range(0..number_of_vertices);
    let mut target = rng.gen_range(0..number_of_vertices - 1);
    if target >= source {
        target += 1;
    }

    Some(ShortestPathRequest::new(source, target))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn requests_have_distinct_endpoints() {
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(random_request(1, &mut rng), None);
        for _ in 0..100 {
            let request = random_request(3, &mut rng).unwrap();
            assert_ne!(request.source, request.target);
            assert!(request.source < 3 && request.target < 3);
        }
    }
}
