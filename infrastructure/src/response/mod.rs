//! Reply randomness.

use rand::Rng;
use sentibot_domain::ResponseChooser;

/// Picks uniformly among a bucket's templates using the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomChooser;

impl ResponseChooser for RandomChooser {
    fn choose(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentibot_domain::{ResponseCategory, ResponseSelector, SentimentLabel};
    use std::sync::Arc;

    #[test]
    fn test_choice_stays_in_range() {
        let chooser = RandomChooser;
        for len in 1..6 {
            for _ in 0..50 {
                assert!(chooser.choose(len) < len);
            }
        }
        assert_eq!(chooser.choose(0), 0);
    }

    #[test]
    fn test_selector_draws_from_expected_bucket() {
        let selector = ResponseSelector::new(Arc::new(RandomChooser));
        let bucket = ResponseCategory::NegativeEmpathy.templates();
        for _ in 0..30 {
            let reply = selector.select("This is awful", Some(SentimentLabel::Negative));
            assert!(bucket.contains(&reply));
        }
    }
}
