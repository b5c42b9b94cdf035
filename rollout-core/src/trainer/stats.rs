//! Per-epoch statistics accumulation and reporting.
use crate::evaluator::EvalReport;
use crate::record::{Record, RecordValue::Scalar};

fn mean(vs: &[f32]) -> f32 {
    vs.iter().sum::<f32>() / vs.len() as f32
}

/// Accumulates the statistics of one epoch.
///
/// Collects finished training episodes and the per-update statistic
/// records, and turns them into the single epoch record handed to the
/// reporting sinks. The accumulator is owned by the trainer and cleared
/// at every epoch boundary; [`EpochStats::summarize`] itself is pure, so
/// summarizing the same state twice yields identical records.
pub struct EpochStats {
    train_episode_lens: Vec<f32>,
    train_episode_rets: Vec<f32>,
    update_stats: Vec<Record>,
}

impl EpochStats {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self {
            train_episode_lens: vec![],
            train_episode_rets: vec![],
            update_stats: vec![],
        }
    }

    /// Records a finished training episode.
    pub fn push_episode(&mut self, ep_len: usize, ep_ret: f32) {
        self.train_episode_lens.push(ep_len as f32);
        self.train_episode_rets.push(ep_ret);
    }

    /// Records the statistics of one learning update.
    pub fn push_update(&mut self, stats: Record) {
        self.update_stats.push(stats);
    }

    /// The number of training episodes finished in the epoch so far.
    pub fn num_episodes(&self) -> usize {
        self.train_episode_lens.len()
    }

    /// The number of learning updates performed in the epoch so far.
    pub fn num_updates(&self) -> usize {
        self.update_stats.len()
    }

    /// Produces the epoch record.
    ///
    /// Episode lengths and returns are averaged arithmetically; an epoch
    /// without a finished episode yields NaN means. Missing evaluation
    /// results (evaluation disabled) are reported as the NaN sentinel.
    /// The algorithm-specific statistics are averaged per key, with the
    /// key set taken from the first update of the epoch.
    pub fn summarize(
        &self,
        epoch: usize,
        timestep: usize,
        eval: Option<&EvalReport>,
        hour: f32,
    ) -> Record {
        let (test_ep_len, test_ep_ret) = match eval {
            Some(report) => (report.mean_len, report.mean_ret),
            None => (f32::NAN, f32::NAN),
        };

        let mut record = Record::empty();
        record.insert("epoch", Scalar(epoch as f32));
        record.insert("timestep", Scalar(timestep as f32));
        record.insert("train_ep_len", Scalar(mean(&self.train_episode_lens)));
        record.insert("train_ep_ret", Scalar(mean(&self.train_episode_rets)));
        record.insert("test_ep_len", Scalar(test_ep_len));
        record.insert("test_ep_ret", Scalar(test_ep_ret));
        record.insert("hour", Scalar(hour));

        if let Some(first) = self.update_stats.first() {
            for key in first.keys() {
                let vs: Vec<f32> = self
                    .update_stats
                    .iter()
                    .filter_map(|stats| stats.get_scalar(key).ok())
                    .collect();
                record.insert(key.clone(), Scalar(mean(&vs)));
            }
        }

        record
    }

    /// Clears the accumulator for the next epoch.
    pub fn clear(&mut self) {
        self.train_episode_lens.clear();
        self.train_episode_rets.clear();
        self.update_stats.clear();
    }
}

impl Default for EpochStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_means_over_episodes() {
        let mut stats = EpochStats::new();
        stats.push_episode(20, 1.5);
        stats.push_episode(20, 2.5);

        let record = stats.summarize(1, 100, None, 0.0);
        assert_eq!(record.get_scalar("train_ep_len").unwrap(), 20.0);
        assert_eq!(record.get_scalar("train_ep_ret").unwrap(), 2.0);
        assert!(record.get_scalar("test_ep_len").unwrap().is_nan());
    }

    #[test]
    fn test_empty_epoch_yields_nan_means() {
        let stats = EpochStats::new();
        let record = stats.summarize(1, 100, None, 0.0);
        assert!(record.get_scalar("train_ep_len").unwrap().is_nan());
        assert!(record.get_scalar("train_ep_ret").unwrap().is_nan());
    }

    #[test]
    fn test_update_stats_mean_per_key() {
        let mut stats = EpochStats::new();
        stats.push_update(Record::from_scalar("loss", 1.0));
        stats.push_update(Record::from_scalar("loss", 3.0));

        let record = stats.summarize(2, 200, None, 0.0);
        assert_eq!(record.get_scalar("loss").unwrap(), 2.0);
        assert_eq!(record.get_scalar("epoch").unwrap(), 2.0);
        assert_eq!(record.get_scalar("timestep").unwrap(), 200.0);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let mut stats = EpochStats::new();
        stats.push_episode(10, 1.0);
        stats.push_episode(30, 3.0);
        stats.push_update(Record::from_scalar("loss", 0.5));

        let eval = EvalReport {
            mean_len: 12.0,
            mean_ret: 7.0,
        };
        let r1 = stats.summarize(3, 300, Some(&eval), 0.25);
        let r2 = stats.summarize(3, 300, Some(&eval), 0.25);

        for key in r1.keys() {
            assert_eq!(
                r1.get_scalar(key).unwrap(),
                r2.get_scalar(key).unwrap(),
                "key {}",
                key
            );
        }
        assert_eq!(r1.keys().count(), r2.keys().count());
    }
}
