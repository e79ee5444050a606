use crate::errors::ParityError;
use crate::model::VerdictMap;
use crate::oracle::{OracleClient, OracleTransport};
use crate::report::progress::{ProgressEvent, ProgressSink};
use std::collections::HashSet;
use std::time::{Duration, Instant};

pub const DEFAULT_BATCH_SIZE: usize = 50;
/// A progress event is emitted every this many processed items.
pub const PROGRESS_EVERY: usize = 10;

/// Result of running the oracle over a word list.
#[derive(Debug, Clone)]
pub struct GroundTruthRun {
    pub verdicts: VerdictMap,
    pub elapsed: Duration,
    /// Items consumed, skipped ones included.
    pub processed: usize,
    pub skipped: usize,
    /// Words whose negative verdict stands in for an oracle that could not be asked.
    pub unreachable: Vec<String>,
}

/// Drives the oracle sequentially over a word list.
///
/// Batches only set the granularity of the per-batch log line; the result is
/// the same as one flat loop.
pub struct BatchRunner {
    batch_size: usize,
    progress: Option<ProgressSink>,
}

impl BatchRunner {
    pub fn new(batch_size: usize) -> Result<Self, ParityError> {
        if batch_size == 0 {
            return Err(ParityError::InvalidBatchSize(batch_size));
        }
        Ok(Self {
            batch_size,
            progress: None,
        })
    }

    pub fn with_progress(mut self, sink: ProgressSink) -> Self {
        self.progress = Some(sink);
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn run<T: OracleTransport>(
        &self,
        oracle: &mut OracleClient<T>,
        words: &[String],
    ) -> GroundTruthRun {
        let total = words.len();
        let total_batches = total.div_ceil(self.batch_size);
        let start = Instant::now();

        let mut verdicts = VerdictMap::new();
        let mut unreachable = Vec::new();
        let mut seen_unreachable = HashSet::new();
        let mut processed = 0;
        let mut skipped = 0;

        tracing::info!(words = total, batches = total_batches, "generating ground truth");

        for (batch_idx, batch) in words.chunks(self.batch_size).enumerate() {
            tracing::info!("processing batch {}/{}", batch_idx + 1, total_batches);

            for word in batch {
                if word.trim().is_empty() {
                    skipped += 1;
                } else {
                    let outcome = oracle.query_outcome(word);
                    if !outcome.is_reachable() && seen_unreachable.insert(word.clone()) {
                        unreachable.push(word.clone());
                    }
                    verdicts.insert(outcome.to_verdict(word));
                }
                processed += 1;

                if processed % PROGRESS_EVERY == 0 {
                    if let Some(sink) = &self.progress {
                        sink(ProgressEvent {
                            done: processed,
                            total,
                            elapsed: start.elapsed(),
                        });
                    }
                }
            }
        }

        let elapsed = start.elapsed();
        tracing::info!(
            words = verdicts.len(),
            unreachable = unreachable.len(),
            elapsed_secs = elapsed.as_secs_f64(),
            "ground truth generated"
        );

        GroundTruthRun {
            verdicts,
            elapsed,
            processed,
            skipped,
            unreachable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Verdict;
    use crate::oracle::testing::ScriptedTransport;
    use std::sync::{Arc, Mutex};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        assert!(matches!(
            BatchRunner::new(0),
            Err(ParityError::InvalidBatchSize(0))
        ));
    }

    #[test]
    fn test_skips_blank_and_keeps_last_write() {
        let transport = ScriptedTransport::default()
            .answer("cjase", "ok\n")
            .answer("gjal", "no\tgjal, cjal\n");
        let mut oracle = OracleClient::with_transport(transport);
        let runner = BatchRunner::new(2).unwrap();

        let run = runner.run(&mut oracle, &words(&["cjase", "  ", "gjal", "", "cjase"]));

        assert_eq!(run.processed, 5);
        assert_eq!(run.skipped, 2);
        assert_eq!(run.verdicts.len(), 2);
        assert_eq!(run.verdicts.words().collect::<Vec<_>>(), vec!["cjase", "gjal"]);
        assert_eq!(run.verdicts.get("cjase"), Some(&Verdict::correct("cjase")));
        assert!(run.unreachable.is_empty());
        // The repeated word is served from cache.
        assert_eq!(oracle.transport().launches.get(), 2);
    }

    #[test]
    fn test_progress_every_ten_items_including_skips() {
        let list: Vec<String> = (0..25)
            .map(|i| if i % 5 == 0 { String::new() } else { format!("w{i}") })
            .collect();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink_seen = Arc::clone(&seen);
        let runner = BatchRunner::new(7)
            .unwrap()
            .with_progress(Arc::new(move |ev: ProgressEvent| {
                sink_seen.lock().unwrap().push((ev.done, ev.total));
            }));
        let mut oracle = OracleClient::with_transport(ScriptedTransport::default());

        let run = runner.run(&mut oracle, &list);

        assert_eq!(*seen.lock().unwrap(), vec![(10, 25), (20, 25)]);
        assert_eq!(run.skipped, 5);
        assert_eq!(run.verdicts.len(), 20);
    }

    #[test]
    fn test_batch_size_does_not_change_result() {
        let list = words(&["a", "b", "c", "d", "e", "f", "g"]);
        let mut results = Vec::new();
        for size in [1, 3, 50] {
            let mut oracle =
                OracleClient::with_transport(ScriptedTransport::default().answer("c", "ok"));
            results.push(BatchRunner::new(size).unwrap().run(&mut oracle, &list).verdicts);
        }
        assert_eq!(results[0], results[1]);
        assert_eq!(results[1], results[2]);
    }

    #[test]
    fn test_unreachable_words_are_listed_once() {
        let transport = ScriptedTransport::default().timeout("slow");
        let mut oracle = OracleClient::with_transport(transport);
        let run = BatchRunner::new(DEFAULT_BATCH_SIZE)
            .unwrap()
            .run(&mut oracle, &words(&["slow", "fine", "slow"]));

        assert_eq!(run.unreachable, vec!["slow"]);
        assert_eq!(run.verdicts.get("slow"), Some(&Verdict::negative("slow")));
    }
}
