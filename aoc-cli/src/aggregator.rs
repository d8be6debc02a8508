//! Restores (year, day, part) order for results coming back from workers
//!
//! A result is held back until every expected result that sorts before it
//! has arrived, so output streams in order without waiting for the whole
//! run to finish.

use crate::executor::{SolverResult, WorkItem};
use std::collections::{BTreeMap, BTreeSet};

/// Key for ordering results (year, day, part) - ordered ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Aggregator that buffers results and emits them in sorted order
pub struct ResultAggregator {
    /// Keys not yet emitted, smallest first
    expected: BTreeSet<ResultKey>,
    /// Received results waiting for their turn
    pending: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().collect(),
            pending: BTreeMap::new(),
        }
    }

    /// Expect one result per requested part of each work item
    pub fn for_work_items(work_items: &[WorkItem]) -> Self {
        Self::new(work_items.iter().flat_map(|w| {
            w.parts.clone().map(move |part| ResultKey {
                year: w.year,
                day: w.day,
                part,
            })
        }))
    }

    /// Add a result and return any results ready for output (in order)
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.insert(ResultKey::from(&result), result);

        let mut ready = Vec::new();
        while let Some(next) = self.expected.first() {
            let Some(result) = self.pending.remove(next) else {
                break;
            };
            self.expected.pop_first();
            ready.push(result);
        }
        ready
    }

    /// Drain remaining results in order (for final output). Only results
    /// that never arrived stay outstanding.
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let drained = std::mem::take(&mut self.pending);
        for key in drained.keys() {
            self.expected.remove(key);
        }
        drained.into_values().collect()
    }

    /// Check if all expected results have been received
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }

    /// Expected results that have not been emitted yet
    pub fn outstanding(&self) -> impl Iterator<Item = &ResultKey> {
        self.expected.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn key(day: u8, part: u8) -> ResultKey {
        ResultKey {
            year: 2021,
            day,
            part,
        }
    }

    fn make_result(day: u8, part: u8) -> SolverResult {
        SolverResult {
            year: 2021,
            day,
            part,
            answer: Ok(format!("2021_{}_{}", day, part)),
            solve_duration: TimeDelta::milliseconds(10),
            parse_duration: Some(TimeDelta::milliseconds(5)),
        }
    }

    fn keys_of(results: &[SolverResult]) -> Vec<ResultKey> {
        results.iter().map(ResultKey::from).collect()
    }

    #[test]
    fn test_in_order_results() {
        let mut agg = ResultAggregator::new([key(9, 1), key(9, 2)]);

        let ready = agg.add(make_result(9, 1));
        assert_eq!(keys_of(&ready), [key(9, 1)]);

        let ready = agg.add(make_result(9, 2));
        assert_eq!(keys_of(&ready), [key(9, 2)]);

        assert!(agg.is_complete());
    }

    #[test]
    fn test_out_of_order_results() {
        let mut agg = ResultAggregator::new([key(9, 1), key(9, 2), key(11, 1)]);

        // Waiting for 2021/9/1
        assert!(agg.add(make_result(9, 2)).is_empty());
        assert!(agg.add(make_result(11, 1)).is_empty());

        let ready = agg.add(make_result(9, 1));
        assert_eq!(keys_of(&ready), [key(9, 1), key(9, 2), key(11, 1)]);
        assert_eq!(ready[2].answer.as_deref().ok(), Some("2021_11_1"));
    }

    #[test]
    fn test_drain_remaining() {
        let mut agg = ResultAggregator::new([key(12, 1), key(12, 2)]);
        agg.add(make_result(12, 2));

        assert!(!agg.is_complete());
        assert_eq!(agg.outstanding().copied().collect::<Vec<_>>(), [key(12, 1), key(12, 2)]);
        assert_eq!(keys_of(&agg.drain()), [key(12, 2)]);
        assert!(agg.drain().is_empty());

        assert!(!agg.is_complete());
        assert_eq!(agg.outstanding().copied().collect::<Vec<_>>(), [key(12, 1)]);
    }

    #[test]
    fn test_for_work_items_expects_each_part() {
        let work = [
            WorkItem {
                year: 2021,
                day: 9,
                parts: 1..=2,
            },
            WorkItem {
                year: 2021,
                day: 12,
                parts: 2..=2,
            },
        ];
        let agg = ResultAggregator::for_work_items(&work);
        assert_eq!(
            agg.outstanding().copied().collect::<Vec<_>>(),
            [key(9, 1), key(9, 2), key(12, 2)]
        );
    }

    proptest! {
        #[test]
        fn prop_any_arrival_order_emits_sorted(
            arrival in Just(vec![(9u8, 1u8), (9, 2), (11, 1), (11, 2), (12, 1), (12, 2)]).prop_shuffle()
        ) {
            let mut agg = ResultAggregator::new(arrival.iter().map(|&(d, p)| key(d, p)));
            let mut emitted = Vec::new();
            for &(day, part) in &arrival {
                emitted.extend(agg.add(make_result(day, part)));
            }

            prop_assert!(agg.is_complete());
            let emitted = keys_of(&emitted);
            let mut sorted = emitted.clone();
            sorted.sort();
            prop_assert_eq!(emitted.len(), arrival.len());
            prop_assert_eq!(emitted, sorted);
        }
    }
}
