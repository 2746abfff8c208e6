//! Parallel application of one transform to many independent grids.
//!
//! Every transform is a pure function of its input, so a batch is split
//! across a small pool of scoped worker threads. Grid indices are handed
//! out over a bounded crossbeam channel; results come back tagged with
//! their index and are reassembled in input order.

use std::error::Error;
use std::fmt;
use std::thread;

use halo_core::{Element, Grid, GridError};

use crate::border::expand_border;
use crate::fill::EdgeFill;
use crate::shift::{shift_grid, ShiftVector};

/// Per-grid outcome of a batch.
pub type BatchOutput<T> = Vec<Result<Grid<T>, GridError>>;

// ── BatchConfig ────────────────────────────────────────────────────

/// Worker pool sizing for [`shift_batch`] and [`expand_batch`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of worker threads. `None` = auto-detect
    /// (`available_parallelism / 2`, clamped to `[1, 16]`).
    pub worker_count: Option<usize>,
}

impl BatchConfig {
    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => {
                let cpus = thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4);
                (cpus / 2).clamp(1, 16)
            }
        }
    }
}

// ── BatchError ─────────────────────────────────────────────────────

/// Failure of the batch machinery itself.
///
/// Invalid arguments for an individual grid are not batch errors; they
/// come back as that grid's `Err` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BatchError {
    /// A worker thread panicked. When several did, the lowest index is
    /// reported.
    WorkerPanicked {
        /// Index of the worker in the pool.
        worker: usize,
    },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkerPanicked { worker } => write!(f, "batch worker {worker} panicked"),
        }
    }
}

impl Error for BatchError {}

// ── Entry points ───────────────────────────────────────────────────

/// [`shift_grid`] every grid in `grids` by the same shift and fill.
///
/// Results are returned in input order, one per grid.
pub fn shift_batch<T: Element>(
    grids: &[Grid<T>],
    shift: impl Into<ShiftVector>,
    fill: EdgeFill,
    config: &BatchConfig,
) -> Result<BatchOutput<T>, BatchError> {
    let shift = shift.into();
    run_batch(grids, config, |g| shift_grid(g, shift, fill))
}

/// [`expand_border`] every grid in `grids` by the same width and fill.
///
/// Results are returned in input order, one per grid.
pub fn expand_batch<T: Element>(
    grids: &[Grid<T>],
    border_width: usize,
    fill: EdgeFill,
    config: &BatchConfig,
) -> Result<BatchOutput<T>, BatchError> {
    run_batch(grids, config, |g| expand_border(g, border_width, fill))
}

fn run_batch<T, F>(
    grids: &[Grid<T>],
    config: &BatchConfig,
    op: F,
) -> Result<BatchOutput<T>, BatchError>
where
    T: Element,
    F: Fn(&Grid<T>) -> Result<Grid<T>, GridError> + Sync,
{
    let workers = config.resolved_worker_count().min(grids.len());
    if workers < 2 {
        return Ok(grids.iter().map(&op).collect());
    }
    log::debug!("batch of {} grids on {workers} workers", grids.len());

    let (task_tx, task_rx) = crossbeam_channel::bounded::<usize>(workers * 2);
    let (reply_tx, reply_rx) = crossbeam_channel::unbounded();
    let mut slots: Vec<Option<Result<Grid<T>, GridError>>> = vec![None; grids.len()];
    let op = &op;

    thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                let task_rx = task_rx.clone();
                let reply_tx = reply_tx.clone();
                scope.spawn(move || {
                    while let Ok(i) = task_rx.recv() {
                        if reply_tx.send((i, op(&grids[i]))).is_err() {
                            break;
                        }
                    }
                })
            })
            .collect();
        drop(task_rx);
        drop(reply_tx);

        for i in 0..grids.len() {
            // Fails only once every worker has gone.
            if task_tx.send(i).is_err() {
                break;
            }
        }
        drop(task_tx);

        for (i, result) in reply_rx.iter() {
            slots[i] = Some(result);
        }

        // Join every handle: an unjoined panicked thread makes the scope
        // itself panic on exit.
        let mut panicked = None;
        for (worker, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() {
                log::debug!("batch worker {worker} panicked");
                panicked = panicked.or(Some(worker));
            }
        }
        match panicked {
            Some(worker) => Err(BatchError::WorkerPanicked { worker }),
            None => Ok(()),
        }
    })?;

    // With no panicked worker every index was answered exactly once.
    debug_assert!(slots.iter().all(Option::is_some));
    Ok(slots.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_test_utils::sequential_grid;
    use std::sync::Barrier;

    fn workers(n: usize) -> BatchConfig {
        BatchConfig {
            worker_count: Some(n),
        }
    }

    #[test]
    fn resolved_worker_count_clamps() {
        assert_eq!(workers(0).resolved_worker_count(), 1);
        assert_eq!(workers(8).resolved_worker_count(), 8);
        assert_eq!(workers(1000).resolved_worker_count(), 64);
        let auto = BatchConfig::default().resolved_worker_count();
        assert!((1..=16).contains(&auto));
    }

    #[test]
    fn shift_batch_matches_serial_in_order() {
        let grids: Vec<Grid<u32>> = (1..=9).map(|n| sequential_grid(n + 2, n + 1)).collect();
        let fill = EdgeFill::from_stride(2);
        let out = shift_batch(&grids, (1, -1), fill, &workers(4)).unwrap();
        assert_eq!(out.len(), grids.len());
        for (g, r) in grids.iter().zip(out) {
            assert_eq!(r.unwrap(), shift_grid(g, (1, -1), fill).unwrap());
        }
    }

    #[test]
    fn expand_batch_keeps_per_grid_errors() {
        // The 1x1 grid cannot supply a stride-2 block.
        let grids = vec![
            sequential_grid::<u8>(4, 4),
            sequential_grid::<u8>(1, 1),
            sequential_grid::<u8>(2, 3),
        ];
        let out = expand_batch(&grids, 2, EdgeFill::from_stride(2), &workers(3)).unwrap();
        assert_eq!(out[0].as_ref().unwrap().dims(), (8, 8));
        assert!(matches!(out[1], Err(GridError::InvalidStride { .. })));
        assert_eq!(out[2].as_ref().unwrap().dims(), (6, 7));
    }

    #[test]
    fn small_batches_run_inline() {
        let grids = vec![sequential_grid::<i64>(3, 3)];
        let out = expand_batch(&grids, 1, EdgeFill::Zero, &workers(8)).unwrap();
        assert_eq!(out.len(), 1);
        assert!(expand_batch::<i64>(&[], 1, EdgeFill::Zero, &workers(8))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn worker_panic_is_reported() {
        let grids: Vec<Grid<u8>> = (0..6).map(|_| sequential_grid(2, 2)).collect();
        let err = run_batch(&grids, &workers(2), |_| panic!("boom")).unwrap_err();
        assert!(matches!(err, BatchError::WorkerPanicked { .. }));
    }

    #[test]
    fn every_worker_panicking_returns_lowest_index() {
        // The barrier holds each worker on its first grid until all of
        // them have one, so every worker panics.
        let grids: Vec<Grid<u8>> = (0..8).map(|_| sequential_grid(2, 2)).collect();
        let barrier = Barrier::new(3);
        let err = run_batch(&grids, &workers(3), |_| {
            barrier.wait();
            panic!("boom")
        })
        .unwrap_err();
        assert_eq!(err, BatchError::WorkerPanicked { worker: 0 });
        assert_eq!(err.to_string(), "batch worker 0 panicked");
    }

    #[test]
    fn single_panicking_grid_fails_whole_batch() {
        let grids: Vec<Grid<u8>> = (1..=6).map(|n| sequential_grid(n, 2)).collect();
        let result = run_batch(&grids, &workers(2), |g| {
            if g.rows() == 4 {
                panic!("boom");
            }
            Ok(g.clone())
        });
        assert!(matches!(result, Err(BatchError::WorkerPanicked { .. })));
    }
}
