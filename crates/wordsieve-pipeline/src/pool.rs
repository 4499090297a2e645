use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Fixed-size pool that runs one closure per item and waits for all of them.
///
/// Each call to [`WorkerPool::run`] is a complete fan-out/fan-in: it returns
/// only after every item has been processed, and results keep item order.
pub struct WorkerPool {
    pool: ThreadPool,
    workers: usize,
}

impl WorkerPool {
    pub fn new(workers: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("wordsieve-worker-{i}"))
            .build()
            .with_context(|| format!("Failed to start a pool of {workers} workers"))?;
        Ok(Self { pool, workers })
    }

    pub fn workers(&self) -> usize { self.workers }

    /// Applies `f` to every item on the pool, with a progress bar labelled `phase`.
    pub fn run<I, T, F>(&self, phase: &str, items: &[I], f: F) -> Result<Vec<T>>
    where
        I: Sync,
        T: Send,
        F: Fn(&I) -> T + Sync,
    {
        let pb = ProgressBar::new(items.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {msg:>10} [{bar:40.cyan/blue}] {pos}/{len} files")
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        pb.set_message(phase.to_string());
        let results = self.pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    let out = f(item);
                    pb.inc(1);
                    out
                })
                .collect()
        });
        pb.finish_and_clear();
        Ok(results)
    }
}
