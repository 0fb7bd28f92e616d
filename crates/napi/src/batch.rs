//! Batch processing types and the parallel driver behind `transformBatch`.

use napi_derive::napi;
use punctual_core::Educator;
use rayon::prelude::*;
use std::time::Instant;

/// Input for batch processing - a single document to educate.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Document identifier (typically the file path).
    pub id: String,
    /// HTML source text.
    pub text: String,
}

/// Result for a single document in a batch.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Document identifier matching the input.
    pub id: String,
    /// Educated output.
    pub output: String,
    /// Whether the output differs from the input.
    pub changed: bool,
}

/// Statistics for batch processing.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchStats {
    /// Total number of documents processed.
    pub total: u32,
    /// Number of documents whose output differs from the input.
    pub changed: u32,
    /// Total processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for batch processing.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Maximum number of threads to use. Defaults to number of CPU cores.
    pub max_threads: Option<u32>,
}

/// Result of batch processing containing all results and statistics.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchProcessingResult {
    /// Individual results, in input order.
    pub results: Vec<BatchResult>,
    /// Processing statistics.
    pub stats: BatchStats,
}

/// Educate every input with `educator`, in parallel.
pub(crate) fn run_batch(
    educator: &Educator,
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
) -> BatchProcessingResult {
    let start = Instant::now();
    let opts = options.unwrap_or_default();

    let pool = opts.max_threads.and_then(|max_threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads as usize)
            .build()
            .map_err(|e| log::warn!("falling back to the global thread pool: {}", e))
            .ok()
    });

    let process_input = |input: BatchInput| -> BatchResult {
        let output = educator.transform(&input.text);
        BatchResult {
            changed: output != input.text,
            id: input.id,
            output,
        }
    };

    let total = inputs.len() as u32;
    let results: Vec<BatchResult> = if let Some(pool) = pool {
        pool.install(|| inputs.into_par_iter().map(process_input).collect())
    } else {
        inputs.into_par_iter().map(process_input).collect()
    };
    let changed = results.iter().filter(|r| r.changed).count() as u32;

    BatchProcessingResult {
        results,
        stats: BatchStats {
            total,
            changed,
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        },
    }
}
