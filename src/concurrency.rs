//! Concurrency helper: limit the number of chunk tasks processed in parallel.

use rayon::prelude::*;

/// Map `f` over fixed-size chunks of `records` with at most `limit` tasks in
/// flight, returning the partial results in submission order. Order matters:
/// the tag statistic's tie-break is defined by first-encountered position, so
/// parallel partials must merge in original chunk order.
pub fn map_chunks_limited<T, R, F>(records: &[T], chunk_size: usize, limit: usize, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Sync + Fn(&[T]) -> R,
{
    let chunks: Vec<&[T]> = crate::chunk::chunks(records, chunk_size).collect();
    if limit <= 1 {
        return chunks.into_iter().map(|c| f(c)).collect();
    }
    let mut out = Vec::with_capacity(chunks.len());
    for wave in chunks.chunks(limit) {
        out.extend(wave.par_iter().map(|c| f(c)).collect::<Vec<R>>());
    }
    out
}
