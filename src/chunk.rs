//! Chunker: fixed-size contiguous slices over the record sequence.
//!
//! Chunks borrow from the source, so every statistic re-chunks the same
//! sequence independently at no cost. Concatenating the chunks in order
//! reproduces the input exactly; only the last chunk may be short.

pub fn chunks<T>(records: &[T], size: usize) -> std::slice::Chunks<'_, T> {
    records.chunks(size.max(1))
}

pub fn chunk_count(len: usize, size: usize) -> usize {
    let size = size.max(1);
    len.div_ceil(size)
}
