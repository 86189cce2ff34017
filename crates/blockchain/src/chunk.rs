/// Maximum number of close instructions packed into one transaction
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// Split a slice into ordered chunks of at most `size` elements.
///
/// The final chunk may be shorter; empty input yields no chunks.
pub fn chunk<T>(items: &[T], size: usize) -> Vec<&[T]> {
    assert!(size > 0, "chunk size must be positive");
    items.chunks(size).collect()
}
