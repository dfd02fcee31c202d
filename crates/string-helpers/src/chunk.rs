use std::num::NonZeroUsize;

/// Contiguous slices of `size` items, the last one possibly shorter.
///
/// Used to split admin lists and save listings into message-sized pieces.
/// The iterator is lazy and is consumed once.
pub fn chunker<T>(items: &[T], size: NonZeroUsize) -> std::slice::Chunks<'_, T> {
    items.chunks(size.get())
}
