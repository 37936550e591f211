use std::num::NonZeroUsize;

/// Split an iterable into groups of a fixed size, lazily.
///
/// Groups keep the input order. Every group has exactly `size` items except
/// possibly the last one, which holds the leftover `1..size` items. An empty
/// input yields no group at all.
///
/// # Example
/// ```
/// use std::num::NonZeroUsize;
/// use bg_graph::chunk::chunk;
///
/// let size = NonZeroUsize::new(4).unwrap();
/// let groups: Vec<Vec<u32>> = chunk(1..=6, size).collect();
/// assert_eq!(groups, vec![vec![1, 2, 3, 4], vec![5, 6]]);
/// ```
pub fn chunk<I: IntoIterator>(iterable: I, size: NonZeroUsize) -> Chunks<I::IntoIter> {
    Chunks {
        inner: iterable.into_iter(),
        size,
    }
}

/// Iterator returned by [`chunk`]. Single pass: it consumes its source.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chunks<I> {
    inner: I,
    size: NonZeroUsize,
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let group: Vec<I::Item> = self.inner.by_ref().take(self.size.get()).collect();
        if group.is_empty() { None } else { Some(group) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.inner.size_hint();
        let size = self.size.get();
        (lo.div_ceil(size), hi.map(|h| h.div_ceil(size)))
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Chunks<I> {}
