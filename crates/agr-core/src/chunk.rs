use agr_model::BatchSize;

/// Split `items` into consecutive chunks of `size` items; the last chunk may be shorter.
///
/// Yields `ceil(len / size)` chunks in input order and nothing for an empty slice.
#[inline]
pub fn chunk<I>(items: &[I], size: BatchSize) -> std::slice::Chunks<'_, I> {
    items.chunks(size.get())
}

#[cfg(test)]
mod tests {
    use super::chunk;
    use agr_model::BatchSize;

    fn size(n: usize) -> BatchSize {
        BatchSize::new(n).unwrap()
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        let items: [u32; 0] = [];
        assert_eq!(chunk(&items, size(3)).count(), 0);
    }

    #[test]
    fn last_chunk_is_shorter() {
        let items = [1, 2, 3, 4, 5];
        let chunks: Vec<_> = chunk(&items, size(2)).collect();
        assert_eq!(chunks, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
    }

    #[test]
    fn exact_multiple_has_full_chunks() {
        let items = ["a", "b", "c", "d", "e", "f"];
        let lens: Vec<_> = chunk(&items, size(3)).map(<[_]>::len).collect();
        assert_eq!(lens, [3, 3]);
    }

    #[test]
    fn count_and_concatenation_hold_for_many_sizes() {
        for n in 0..40usize {
            let items: Vec<usize> = (0..n).collect();
            for s in 1..12usize {
                let chunks: Vec<_> = chunk(&items, size(s)).collect();
                assert_eq!(chunks.len(), n.div_ceil(s), "n={n} s={s}");
                let flat: Vec<usize> = chunks.concat();
                assert_eq!(flat, items, "n={n} s={s}");
            }
        }
    }
}
