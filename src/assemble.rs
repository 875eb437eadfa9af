//! Composition policies over resolved page sequences. These are pure
//! reorderings: the element type is opaque and nothing here touches page
//! content.

use crate::error::Error;

/// `a[..at] ++ b ++ a[at..]`. `at` may equal `a.len()`, which is a plain
/// append.
pub fn insert<T>(a: Vec<T>, b: Vec<T>, at: usize) -> Result<Vec<T>, Error> {
    if at > a.len() {
        return Err(Error::out_of_range(at.to_string(), a.len()));
    }

    let mut out = a;
    let tail = out.split_off(at);
    out.extend(b);
    out.extend(tail);
    Ok(out)
}

/// Flatten sources in argument order. Appending needs something to append,
/// so fewer than two sources is an arity error.
pub fn concat<T>(sources: Vec<Vec<T>>) -> Result<Vec<T>, Error> {
    require_sources("append", &sources)?;
    Ok(sources.into_iter().flatten().collect())
}

/// Round-robin interleave: each pass takes one unconsumed element from every
/// source in argument order, skipping exhausted sources, until a pass yields
/// nothing. Sources may have unequal lengths.
pub fn interleave<T>(sources: Vec<Vec<T>>) -> Result<Vec<T>, Error> {
    require_sources("merge", &sources)?;

    let total = sources.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(total);
    let mut iters: Vec<_> = sources.into_iter().map(Vec::into_iter).collect();

    while out.len() < total {
        for iter in &mut iters {
            if let Some(item) = iter.next() {
                out.push(item);
            }
        }
    }

    Ok(out)
}

fn require_sources<T>(operation: &'static str, sources: &[Vec<T>]) -> Result<(), Error> {
    if sources.len() < 2 {
        return Err(Error::Arity {
            operation,
            required: 2,
            given: sources.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_in_the_middle() {
        let out = insert(vec![1, 2, 3, 4], vec![10, 11], 2).unwrap();
        assert_eq!(out, vec![1, 2, 10, 11, 3, 4]);
    }

    #[test]
    fn test_insert_at_start() {
        let out = insert(vec![1, 2], vec![10], 0).unwrap();
        assert_eq!(out, vec![10, 1, 2]);
    }

    #[test]
    fn test_insert_at_len_is_append() {
        let out = insert(vec![1, 2], vec![10, 11], 2).unwrap();
        assert_eq!(out, concat(vec![vec![1, 2], vec![10, 11]]).unwrap());
    }

    #[test]
    fn test_insert_past_end() {
        assert!(matches!(
            insert(vec![1, 2], vec![10], 3),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_concat_keeps_argument_order() {
        let out = concat(vec![vec![3, 4], vec![1], vec![2]]).unwrap();
        assert_eq!(out, vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_concat_needs_two_sources() {
        assert!(matches!(
            concat(vec![vec![1, 2]]),
            Err(Error::Arity { given: 1, .. })
        ));
        assert!(matches!(
            concat(Vec::<Vec<i32>>::new()),
            Err(Error::Arity { given: 0, .. })
        ));
    }

    #[test]
    fn test_interleave_unequal_lengths() {
        // A has 3 pages, B has 1, C has 2: B drops out after the first pass,
        // C after the second.
        let out = interleave(vec![
            vec!["a0", "a1", "a2"],
            vec!["b0"],
            vec!["c0", "c1"],
        ])
        .unwrap();
        assert_eq!(out, vec!["a0", "b0", "c0", "a1", "c1", "a2"]);
    }

    #[test]
    fn test_interleave_equal_lengths() {
        let out = interleave(vec![vec![1, 3], vec![2, 4]]).unwrap();
        assert_eq!(out, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_interleave_with_empty_source() {
        let out = interleave(vec![vec![1, 2], vec![]]).unwrap();
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn test_interleave_needs_two_sources() {
        assert!(matches!(
            interleave(vec![vec![1]]),
            Err(Error::Arity { .. })
        ));
    }
}
