use smallvec::SmallVec;

/// A buffer holding up to `N` items inline.
pub(crate) type ArrayBuf<T, const N: usize> = SmallVec<[T; N]>;

/// Converts a buffer of exactly `N` items into an array.
///
/// On a length mismatch, returns how many items there were.
pub(crate) fn into_array<T, const N: usize>(items: ArrayBuf<T, N>) -> Result<[T; N], usize> {
    items.into_inner().map_err(|items| items.len())
}

#[cfg(test)]
mod tests {
    use super::{into_array, ArrayBuf};

    #[test]
    fn exact() {
        let items: ArrayBuf<u8, 3> = [1, 2, 3].into_iter().collect();
        assert_eq!(into_array(items), Ok([1, 2, 3]));
    }

    #[test]
    fn too_short() {
        let items: ArrayBuf<u8, 3> = [1, 2].into_iter().collect();
        assert_eq!(into_array(items), Err(2));
    }

    #[test]
    fn too_long() {
        let items: ArrayBuf<u8, 2> = [1, 2, 3].into_iter().collect();
        assert_eq!(into_array(items), Err(3));
    }
}
