/// Result of comparing two ordered lists element by element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListComparison {
    Equal,
    /// Lengths differ; no element was compared.
    LengthMismatch { expected: usize, actual: usize },
    /// First position whose elements differ.
    ElementMismatch { index: usize },
}

/// Compares lengths first, then elements pairwise in order, stopping at the first
/// pair `eq` rejects.
pub fn compare_list<T>(
    expected: &[T],
    actual: &[T],
    mut eq: impl FnMut(&T, &T) -> bool,
) -> ListComparison {
    if expected.len() != actual.len() {
        return ListComparison::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        };
    }
    expected
        .iter()
        .zip(actual)
        .position(|(e, a)| !eq(e, a))
        .map_or(ListComparison::Equal, |index| {
            ListComparison::ElementMismatch { index }
        })
}

/// [`compare_list`] with value equality.
pub fn compare_list_eq<T: PartialEq>(expected: &[T], actual: &[T]) -> ListComparison {
    compare_list(expected, actual, T::eq)
}
