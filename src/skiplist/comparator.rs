use std::cmp::Ordering;

/// A total order over `T`.
///
/// Implementations must be consistent: irreflexive, total and transitive. An
/// inconsistent comparator won't cause memory unsafety, but the list will stop
/// being sorted and lookups will miss values that are present.
pub trait Comparator<T> {
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/// The natural order of `T` as given by its [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::{
        Ordering,
        Reverse,
    };

    use super::{
        Comparator,
        NaturalOrder,
    };

    #[test]
    fn test_natural_order() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&"b", &"a"), Ordering::Greater);
        assert_eq!(NaturalOrder.compare(&7u8, &7u8), Ordering::Equal);
    }

    #[test]
    fn test_closure() {
        let reversed = |a: &i32, b: &i32| Reverse(a).cmp(&Reverse(b));
        assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
        assert_eq!(reversed.compare(&2, &2), Ordering::Equal);
    }
}
