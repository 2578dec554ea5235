//! Generator of numbers series.

use std::ops::{AddAssign, Sub};

/// Generator (iterator) state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SeriesWithStep<T: Copy> {
    last: T,
    step: T,
    next: T,
    done: bool,
}

impl<T> SeriesWithStep<T>
where
    T: Copy + Default + AddAssign + Sub<Output = T> + PartialOrd,
{
    /// Series `first, first + step, ...` up to `last` inclusively.
    ///
    /// Empty if `first` is greater than `last`. Step must be positive.
    #[inline]
    pub(crate) fn new(first: T, last: T, step: T) -> Self {
        debug_assert!(step > T::default(), "step value must be positive");

        Self {
            last,
            step,
            next: first,
            done: first > last,
        }
    }
}

impl<T> Iterator for SeriesWithStep<T>
where
    T: Copy + AddAssign + Sub<Output = T> + PartialOrd,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = self.next;
        // never step beyond the last value, so the type can't overflow
        if self.last - current < self.step {
            self.done = true;
        } else {
            self.next += self.step;
        }

        Some(current)
    }
}
