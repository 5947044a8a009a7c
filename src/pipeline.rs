//! A fluent wrapper over ordered sequences.
//!
//! [`Pipeline`] owns a copy of a sequence and exposes chainable
//! operations on it: `filter` and `apply` produce fresh pipelines
//! (`apply` may change the element type), `sort` reorders the receiver
//! in place, and `collect` ends the chain with a plain `Vec`.
//!
//! ```
//! use seqpipe::Pipeline;
//!
//! let result = Pipeline::from_slice(&[1, 1, 2, 3, 5, 8, 13])
//!     .filter(|x| x % 2 == 1)
//!     .apply(|x| x * x)
//!     .apply(|x| *x as f64 / 2.0)
//!     .sort(|a, b| a > b)
//!     .collect();
//! assert_eq!(result, vec![84.5, 12.5, 4.5, 0.5, 0.5]);
//! ```

use std::cmp::Ordering;

use crate::display::Bracketed;
use crate::error::Result;

/// An ordered sequence of `T` with chainable transformations.
///
/// Insertion order is significant and duplicates are allowed. The
/// pipeline exclusively owns its elements; constructing one from a
/// slice copies, so the caller's sequence is never touched.
#[derive(Clone, Debug, PartialEq)]
pub struct Pipeline<T> {
    data: Vec<T>,
}

impl<T> Pipeline<T> {
    /// Creates a pipeline holding a copy of `items`.
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        Pipeline {
            data: items.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns a new pipeline containing only the elements for which
    /// `pred` holds, in their original relative order. The receiver is
    /// left untouched.
    pub fn filter<P>(&self, pred: P) -> Self
    where
        T: Clone,
        P: Fn(&T) -> bool,
    {
        Pipeline {
            data: self.data.iter().filter(|item| pred(item)).cloned().collect(),
        }
    }

    /// Returns a new pipeline with `f` applied to every element, in
    /// order. The output length equals the input length, and the
    /// element type may change.
    pub fn apply<U, F>(&self, f: F) -> Pipeline<U>
    where
        F: Fn(&T) -> U,
    {
        Pipeline {
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Sorts the receiver's elements in place by the `less` relation
    /// and returns it for further chaining.
    ///
    /// `less` must be a strict weak ordering. If it is not, the
    /// resulting order is unspecified and the standard-library sort may
    /// panic when it detects the inconsistency; memory safety is never
    /// at risk. The sort is not stable.
    pub fn sort<L>(&mut self, less: L) -> &mut Self
    where
        L: Fn(&T, &T) -> bool,
    {
        self.data.sort_unstable_by(|a, b| {
            if less(a, b) {
                Ordering::Less
            } else if less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        self
    }

    /// Ends the chain, yielding a copy of the current elements.
    pub fn collect(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Consuming form of [`collect`](Pipeline::collect); takes the
    /// elements without copying.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// True if `pred` holds for every element. Vacuously true when
    /// empty.
    pub fn all<P>(&self, pred: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.data.iter().all(|item| pred(item))
    }

    /// True if `pred` holds for at least one element.
    pub fn any<P>(&self, pred: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.data.iter().any(|item| pred(item))
    }

    /// True if `pred` holds for no element.
    pub fn none<P>(&self, pred: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        !self.any(pred)
    }

    /// Calls `f` on every element in order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        for item in &self.data {
            f(item);
        }
    }

    /// Combines this pipeline with `other` element-wise through `f`.
    /// The output length is the shorter of the two inputs.
    pub fn zip_with<U, V, F>(&self, other: &[U], f: F) -> Pipeline<V>
    where
        F: Fn(&T, &U) -> V,
    {
        Pipeline {
            data: self.data.iter().zip(other).map(|(a, b)| f(a, b)).collect(),
        }
    }

    /// Fallible [`filter`](Pipeline::filter); stops at the first error
    /// from `pred` and returns it unchanged, leaving the receiver
    /// unmodified.
    pub fn try_filter<P>(&self, pred: P) -> Result<Self>
    where
        T: Clone,
        P: Fn(&T) -> Result<bool>,
    {
        let mut retained = Vec::new();
        for item in &self.data {
            if pred(item)? {
                retained.push(item.clone());
            }
        }
        Ok(Pipeline { data: retained })
    }

    /// Fallible [`apply`](Pipeline::apply); stops at the first error
    /// from `f` and returns it unchanged.
    pub fn try_apply<U, F>(&self, f: F) -> Result<Pipeline<U>>
    where
        F: Fn(&T) -> Result<U>,
    {
        let data = self.data.iter().map(f).collect::<Result<Vec<U>>>()?;
        Ok(Pipeline { data })
    }

    /// Fallible [`for_each`](Pipeline::for_each); stops at the first
    /// error from `f`.
    pub fn try_for_each<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(&T) -> Result<()>,
    {
        for item in &self.data {
            f(item)?;
        }
        Ok(())
    }

    /// Sum of all elements, starting from `T::zero()`.
    pub fn sum(&self) -> T
    where
        T: num_traits::Zero + Clone,
    {
        self.data
            .iter()
            .fold(T::zero(), |acc, item| acc + item.clone())
    }

    /// Product of all elements, starting from `T::one()`.
    pub fn product(&self) -> T
    where
        T: num_traits::One + Clone,
    {
        self.data
            .iter()
            .fold(T::one(), |acc, item| acc * item.clone())
    }

    /// Renders the current elements bracketed and comma separated,
    /// `[1, 2, 3]`.
    pub fn display(&self) -> Bracketed<'_, T> {
        Bracketed::new(&self.data)
    }
}

impl<T> From<Vec<T>> for Pipeline<T> {
    fn from(data: Vec<T>) -> Self {
        Pipeline { data }
    }
}

impl<T> FromIterator<T> for Pipeline<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Pipeline {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Pipeline<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Pipeline<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
