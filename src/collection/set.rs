//! The [`Set`] type and its iterators.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, FusedIterator};
use std::ops::{BitAnd, BitOr, Sub};

use super::DefaultHashBuilder;

// =============================================================================
// Set Definition
// =============================================================================

/// A mutable set of distinct values backed by a `HashMap<T, ()>`.
///
/// Every element maps to a unit marker; membership is the only information
/// stored. Inserting an element that is already present is a no-op.
///
/// Enumeration order is unspecified: two equal sets may iterate in different
/// orders, and a set may change order after being mutated.
///
/// # Time Complexity
///
/// | Operation      | Complexity            |
/// |----------------|-----------------------|
/// | `new`          | O(1)                  |
/// | `insert`       | O(1) expected         |
/// | `remove`       | O(1) expected         |
/// | `contains`     | O(1) expected         |
/// | `len`          | O(1)                  |
/// | `clear`        | O(n)                  |
/// | `union`        | O(n + m)              |
/// | `intersection` | O(min(n, m))          |
/// | `difference`   | O(n)                  |
/// | `is_subset`    | O(n)                  |
/// | `power_set`    | O(2^n * n)            |
///
/// # Thread Safety
///
/// `Set` performs no internal locking. It is `Send`/`Sync` whenever `T` and
/// `S` are; sharing one set between threads for mutation requires an external
/// lock such as `Mutex<Set<T>>`.
///
/// # Examples
///
/// ```rust
/// use setwise::collection::Set;
///
/// let mut set = Set::new();
/// assert!(set.insert("apple"));
/// assert!(!set.insert("apple"));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone)]
pub struct Set<T, S = DefaultHashBuilder> {
    inner: HashMap<T, (), S>,
}

impl<T> Set<T, DefaultHashBuilder> {
    /// Creates a new empty set using the default hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let set: Set<i32> = Set::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, S> Set<T, S> {
    /// Creates an empty set which will use `hash_builder` to hash elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let mut set = Set::with_hasher(RandomState::new());
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_hasher(hash_builder: S) -> Self {
        Self {
            inner: HashMap::with_hasher(hash_builder),
        }
    }

    /// Creates an empty set with the given capacity and hasher.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            inner: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let set = Set::from([1, 2, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the set's hash builder.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Returns a snapshot of the elements as an owned vector.
    ///
    /// Every element appears exactly once; the order is unspecified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let set = Set::from([20, 30]);
    /// let mut elements = set.elements();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![20, 30]);
    /// ```
    #[must_use]
    pub fn elements(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns an iterator over the elements of the set.
    ///
    /// The order is unspecified and may differ between equal sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let set = Set::from([1, 2, 3]);
    /// let total: i32 = set.iter().sum();
    /// assert_eq!(total, 6);
    /// ```
    #[inline]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.inner.keys(),
        }
    }
}

impl<T, S> Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Adds an element to the set.
    ///
    /// Returns `true` if the element was not already present. Inserting an
    /// element that is already present leaves the set unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(20));
    /// assert!(!set.insert(20));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn insert(&mut self, element: T) -> bool {
        self.inner.insert(element, ()).is_none()
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present. Removing an absent element
    /// is not an error and leaves the set unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let mut set = Set::from([10, 20, 30]);
    /// assert!(set.remove(&10));
    /// assert!(!set.remove(&10));
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element).is_some()
    }

    /// Returns `true` if the set contains the element.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let set = Set::from(["hello".to_string()]);
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(element)
    }

    /// Removes every element and releases the backing storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let mut set: Set<i32> = (0..1000).collect();
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert_eq!(set.iter().count(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.inner.clear();
        self.inner.shrink_to_fit();
    }

    /// Returns `true` if every element of `self` is contained in `other`.
    ///
    /// The empty set is a subset of every set, including itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let subset = Set::from([1, 2]);
    /// let superset = Set::from([1, 2, 3]);
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(!superset.is_subset(&subset));
    /// assert!(Set::<i32>::new().is_subset(&Set::new()));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }

        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is contained in `self`.
    ///
    /// Defined as `other.is_subset(self)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let superset = Set::from([1, 2, 3]);
    /// let subset = Set::from([1, 2]);
    ///
    /// assert!(superset.is_superset(&subset));
    /// assert!(!subset.is_superset(&superset));
    /// ```
    #[inline]
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }
}

impl<T, S> Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Returns a new set with every element present in either operand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let set_a = Set::from([20, 30]);
    /// let set_b = Set::from([20, 40, 50]);
    ///
    /// let union = set_a.union(&set_b);
    /// assert_eq!(union.len(), 4);
    /// assert_eq!(union, Set::from([20, 30, 40, 50]));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.inner.reserve(other.len());
        for element in other {
            result.insert(element.clone());
        }
        result
    }

    /// Returns a new set with exactly the elements present in both operands.
    ///
    /// Neither operand is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let set_a = Set::from([20, 30]);
    /// let set_b = Set::from([20, 40, 50]);
    ///
    /// assert_eq!(set_a.intersection(&set_b), Set::from([20]));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut result = Self::with_hasher(self.hasher().clone());
        for element in smaller {
            if larger.contains(element) {
                result.insert(element.clone());
            }
        }
        result
    }

    /// Returns a new set with the elements of `self` that are absent from `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let set_a = Set::from([20, 30]);
    /// let set_b = Set::from([20, 40, 50]);
    ///
    /// assert_eq!(set_a.difference(&set_b), Set::from([30]));
    /// assert!(set_a.difference(&set_a).is_empty());
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = Self::with_hasher(self.hasher().clone());
        for element in self {
            if !other.contains(element) {
                result.insert(element.clone());
            }
        }
        result
    }

    /// Returns every subset of `self`.
    ///
    /// A set of `n` elements yields `2^n` independent subsets, always
    /// including the empty set and a copy of `self`. The order of the
    /// returned subsets is unspecified. The result grows exponentially, so
    /// callers are responsible for keeping `n` small.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let set = Set::from(["apple", "banana", "cherry"]);
    /// let subsets = set.power_set();
    ///
    /// assert_eq!(subsets.len(), 8);
    /// assert!(subsets.contains(&Set::new()));
    /// assert!(subsets.contains(&set));
    /// ```
    #[must_use]
    pub fn power_set(&self) -> Vec<Self> {
        let mut subsets = vec![Self::with_hasher(self.hasher().clone())];
        for element in self {
            let extended: Vec<Self> = subsets
                .iter()
                .map(|subset| {
                    let mut subset = subset.clone();
                    subset.insert(element.clone());
                    subset
                })
                .collect();
            subsets.extend(extended);
        }
        tracing::trace!(
            elements = self.len(),
            subsets = subsets.len(),
            "computed power set"
        );
        subsets
    }
}

impl<T, S> Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Set;
    ///
    /// let set: Set<i32> = Set::singleton(42);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(&42));
    /// ```
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::with_hasher(S::default());
        set.insert(element);
        set
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`Set`].
#[derive(Clone)]
pub struct SetIterator<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIterator<'_, T> {}

/// An owning iterator over the elements of a [`Set`].
pub struct SetIntoIterator<T> {
    inner: hash_map::IntoKeys<T, ()>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for Set<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> FromIterator<T> for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::with_hasher(S::default());
        set.extend(iter);
        set
    }
}

impl<T, const N: usize> From<[T; N]> for Set<T, DefaultHashBuilder>
where
    T: Eq + Hash,
{
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T, S> Extend<T> for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T, S> Extend<&'a T> for Set<T, S>
where
    T: Eq + Hash + Copy + 'a,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.inner.into_keys(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> PartialEq for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        other.iter().all(|element| self.contains(element))
    }
}

impl<T, S> Eq for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

/// Renders as `{ v1, v2, v3 }`; the empty set renders as `{  }`.
impl<T: fmt::Display, S> fmt::Display for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{ ")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, " }}")
    }
}

// =============================================================================
// Operator Implementations
// =============================================================================

impl<T, S> BitOr<&Set<T, S>> for &Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    fn bitor(self, other: &Set<T, S>) -> Self::Output {
        self.union(other)
    }
}

impl<T, S> BitAnd<&Set<T, S>> for &Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    fn bitand(self, other: &Set<T, S>) -> Self::Output {
        self.intersection(other)
    }
}

impl<T, S> Sub<&Set<T, S>> for &Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    fn sub(self, other: &Set<T, S>) -> Self::Output {
        self.difference(other)
    }
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Set<String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sorted<T: Ord + Clone, S>(set: &Set<T, S>) -> Vec<T> {
        let mut elements: Vec<T> = set.iter().cloned().collect();
        elements.sort();
        elements
    }

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_set() {
        let set: Set<i32> = Set::new();
        assert_eq!(format!("{set}"), "{  }");
    }

    #[rstest]
    fn test_display_single_element_set() {
        let set: Set<i32> = Set::singleton(42);
        assert_eq!(format!("{set}"), "{ 42 }");
    }

    #[rstest]
    fn test_display_multiple_elements_set() {
        let set = Set::from([10, 20, 30]);
        let display = format!("{set}");

        assert!(display.starts_with("{ "));
        assert!(display.ends_with(" }"));
        assert!(!display.contains(",  }"));

        let inner = &display[2..display.len() - 2];
        let mut rendered: Vec<&str> = inner.split(", ").collect();
        rendered.sort_unstable();
        assert_eq!(rendered, vec!["10", "20", "30"]);
    }

    #[rstest]
    fn test_debug_renders_as_set() {
        let set: Set<i32> = Set::singleton(7);
        assert_eq!(format!("{set:?}"), "{7}");
    }

    // =========================================================================
    // Mutation Tests
    // =========================================================================

    #[rstest]
    fn test_new_creates_empty() {
        let set: Set<i32> = Set::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[rstest]
    fn test_insert_reports_novelty() {
        let mut set = Set::new();
        assert!(set.insert(10));
        assert!(set.insert(20));
        assert!(!set.insert(10));
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn test_remove_reports_presence() {
        let mut set = Set::from([10, 20, 30]);
        assert!(set.remove(&10));
        assert!(!set.remove(&10));
        assert!(!set.contains(&10));
        assert!(set.contains(&20));
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn test_clear_releases_storage() {
        let mut set: Set<i32> = (0..1024).collect();
        set.clear();

        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
        assert!(set.capacity() < 1024);
    }

    #[rstest]
    fn test_clear_then_reuse() {
        let mut set = Set::from([1, 2, 3]);
        set.clear();
        set.insert(4);
        assert_eq!(sorted(&set), vec![4]);
    }

    // =========================================================================
    // Algebra Tests
    // =========================================================================

    #[rstest]
    #[case(&[20, 30], &[20, 40, 50], &[20, 30, 40, 50])]
    #[case(&[], &[1, 2], &[1, 2])]
    #[case(&[1, 2], &[], &[1, 2])]
    #[case(&[], &[], &[])]
    fn test_union(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: &[i32]) {
        let set_a: Set<i32> = left.iter().copied().collect();
        let set_b: Set<i32> = right.iter().copied().collect();
        assert_eq!(sorted(&set_a.union(&set_b)), expected);
    }

    #[rstest]
    #[case(&[20, 30], &[20, 40, 50], &[20])]
    #[case(&[1, 2, 3], &[4, 5], &[])]
    #[case(&[1, 2, 3], &[3, 2, 1], &[1, 2, 3])]
    #[case(&[], &[1], &[])]
    fn test_intersection(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: &[i32]) {
        let set_a: Set<i32> = left.iter().copied().collect();
        let set_b: Set<i32> = right.iter().copied().collect();
        assert_eq!(sorted(&set_a.intersection(&set_b)), expected);
    }

    #[rstest]
    #[case(&[20, 30], &[20, 40, 50], &[30])]
    #[case(&[1, 2, 3], &[1, 2, 3], &[])]
    #[case(&[1, 2, 3], &[], &[1, 2, 3])]
    #[case(&[], &[1], &[])]
    fn test_difference(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: &[i32]) {
        let set_a: Set<i32> = left.iter().copied().collect();
        let set_b: Set<i32> = right.iter().copied().collect();
        assert_eq!(sorted(&set_a.difference(&set_b)), expected);
    }

    #[rstest]
    fn test_operations_leave_operands_untouched() {
        let set_a = Set::from([1, 2, 3]);
        let set_b = Set::from([2, 3, 4]);

        let _ = set_a.union(&set_b);
        let _ = set_a.intersection(&set_b);
        let _ = set_a.difference(&set_b);

        assert_eq!(sorted(&set_a), vec![1, 2, 3]);
        assert_eq!(sorted(&set_b), vec![2, 3, 4]);
    }

    #[rstest]
    fn test_operators_delegate() {
        let set_a = Set::from([1, 2, 3]);
        let set_b = Set::from([2, 3, 4]);

        assert_eq!(&set_a | &set_b, set_a.union(&set_b));
        assert_eq!(&set_a & &set_b, set_a.intersection(&set_b));
        assert_eq!(&set_a - &set_b, set_a.difference(&set_b));
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(3, 8)]
    #[case(5, 32)]
    fn test_power_set_size(#[case] size: i32, #[case] expected: usize) {
        let set: Set<i32> = (0..size).collect();
        assert_eq!(set.power_set().len(), expected);
    }

    #[rstest]
    fn test_power_set_members_are_distinct_subsets() {
        let set = Set::from(["apple", "banana", "cherry"]);
        let subsets = set.power_set();

        for (index, subset) in subsets.iter().enumerate() {
            assert!(subset.is_subset(&set));
            assert!(!subsets[index + 1..].contains(subset));
        }
    }

    // =========================================================================
    // Relation Tests
    // =========================================================================

    #[rstest]
    fn test_is_subset_and_superset() {
        let subset = Set::from([1, 2]);
        let superset = Set::from([1, 2, 3]);

        assert!(subset.is_subset(&superset));
        assert!(!superset.is_subset(&subset));
        assert!(superset.is_superset(&subset));
        assert!(!subset.is_superset(&superset));
    }

    #[rstest]
    fn test_empty_set_is_subset_of_everything() {
        let empty: Set<i32> = Set::new();
        assert!(empty.is_subset(&empty));
        assert!(empty.is_subset(&Set::from([1])));
    }

    #[rstest]
    fn test_eq_ignores_insertion_order() {
        let set_a = Set::from([1, 2, 3]);
        let set_b = Set::from([3, 1, 2]);
        assert_eq!(set_a, set_b);
        assert_ne!(set_a, Set::from([1, 2]));
        assert_ne!(set_a, Set::from([1, 2, 4]));
    }

    // =========================================================================
    // Clone and Iteration Tests
    // =========================================================================

    #[rstest]
    fn test_clone_is_independent() {
        let mut original = Set::from([20, 30]);
        let mut copy = original.clone();

        copy.insert(99);
        original.remove(&20);

        assert!(!original.contains(&99));
        assert!(copy.contains(&20));
    }

    #[rstest]
    fn test_elements_yields_each_member_once() {
        let set = Set::from([5, 6, 7]);
        let mut elements = set.elements();
        elements.sort_unstable();
        assert_eq!(elements, vec![5, 6, 7]);
        assert_eq!(set.iter().len(), 3);
    }

    #[rstest]
    fn test_into_iter_consumes() {
        let set = Set::from(["a".to_string(), "b".to_string()]);
        let mut owned: Vec<String> = set.into_iter().collect();
        owned.sort();
        assert_eq!(owned, vec!["a".to_string(), "b".to_string()]);
    }

    #[rstest]
    fn test_extend_by_reference() {
        let mut set = Set::from([1]);
        set.extend(&[1, 2, 3]);
        assert_eq!(sorted(&set), vec![1, 2, 3]);
    }
}
