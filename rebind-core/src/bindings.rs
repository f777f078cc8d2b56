use std::slice;

use crate::{Adapter, Callable, Origin};

/// An ordered collection of adapters sharing one call signature.
///
/// Insertion order is invocation order. The same adapter shape may appear
/// any number of times.
///
/// # Example
///
/// ```rust
/// use rebind_core::{Adapter, Bindings, Recorder};
///
/// fn double(x: i32) -> i64 {
///     i64::from(x) * 2
/// }
///
/// let mut bindings = Bindings::new();
/// bindings.push(Adapter::function(double, Recorder::silent("double")));
/// bindings.push(Adapter::closure(
///     |x: i32| i64::from(x) + 1,
///     Recorder::silent("inc"),
/// ));
///
/// assert_eq!(bindings.collect((5,)), vec![10, 6]);
/// ```
pub struct Bindings<I, O> {
    adapters: Vec<Adapter<I, O>>,
}

impl<I, O> Bindings<I, O> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    /// Appends an adapter to the end of the collection.
    pub fn push(&mut self, adapter: Adapter<I, O>) {
        tracing::debug!(
            origin = %adapter.origin(),
            position = self.adapters.len(),
            "adapter appended"
        );
        self.adapters.push(adapter);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Adapter<I, O>> {
        self.adapters.iter()
    }

    /// Returns the origin of each adapter, in invocation order.
    #[must_use]
    pub fn origins(&self) -> Vec<Origin> {
        self.adapters.iter().map(Adapter::origin).collect()
    }
}

impl<I: Clone, O> Bindings<I, O> {
    /// Calls every adapter in order with the same arguments, discarding
    /// the results.
    pub fn invoke_all(&self, input: I) {
        let _span =
            tracing::debug_span!("invoke_all", adapters = self.adapters.len()).entered();
        for adapter in &self.adapters {
            adapter.call(input.clone());
        }
    }

    /// Calls every adapter in order with the same arguments and returns the
    /// results in the same order.
    pub fn collect(&self, input: I) -> Vec<O> {
        let _span = tracing::debug_span!("collect", adapters = self.adapters.len()).entered();
        self.adapters
            .iter()
            .map(|adapter| adapter.call(input.clone()))
            .collect()
    }
}

impl<I, O> Default for Bindings<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> FromIterator<Adapter<I, O>> for Bindings<I, O> {
    fn from_iter<T: IntoIterator<Item = Adapter<I, O>>>(iter: T) -> Self {
        let mut bindings = Self::new();
        bindings.extend(iter);
        bindings
    }
}

impl<I, O> Extend<Adapter<I, O>> for Bindings<I, O> {
    fn extend<T: IntoIterator<Item = Adapter<I, O>>>(&mut self, iter: T) {
        for adapter in iter {
            self.push(adapter);
        }
    }
}

impl<'a, I, O> IntoIterator for &'a Bindings<I, O> {
    type Item = &'a Adapter<I, O>;
    type IntoIter = slice::Iter<'a, Adapter<I, O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<I, O> std::fmt::Debug for Bindings<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.adapters).finish()
    }
}
