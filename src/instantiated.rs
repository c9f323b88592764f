/*!

# Explicit Instantiation

The generic path through this crate is the *inclusion model*: `Binder<D>` and
the facet forwarding bodies are instantiated in the consumer's own codegen
unit, where the compiler sees every definition and can inline straight
through the binding. That is the default and the preferred packaging; it is
how Rust generics always work.

The alternative packaging compiles a chosen binding *once, here*, and lets
consumers link against the finished items. In Rust the lever for that is
simply being non-generic: a monomorphic type or function is code-generated in
its defining crate, and (absent LTO or `#[inline]`) downstream crates call it
without ever seeing its body, the same hard boundary an out-of-line template
instantiation gives a C++ consumer. What is traded away is the cross-boundary
inlining; what is gained is that implementation details stay out of the
consumer's compilation entirely.

The two packagings are behaviorally identical; the tests below pin the
equivalence. This module exists when the `instantiated` cargo feature is
enabled.

*/

use crate::bindings;
use crate::facets::{Banner, Tally};

/// The tally binding, compiled once in this crate.
///
/// Behaves exactly like [`bindings::Tallier`], but its methods are
/// monomorphic items of this crate rather than generics expanded at the call
/// site.
#[derive(Debug, Default, Clone)]
pub struct Tallier {
    inner: bindings::Tallier,
}

impl Tallier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more event.
    pub fn bump(&mut self) {
        self.inner.bump();
    }

    /// The count so far.
    pub fn total(&self) -> u64 {
        self.inner.total()
    }
}

/// The banner binding, compiled once in this crate.
pub fn banner() -> &'static str {
    <bindings::Welcome as Banner>::banner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packagings_agree_on_the_tally() {
        let mut once_compiled = Tallier::new();
        let mut inlined = bindings::Tallier::default();

        for _ in 0..3 {
            once_compiled.bump();
            inlined.bump();
        }

        assert_eq!(once_compiled.total(), inlined.total());
        assert_eq!(once_compiled.total(), 3);
    }

    #[test]
    fn packagings_agree_on_the_banner() {
        assert_eq!(banner(), <bindings::Welcome as Banner>::banner());
        assert_eq!(banner(), "all systems nominal");
    }
}
