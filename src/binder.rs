/*!

# The Binder

[`Binder<D>`] turns an implementation type `D` into a composed type that
publicly speaks one or more [facets](crate::facets) while keeping the owned
`D` instance private. The whole arrangement is three declarations:

1. `Binder<D>` owns a single field of type `D`.
2. The private accessor trait `Bound` exposes that field, with a shared and a
   mutable accessor, and `Binder<D>` is its only implementor.
3. Every facet takes `Bound` as a supertrait, so its default method bodies can
   reach the owned instance and forward to it.

## Where `friend` Went

In C++ the same composition is usually written as a CRTP template: the binder
inherits from `Interface<Binder>` and befriends that exact instantiation, so
the interface's member functions, and nothing else, can reach the private
implementation member. Rust has neither inheritance nor `friend`, but the two
ingredients of the C++ version both have direct translations:

| C++                                        | here                                      |
| ------------------------------------------ | ----------------------------------------- |
| interface templated over the composed type | facet trait, generic via `Self`           |
| binder inherits `Interface<Binder>`        | blanket impl of the facet for `T: Bound`  |
| `friend class Interface<Binder>`           | `Bound` sealed in a `pub(crate)` module   |
| static downcast in the friend accessor     | `details()` on `self`, no cast needed     |

The friendship boundary is coarser than in C++: Rust visibility is scoped to
modules, not to individual traits, so the privileged scope is this crate
rather than one facet instantiation. Within the crate the convention is that
only facet forwarding bodies (and tests) touch the accessor. Outside the
crate the guarantee is absolute, and it is the part worth having: consumer
code cannot name `Bound`, cannot call `details()`, and cannot implement a
facet for its own types. All three failures happen at compile time; there is
no runtime check anywhere because there is nothing left to check at runtime.

## What a Binding Costs

Nothing. `Binder<D>` is a single field, so it has the size and alignment of
`D` itself (the tests pin this down with `assert_eq_size!`). The facet
methods are ordinary generic functions that the optimizer sees through; there
is no vtable, no function pointer, and no runtime tag in the composed type.

*/

pub(crate) mod sealed {
    //! The privileged channel from facet to implementation.
    //!
    //! `Bound` is a public trait inside a `pub(crate)` module, the same
    //! arrangement a sealed supertrait uses: facets in this crate can name it
    //! and call through it, while downstream crates can do neither.

    /// Access to the implementation instance owned by a composed type.
    ///
    /// The two methods mirror the const/non-const accessor pair a C++ friend
    /// accessor would provide. [`Binder`](super::Binder) is the sole
    /// implementor; implementing this trait for anything else would hand out
    /// facet access to a type the binder does not own, so don't.
    pub trait Bound {
        /// The owned implementation type.
        type Details;

        /// Shared access to the owned implementation.
        fn details(&self) -> &Self::Details;

        /// Exclusive access to the owned implementation.
        fn details_mut(&mut self) -> &mut Self::Details;
    }
}

/// The composed type: a private implementation instance wearing public
/// facets.
///
/// Constructing a `Binder` constructs (or adopts) the implementation
/// instance; dropping the `Binder` drops it. There is exactly one
/// implementation instance per binder and no way to alias it from outside,
/// so independently constructed binders never share state:
///
/// ```
/// use static_binding::bindings::Tallier;
/// use static_binding::facets::Tally;
///
/// let mut a = Tallier::default();
/// let b = Tallier::default();
///
/// a.bump();
/// a.bump();
/// a.bump();
///
/// assert_eq!(a.total(), 3);
/// assert_eq!(b.total(), 0);
/// ```
///
/// The accessor that facets use internally is not part of the public API.
/// There is no method on a binder that yields the implementation instance:
///
/// ```compile_fail
/// use static_binding::bindings::Tallier;
///
/// let t = Tallier::default();
/// let _ = t.details();
/// ```
///
/// Nor can the accessor trait be brought into scope to unlock it, because
/// the module holding it is crate-private:
///
/// ```compile_fail
/// use static_binding::binder::sealed::Bound;
/// ```
///
/// Binding only succeeds when the implementation actually carries the
/// capability a facet forwards to. A type that does not satisfy the facet's
/// contract simply has no facet methods:
///
/// ```compile_fail
/// use static_binding::binder::Binder;
/// use static_binding::facets::Tally;
///
/// struct Inert;
///
/// let mut b = Binder::new(Inert);
/// b.bump();
/// ```
///
/// The same applies facet by facet: a composed type wears exactly the facets
/// its implementation satisfies. A message-of-the-day source keeps no tally:
///
/// ```compile_fail
/// use static_binding::bindings::Welcome;
/// use static_binding::facets::Tally;
///
/// let mut greeter = Welcome::default();
/// greeter.bump();
/// ```
///
/// and a counter publishes no banner:
///
/// ```compile_fail
/// use static_binding::bindings::Tallier;
/// use static_binding::facets::Banner;
///
/// let _ = <Tallier as Banner>::banner();
/// ```
#[derive(Debug, Default, Clone)]
pub struct Binder<D> {
    details: D,
}

impl<D> Binder<D> {
    /// Binds an already-constructed implementation instance. Construction
    /// arguments of the implementation are whatever `D`'s own constructors
    /// take; the binder adds none of its own.
    pub fn new(details: D) -> Self {
        Binder { details }
    }
}

impl<D> sealed::Bound for Binder<D> {
    type Details = D;

    fn details(&self) -> &D {
        &self.details
    }

    fn details_mut(&mut self) -> &mut D {
        &mut self.details
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::{assert_eq_size, const_assert_eq};

    use super::Binder;
    use super::sealed::Bound;
    use crate::bindings::{Tallier, Welcome};
    use crate::details::{Counter, Motd};
    use crate::facets::{Banner, BannerOps, Tally, TallyOps};

    // A binding adds no storage: same layout as the bare implementation,
    // and a ZST implementation composes to a ZST.
    assert_eq_size!(Tallier, Counter);
    const_assert_eq!(core::mem::size_of::<Welcome>(), 0);
    assert_eq_size!(Welcome, Motd);

    #[test]
    fn composed_types_carry_their_facets() {
        // Facet traits restate their where-clause at every generic use
        // site, so the witnesses restate it too; the instantiations below
        // are what prove the facet is actually worn.
        fn wears_tally<T: Tally>()
        where
            T::Details: TallyOps,
        {
        }
        fn wears_banner<T: Banner>()
        where
            T::Details: BannerOps,
        {
        }

        wears_tally::<Tallier>();
        wears_banner::<Welcome>();
    }

    #[test]
    fn each_binder_owns_its_own_instance() {
        let mut a = Binder::new(Counter::default());
        let b = Binder::new(Counter::default());

        a.details_mut().bump();
        a.details_mut().bump();

        assert_eq!(a.details().total(), 2);
        assert_eq!(b.details().total(), 0);
    }

    #[test]
    fn new_adopts_the_instance_as_is() {
        let mut seeded = Counter::default();
        seeded.bump();

        let bound = Binder::new(seeded);
        assert_eq!(bound.details().total(), 1);
    }
}
