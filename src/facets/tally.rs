/*!

# The `Tally` Facet, Written Out by Hand

This file is the pattern with nothing hidden: the capability trait, the facet
trait whose default bodies forward through the accessor, and the blanket impl
that attaches the facet to every qualifying composed type. The
[`Banner`](super::Banner) facet next door is the same three declarations
produced by the `facet!` macro.

Note what is absent. The facet never names a concrete implementation type,
declares no associated state, and adds no error handling, locking, or
logging of its own; an implementation whose operations can fail or need a
lock brings that along itself, and the facet passes it through untouched.

*/

use crate::binder::sealed::Bound;

/// Capability contract for the [`Tally`] facet: what an implementation must
/// provide to be bound to it.
pub trait TallyOps {
    /// Count one more event.
    fn bump(&mut self);

    /// The count so far.
    fn total(&self) -> u64;
}

/// A running count, exposed by a composed type.
///
/// Both operations resolve statically to the bound implementation's own
/// methods; calling them through the facet is observably identical to
/// calling the implementation directly.
///
/// The facet cannot be implemented outside this crate: the blanket impl
/// below already covers every composed type, and nothing else can name the
/// sealed supertrait, so a consumer-side impl is rejected by the compiler:
///
/// ```compile_fail
/// use static_binding::facets::Tally;
///
/// struct Rogue;
///
/// impl Tally for Rogue {}
/// ```
pub trait Tally: Bound
where
    Self::Details: TallyOps,
{
    /// Count one more event.
    fn bump(&mut self) {
        self.details_mut().bump()
    }

    /// The count so far.
    fn total(&self) -> u64 {
        self.details().total()
    }
}

/// Every composed type whose implementation can keep a tally is a `Tally`.
/// The open "which composed type?" parameter of the facet is `T` here.
impl<T> Tally for T
where
    T: Bound,
    T::Details: TallyOps,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::Binder;

    /// A mock implementation, local to this test. The binder works for any
    /// type meeting the contract, not just the samples in `details`.
    #[derive(Default)]
    struct Clicks(u64);

    impl TallyOps for Clicks {
        fn bump(&mut self) {
            self.0 += 1;
        }

        fn total(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn operations_forward_to_the_bound_implementation() {
        let mut bound = Binder::new(Clicks::default());
        bound.bump();
        bound.bump();
        bound.bump();
        assert_eq!(bound.total(), 3);
    }

    #[test]
    fn binding_preserves_behavior_exactly() {
        let mut direct = Clicks::default();
        let mut bound = Binder::<Clicks>::default();

        for _ in 0..5 {
            direct.bump();
            bound.bump();
        }

        assert_eq!(bound.total(), direct.total());
    }
}
