/*!

# Facets: the Interface Half of a Binding

A *facet* is the interface half of a static binding: a trait that declares
the operations callers may invoke on a composed type and implements every one
of them as a thin forward into the bound implementation. Facets hold no state
and cache nothing; the only thing a facet body ever does is obtain the owned
implementation through the binder's privileged accessor and call the matching
operation on it. Whatever that operation returns, mutates, or fails with
passes through unaltered.

Each facet comes with a *capability trait*, its implementation contract. The
facet's default bodies are written against the capability trait alone, never
against a concrete implementation, which is what lets the facet live in a
module that compiles without any implementation in sight (the moral
equivalent of coding against a forward declaration). A concrete type meets
the contract at the pairing site in [`bindings`](crate::bindings), not here
and not in [`details`](crate::details).

Two further properties fall out of the shape of the declarations rather than
from any runtime check:

- A facet cannot be used "bare". Its supertrait is the crate-private accessor
  trait, so the only types that can carry a facet are binders; there is no
  such thing as an unattached facet instance.
- A facet cannot be implemented downstream. The blanket impl in this crate
  already covers every bound composed type, and the unreachable supertrait
  rules out everything else.

## Writing a Facet by Hand vs. by Macro

[`tally.rs`](Tally) spells the whole pattern out: capability trait, facet
trait with forwarding defaults, blanket impl. Three declarations that must
stay in lockstep, which is exactly the kind of invariant that quietly rots
under maintenance: add an operation to the capability trait and forget the
forwarding default, and every binder silently loses the operation.

[`banner.rs`](Banner) instead declares its facet through the `facet!` macro,
which generates all three declarations from a single trait-like
declaration. This is an instance of *correctness via macro*: the forwarding
bodies cannot drift from the contract because both are produced from the same
tokens. The macro is deliberately not exported from the crate. Facet bodies
need the privileged accessor, and the accessor's scope is this crate, so a
downstream invocation could never compile anyway; keeping the macro internal
turns that late, confusing path error into a simple "macro not found".

*/

/// Declares a facet and everything that keeps it honest.
///
/// One invocation generates, from a single trait-like declaration:
///
/// - the capability trait `<Name>Ops` (the implementation contract), with
///   the declared signatures as required methods;
/// - the facet trait `<Name>` itself, with a forwarding default body per
///   operation;
/// - the blanket impl of `<Name>` for every composed type whose
///   implementation meets the contract.
///
/// Operations may take `&self`, `&mut self`, or no receiver at all; a
/// receiver-less operation forwards to an associated function on the
/// implementation type.
macro_rules! facet {
    (
        $(#[$meta:meta])*
        pub trait $facet:ident {
            $($methods:tt)*
        }
    ) => {
        paste::paste! {
            #[doc = concat!(
                "Capability contract for the [`", stringify!($facet), "`] facet: ",
                "what an implementation must provide to be bound to it."
            )]
            pub trait [<$facet Ops>] {
                crate::facets::facet!(@contract $($methods)*);
            }

            $(#[$meta])*
            pub trait $facet: crate::binder::sealed::Bound
            where
                <Self as crate::binder::sealed::Bound>::Details: [<$facet Ops>],
            {
                crate::facets::facet!(@forward [<$facet Ops>]; $($methods)*);
            }

            impl<T> $facet for T
            where
                T: crate::binder::sealed::Bound,
                <T as crate::binder::sealed::Bound>::Details: [<$facet Ops>],
            {
            }
        }
    };

    // Contract methods: the declared signatures, verbatim, no bodies.
    (@contract) => {};
    (@contract
        $(#[$m:meta])*
        fn $name:ident(&self $(, $arg:ident: $ty:ty)*) $(-> $ret:ty)?;
        $($rest:tt)*
    ) => {
        $(#[$m])*
        fn $name(&self $(, $arg: $ty)*) $(-> $ret)?;
        crate::facets::facet!(@contract $($rest)*);
    };
    (@contract
        $(#[$m:meta])*
        fn $name:ident(&mut self $(, $arg:ident: $ty:ty)*) $(-> $ret:ty)?;
        $($rest:tt)*
    ) => {
        $(#[$m])*
        fn $name(&mut self $(, $arg: $ty)*) $(-> $ret)?;
        crate::facets::facet!(@contract $($rest)*);
    };
    (@contract
        $(#[$m:meta])*
        fn $name:ident($($arg:ident: $ty:ty),*) $(-> $ret:ty)?;
        $($rest:tt)*
    ) => {
        $(#[$m])*
        fn $name($($arg: $ty),*) $(-> $ret)?;
        crate::facets::facet!(@contract $($rest)*);
    };

    // Facet methods: same signatures, each with a forwarding default body.
    (@forward $ops:ty;) => {};
    (@forward $ops:ty;
        $(#[$m:meta])*
        fn $name:ident(&self $(, $arg:ident: $ty:ty)*) $(-> $ret:ty)?;
        $($rest:tt)*
    ) => {
        $(#[$m])*
        fn $name(&self $(, $arg: $ty)*) $(-> $ret)? {
            <<Self as crate::binder::sealed::Bound>::Details as $ops>::$name(
                crate::binder::sealed::Bound::details(self) $(, $arg)*
            )
        }
        crate::facets::facet!(@forward $ops; $($rest)*);
    };
    (@forward $ops:ty;
        $(#[$m:meta])*
        fn $name:ident(&mut self $(, $arg:ident: $ty:ty)*) $(-> $ret:ty)?;
        $($rest:tt)*
    ) => {
        $(#[$m])*
        fn $name(&mut self $(, $arg: $ty)*) $(-> $ret)? {
            <<Self as crate::binder::sealed::Bound>::Details as $ops>::$name(
                crate::binder::sealed::Bound::details_mut(self) $(, $arg)*
            )
        }
        crate::facets::facet!(@forward $ops; $($rest)*);
    };
    (@forward $ops:ty;
        $(#[$m:meta])*
        fn $name:ident($($arg:ident: $ty:ty),*) $(-> $ret:ty)?;
        $($rest:tt)*
    ) => {
        $(#[$m])*
        fn $name($($arg: $ty),*) $(-> $ret)? {
            <<Self as crate::binder::sealed::Bound>::Details as $ops>::$name($($arg),*)
        }
        crate::facets::facet!(@forward $ops; $($rest)*);
    };
}

pub(crate) use facet;

mod banner;
mod tally;

pub use banner::{Banner, BannerOps};
pub use tally::{Tally, TallyOps};

#[cfg(test)]
mod tests {
    use crate::binder::Binder;

    facet! {
        /// A reading that can be set and queried; covers every receiver
        /// form the macro accepts in one declaration.
        pub trait Gauge {
            /// Replace the current reading.
            fn set(&mut self, value: i64);

            /// The current reading.
            fn get(&self) -> i64;

            /// The unit all readings are in.
            fn unit() -> &'static str;
        }
    }

    #[derive(Default)]
    struct Thermometer(i64);

    impl GaugeOps for Thermometer {
        fn set(&mut self, value: i64) {
            self.0 = value;
        }

        fn get(&self) -> i64 {
            self.0
        }

        fn unit() -> &'static str {
            "celsius"
        }
    }

    #[test]
    fn generated_facet_forwards_every_receiver_form() {
        let mut bound = Binder::new(Thermometer::default());

        bound.set(21);
        assert_eq!(bound.get(), 21);
        assert_eq!(<Binder<Thermometer> as Gauge>::unit(), "celsius");
    }

    #[test]
    fn generated_facet_keeps_binders_independent() {
        let mut hot = Binder::new(Thermometer::default());
        let cold = Binder::new(Thermometer::default());

        hot.set(40);

        assert_eq!(hot.get(), 40);
        assert_eq!(cold.get(), 0);
    }
}
