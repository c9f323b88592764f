#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/*!

# Reading Order

The modules form a strict dependency chain, leaves first:

1. [`details`] — the implementation types. Plain structs with inherent
   methods, written with no knowledge that they will ever be bound.
2. [`facets`] — the interface contracts. Each facet is a trait whose default
   method bodies forward through the binder's privileged accessor; each is
   defined against an abstract capability trait, never against a concrete
   implementation.
3. [`binder`] — the mechanism itself: [`binder::Binder`] and the sealed
   accessor that stands in for C++'s `friend`.
4. [`bindings`] — the pairings. This is the only place where an
   implementation type and a facet are introduced to each other.
5. `instantiated` (behind the cargo feature of the same name) — the same
   sample binding packaged under the explicit-instantiation model.

# Why Not `dyn`?

The conventional route to "many implementations behind one interface" is a
trait object: `Box<dyn Interface>` and a vtable. That buys runtime
substitution, which this pattern deliberately does not need — the
implementation choice is fixed at compile time, so paying for indirect calls
(and giving up inlining across the interface boundary) would be pure loss.
Here the substitution point is a generic parameter instead, and an interface
call compiles to a direct call into the implementation, or to nothing at all
once the inliner is done.

What the pattern *keeps* from the trait-object world is the discipline:
consumers see only the facet's operations, and the implementation's state is
unreachable from outside. The enforcement is entirely in the type system; see
[`binder`] for the details.

*/

pub mod binder;
pub mod bindings;
pub mod details;
pub mod facets;

pub use binder::Binder;

#[cfg(feature = "instantiated")]
pub mod instantiated;
