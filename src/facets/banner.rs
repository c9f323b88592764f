/*!

# The `Banner` Facet, Declared Through the Macro

One `facet!` invocation produces the capability trait
[`BannerOps`], the facet trait [`Banner`], and the blanket impl; compare with
[`tally.rs`](super::Tally) for the hand-written equivalent.

The single operation here has no receiver. That is the case a trait object
cannot carry at all (an associated function has no `self` to dispatch on),
and it costs this pattern nothing: the forward goes to an associated function
on the implementation type, picked at compile time like everything else.

*/

facet! {
    /// A fixed banner line, exposed by a composed type.
    pub trait Banner {
        /// The banner line published by the bound implementation, unaltered.
        fn banner() -> &'static str;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::Binder;

    /// Mock implementation: stateless, publishes one line.
    struct Fortune;

    impl BannerOps for Fortune {
        fn banner() -> &'static str {
            "ask again later"
        }
    }

    #[test]
    fn static_operation_forwards_unaltered() {
        assert_eq!(<Binder<Fortune> as Banner>::banner(), "ask again later");
        assert_eq!(<Binder<Fortune> as Banner>::banner(), Fortune::banner());
    }
}
