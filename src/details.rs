/*!

# Implementation Types

The leaf end of the chain: concrete types that hold state and do the actual
work. Nothing in this module knows that binders or facets exist; the types
here compile on their own and are usable on their own. The introduction to
a facet happens elsewhere, in [`bindings`](crate::bindings), which is what
keeps these definitions substitutable.

The two samples are deliberately tiny. [`Counter`] carries instance state,
[`Motd`] carries none at all and exposes only an associated function, which
is the case that usually gets awkward when an interface is a trait object.

*/

/// A running count. One `u64`, starts at zero.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counter {
    total: u64,
}

impl Counter {
    /// Adds one to the count.
    pub fn bump(&mut self) {
        self.total += 1;
    }

    /// The count so far.
    pub fn total(&self) -> u64 {
        self.total
    }
}

/// A message of the day. Stateless; the message is baked into the type.
#[derive(Debug, Default, Clone, Copy)]
pub struct Motd;

impl Motd {
    /// The fixed banner line this type publishes.
    pub fn banner() -> &'static str {
        "all systems nominal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero_and_counts() {
        let mut c = Counter::default();
        assert_eq!(c.total(), 0);
        c.bump();
        c.bump();
        assert_eq!(c.total(), 2);
    }

    #[test]
    fn motd_is_fixed() {
        assert_eq!(Motd::banner(), "all systems nominal");
    }
}
