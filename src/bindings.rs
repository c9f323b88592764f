/*!

# The Pairing Site

Everything meets here and nowhere else. [`details`](crate::details) knows
nothing about facets; [`facets`](crate::facets) knows nothing about concrete
implementations; this module introduces them:

1. it satisfies a facet's capability contract for an implementation type, by
   forwarding to the type's own inherent methods, so the implementation
   itself never has to mention the contract; and
2. it publishes the composed types, as aliases of [`Binder`].

Swapping an implementation means touching this module only. Consumers hold a
[`Tallier`] or a [`Welcome`] and call facet operations on it; which concrete
type sits inside is invisible to them, the same decoupling a trait object
would give, with the substitution point moved from runtime to this file.

*/

use crate::binder::Binder;
use crate::details::{Counter, Motd};
use crate::facets::{BannerOps, TallyOps};

impl TallyOps for Counter {
    fn bump(&mut self) {
        self.bump()
    }

    fn total(&self) -> u64 {
        self.total()
    }
}

impl BannerOps for Motd {
    fn banner() -> &'static str {
        Motd::banner()
    }
}

/// A [`Counter`] wearing the [`Tally`](crate::facets::Tally) facet.
pub type Tallier = Binder<Counter>;

/// A [`Motd`] wearing the [`Banner`](crate::facets::Banner) facet.
pub type Welcome = Binder<Motd>;
