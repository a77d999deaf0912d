use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::discovery_page::DiscoveryPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    DiscoveryPage {},
}
