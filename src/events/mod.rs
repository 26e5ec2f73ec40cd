pub mod anchor;
pub mod pointer;
pub mod scroll;

use crate::subscription::Subscription;
use folio_core::{InteractionController, ObserverRegistry};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub use anchor::wire_anchor_nav;
pub use pointer::{wire_hover, wire_pointer};
pub use scroll::wire_scroll;

pub type Listeners = ObserverRegistry<Subscription>;

/// Handles shared by every listener of one mount.
#[derive(Clone)]
pub struct Wiring {
    pub controller: Rc<RefCell<InteractionController>>,
    pub document: web::Document,
}

/// Register `handler` for `event` on `target` under `kind`.
pub(crate) fn listen(
    listeners: &mut Listeners,
    kind: &'static str,
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) {
    if let Some(sub) = Subscription::listen(target, event, handler) {
        listeners.register(kind, sub);
    }
}
