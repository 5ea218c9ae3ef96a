//! Mobile navigation drawer wiring.
//!
//! Binds the trigger, close button, overlay, and every link inside the
//! drawer to the [`DrawerCore`] state machine and applies the effects it
//! emits. If the trigger or the panel is missing from the markup, nothing is
//! bound and the controller is inert.

use std::cell::RefCell;
use std::rc::Rc;

use behavior::consts::{
    DRAWER_CLOSE_SELECTOR, DRAWER_LINK_SELECTOR, DRAWER_OVERLAY_SELECTOR, DRAWER_SELECTOR,
    DRAWER_TRIGGER_SELECTOR, OPEN_CLASS, VISIBLE_CLASS,
};
use behavior::drawer::{DrawerCore, DrawerEffect};
use web_sys::{Document, Element};

use crate::dom;

/// DOM handles a drawer transition mutates.
#[derive(Clone)]
struct DrawerDom {
    document: Document,
    panel: Element,
    overlay: Option<Element>,
}

impl DrawerDom {
    fn apply(&self, effects: &[DrawerEffect]) {
        for effect in effects {
            match effect {
                DrawerEffect::OpenPanel => dom::add_class(&self.panel, OPEN_CLASS),
                DrawerEffect::ClosePanel => dom::remove_class(&self.panel, OPEN_CLASS),
                DrawerEffect::ShowOverlay => {
                    if let Some(overlay) = &self.overlay {
                        dom::add_class(overlay, VISIBLE_CLASS);
                    }
                }
                DrawerEffect::HideOverlay => {
                    if let Some(overlay) = &self.overlay {
                        dom::remove_class(overlay, VISIBLE_CLASS);
                    }
                }
                DrawerEffect::LockScroll => dom::lock_body_scroll(&self.document),
                DrawerEffect::UnlockScroll => dom::unlock_body_scroll(&self.document),
            }
        }
    }
}

fn close_handler(core: Rc<RefCell<DrawerCore>>, dom: DrawerDom) -> impl FnMut() + 'static {
    move || {
        let effects = core.borrow_mut().close();
        dom.apply(&effects);
    }
}

/// Wire up the drawer, or do nothing when its anchors are absent.
pub fn init(doc: &Document) {
    let Some(trigger) = dom::query(doc, DRAWER_TRIGGER_SELECTOR) else {
        log::debug!("drawer: no trigger in markup, skipping");
        return;
    };
    let Some(panel) = dom::query(doc, DRAWER_SELECTOR) else {
        log::debug!("drawer: no panel in markup, skipping");
        return;
    };
    let overlay = dom::query(doc, DRAWER_OVERLAY_SELECTOR);
    let close = dom::query(doc, DRAWER_CLOSE_SELECTOR);

    let core = Rc::new(RefCell::new(DrawerCore::new()));
    let drawer_dom = DrawerDom { document: doc.clone(), panel: panel.clone(), overlay };

    {
        let core = Rc::clone(&core);
        let dom_for_open = drawer_dom.clone();
        dom::on_click(&trigger, move || {
            let effects = core.borrow_mut().open();
            dom_for_open.apply(&effects);
        });
    }

    if let Some(close) = close {
        dom::on_click(&close, close_handler(Rc::clone(&core), drawer_dom.clone()));
    }
    if let Some(overlay) = &drawer_dom.overlay {
        dom::on_click(overlay, close_handler(Rc::clone(&core), drawer_dom.clone()));
    }
    for link in dom::query_all_within(&panel, DRAWER_LINK_SELECTOR) {
        dom::on_click(&link, close_handler(Rc::clone(&core), drawer_dom.clone()));
    }
}
