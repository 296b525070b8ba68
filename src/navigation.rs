use std::{cell::RefCell, rc::Rc};

use url::Url;

/// Target of a full-page navigation.
///
/// Navigation is an assignment: the caller hands over the new location and moves on.
pub trait Navigator {
    fn navigate(&self, location: Url);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, location: Url) {
        (**self).navigate(location)
    }
}

impl<N: Navigator + ?Sized> Navigator for Rc<N> {
    fn navigate(&self, location: Url) {
        (**self).navigate(location)
    }
}

// Address of the current page, plus every address it was sent to
#[derive(Debug)]
pub struct Location {
    href: RefCell<Url>,
    visits: RefCell<Vec<Url>>,
}

impl Location {
    pub fn new(start: Url) -> Self {
        Self {
            href: RefCell::new(start),
            visits: RefCell::new(Vec::new()),
        }
    }

    pub fn href(&self) -> Url {
        self.href.borrow().clone()
    }

    pub fn visits(&self) -> Vec<Url> {
        self.visits.borrow().clone()
    }
}

impl Navigator for Location {
    fn navigate(&self, location: Url) {
        tracing::info!(location = %location, "Navigating to new location");
        self.visits.borrow_mut().push(location.clone());
        *self.href.borrow_mut() = location;
    }
}
