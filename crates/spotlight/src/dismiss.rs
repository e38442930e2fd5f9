#![forbid(unsafe_code)]

use std::cell::Cell;
use std::rc::Rc;

/// Lets a message or target end the session it is attached to.
///
/// Each session hands out handles tied to that session only. Requests are
/// picked up on the overlay's next `tick`, `handle_pointer`, or
/// `poll_dismiss`; a handle kept past the end of its session does nothing.
#[derive(Debug, Clone)]
pub struct DismissHandle {
    requested: Rc<Cell<bool>>,
}

impl DismissHandle {
    pub(crate) fn new(requested: Rc<Cell<bool>>) -> Self {
        Self { requested }
    }

    /// Ask the overlay to end the session.
    pub fn dismiss(&self) {
        self.requested.set(true);
    }

    /// Whether a dismissal has been requested through any clone of this handle.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.requested.get()
    }
}
