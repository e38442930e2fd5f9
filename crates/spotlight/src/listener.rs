#![forbid(unsafe_code)]

use crate::target::Target;

/// Session boundary callbacks.
///
/// Both run synchronously inside `start`/`end`. `on_end` fires exactly once
/// per started session.
pub trait SpotlightListener {
    fn on_start(&mut self, _target: Option<&Target>) {}

    fn on_end(&mut self, _target: Option<&Target>) {}
}
