#![forbid(unsafe_code)]

/// The view hierarchy the overlay is shown in.
///
/// `attach_overlay` and `detach_overlay` are called once per session;
/// `request_redraw` whenever paint state changes.
pub trait OverlayHost {
    fn attach_overlay(&mut self);

    fn detach_overlay(&mut self);

    fn request_redraw(&mut self) {}
}
