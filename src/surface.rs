//! Document-mutation seam.

use std::rc::Rc;

/// The slice of the page the controller mutates: the body's class set and
/// the toggle control's text. Injected so tests can observe mutations
/// without a real document.
///
/// Class operations are deliberately fine-grained rather than an atomic
/// swap: the controller adds the target class before removing the other,
/// so the page never observably carries neither.
pub trait ThemeSurface {
    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    fn set_toggle_text(&self, text: &str);
}

impl<D: ThemeSurface> ThemeSurface for Rc<D> {
    fn add_class(&self, class: &str) {
        (**self).add_class(class);
    }

    fn remove_class(&self, class: &str) {
        (**self).remove_class(class);
    }

    fn set_toggle_text(&self, text: &str) {
        (**self).set_toggle_text(text);
    }
}
