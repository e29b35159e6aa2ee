//! Moving the user's attention to a form control.

use editor_logging::editor_debug;

/// A rendered form control that can take focus.
pub trait FieldElement {
    fn scroll_into_view(&mut self);
    fn focus(&mut self);
}

/// Whatever currently holds the rendered controls, looked up by element id.
///
/// Element ids are the field names (`salaryMin`, `title`, ...).
pub trait FieldSurface {
    fn element_mut(&mut self, id: &str) -> Option<&mut dyn FieldElement>;
}

/// Scrolls the control for `field` into view and focuses it.
///
/// Returns `false` without doing anything when the control is not mounted,
/// which is normal while its section is still hidden.
pub fn scroll_to_field(surface: &mut dyn FieldSurface, field: &str) -> bool {
    match surface.element_mut(field) {
        Some(element) => {
            element.scroll_into_view();
            element.focus();
            true
        }
        None => {
            editor_debug!("scroll_to_field: no element with id {}", field);
            false
        }
    }
}
