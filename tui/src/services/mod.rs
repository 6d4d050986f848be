pub mod editor_view;
pub mod language_picker;
pub mod notifications;
pub mod results;
