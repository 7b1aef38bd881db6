mod ui_value;

pub use ui_value::UiValue;
