pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_TITLE: &'static str = "title";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_SELECTED: &'static str = "selected";
pub static PROP_DISABLED: &'static str = "disabled";
pub static PROP_ID: &'static str = "id";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_TEXTAREA: &'static str = "textarea";
pub static TAG_SELECT: &'static str = "select";
pub static TAG_BUTTON: &'static str = "button";
pub static TAG_OPTION: &'static str = "option";
pub static TAG_FORM: &'static str = "form";
pub static TAG_H1: &'static str = "h1";
pub static TAG_H2: &'static str = "h2";
pub static TAG_H3: &'static str = "h3";

pub static APP_TITLE: &'static str = "Advanced Web Applications";
pub static SPINNER_TEXT: &'static str = "Please wait...";
