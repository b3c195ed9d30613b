pub mod lead_form;
pub mod phone_input;
