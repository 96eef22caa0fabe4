pub mod event_field;
pub mod event_record;
