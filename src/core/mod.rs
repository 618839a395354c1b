pub mod calendar;
pub(crate) mod line;
pub mod numeral;
