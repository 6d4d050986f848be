pub mod language;
pub mod review;
