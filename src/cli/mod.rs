pub mod convert;
pub mod setup;
