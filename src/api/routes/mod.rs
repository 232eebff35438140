pub mod index;
pub mod winrates;
