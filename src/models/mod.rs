pub mod catalog;
pub mod currency;
pub mod item;
pub mod package;
pub mod tax;
pub mod trip;
