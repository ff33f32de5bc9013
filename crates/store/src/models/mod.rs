pub mod item;
pub mod page;
