pub mod gate;
pub mod limit;
