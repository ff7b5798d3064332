pub mod orbit;
pub mod project;
