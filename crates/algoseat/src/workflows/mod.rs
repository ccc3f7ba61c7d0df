pub mod enrollment;
pub mod roster;
