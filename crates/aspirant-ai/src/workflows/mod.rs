pub mod guidance;
pub mod planning;
pub mod roster;
