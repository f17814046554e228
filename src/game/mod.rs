pub mod types;
pub mod direction;
pub mod systems;
