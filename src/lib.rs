pub mod driver;
pub mod neighborhood;
pub mod render;
pub mod rule;
pub mod world;

pub use rule::Rule;
pub use world::World;
