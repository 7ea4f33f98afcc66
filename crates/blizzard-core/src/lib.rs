pub mod anim;
pub mod animator;
pub mod container;
pub mod geometry;
pub mod macros;
pub mod protocol;
pub mod ring;
