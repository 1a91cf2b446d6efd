pub mod greeting;
pub mod hello;
