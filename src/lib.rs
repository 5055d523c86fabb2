pub mod command;
pub mod layout;
pub mod resources;
pub mod runtime;
