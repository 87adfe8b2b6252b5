pub mod api;
pub mod appointments;
pub mod backend;
pub mod cli;
pub mod core;
pub mod google;
pub mod session;
pub mod suggest;
