//! CLI commands for routeviz

pub mod dispatch;
pub mod helpers;
pub mod route;
pub mod sim;
