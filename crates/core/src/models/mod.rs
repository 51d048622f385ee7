pub mod allocation;
pub mod chart;
pub mod expense;
pub mod projection;
pub mod session;
pub mod settings;
