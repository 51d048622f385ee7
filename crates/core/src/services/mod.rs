pub mod budget_service;
pub mod chart_service;
pub mod expense_service;
pub mod projection_service;
