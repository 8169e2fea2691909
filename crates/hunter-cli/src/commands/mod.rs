pub mod analyze;
pub mod auth;
pub mod dispatch;
pub mod history;
pub mod schema;
pub mod shell;

mod shared;
