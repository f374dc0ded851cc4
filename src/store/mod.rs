pub mod accounts;
pub mod controls;
pub mod records;
pub mod session;
