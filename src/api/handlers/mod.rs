pub mod admin;
pub mod expenses;
pub mod health;
