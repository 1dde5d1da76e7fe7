pub mod health;
pub mod inquiry;
