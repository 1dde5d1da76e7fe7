pub mod email_service;
pub mod inquiry_service;
