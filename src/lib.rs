pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{email_service::EmailService, inquiry_service::InquiryService};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub inquiry_service: InquiryService,
    pub email_service: EmailService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();

        let inquiry_service = InquiryService::new(pool.clone());
        let email_service = EmailService::new(
            config.sendgrid_api_key.clone(),
            config.notify_to.clone(),
            config.notify_from.clone(),
        );

        Self {
            pool,
            inquiry_service,
            email_service,
        }
    }
}
