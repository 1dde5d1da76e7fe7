use crate::dto::inquiry_dto::NewInquiry;
use crate::error::Result;
use crate::models::inquiry::Inquiry;
use crate::services::email_service::EmailService;
use crate::utils::validation::validate;
use sqlx::PgPool;

#[derive(Clone)]
pub struct InquiryService {
    pool: PgPool,
}

impl InquiryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Full intake pipeline: validate, persist, then a best-effort
    /// notification. The notification outcome never changes the result;
    /// the guest-facing response is decided by persistence alone.
    pub async fn submit(&self, mailer: &EmailService, payload: NewInquiry) -> Result<Inquiry> {
        validate(&payload)?;

        let inquiry = self.create_inquiry(&payload).await?;

        if mailer.send_new_inquiry_notification(&inquiry).await {
            tracing::info!(inquiry_id = %inquiry.id, "inquiry notification delivered");
        } else {
            tracing::warn!(inquiry_id = %inquiry.id, "inquiry notification not delivered");
        }

        Ok(inquiry)
    }

    /// Single INSERT .. RETURNING; `id` and `created_at` are assigned by
    /// the database so the write is all-or-nothing.
    pub async fn create_inquiry(&self, payload: &NewInquiry) -> Result<Inquiry> {
        let inquiry = sqlx::query_as::<_, Inquiry>(
            r#"
            INSERT INTO inquiries (first_name, last_name, email, phone, check_in, check_out, message)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, first_name, last_name, email, phone, check_in, check_out, message, created_at
            "#,
        )
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.check_in)
        .bind(&payload.check_out)
        .bind(&payload.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(inquiry)
    }

    pub async fn list_inquiries(&self) -> Result<Vec<Inquiry>> {
        let inquiries = sqlx::query_as::<_, Inquiry>(
            r#"
            SELECT id, first_name, last_name, email, phone, check_in, check_out, message, created_at
            FROM inquiries
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(inquiries)
    }
}
