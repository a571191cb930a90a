//! Contact-form extraction
//!
//! Browsers post `FormData` as `multipart/form-data`, plain HTML forms and
//! most scripts use `application/x-www-form-urlencoded`. Both decode to the
//! same [`ContactForm`].

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header,
    response::{IntoResponse, Response},
    Form,
};

use crate::api::ApiError;
use crate::types::ContactForm;

/// Extractor for a contact submission in either form encoding
pub struct ContactSubmission(pub ContactForm);

#[async_trait]
impl<S> FromRequest<S> for ContactSubmission
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            let form = read_multipart(multipart)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(Self(form));
        }

        let Form(form) = Form::<ContactForm>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        Ok(Self(form))
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}

async fn read_multipart(mut multipart: Multipart) -> Result<ContactForm, ApiError> {
    let mut name = None;
    let mut email = None;
    let mut subject = None;
    let mut message = None;

    while let Some(field) = multipart.next_field().await? {
        let slot = match field.name() {
            Some("name") => &mut name,
            Some("email") => &mut email,
            Some("subject") => &mut subject,
            Some("message") => &mut message,
            _ => continue,
        };
        *slot = Some(field.text().await?);
    }

    Ok(ContactForm {
        name: required(name, "name")?,
        email: required(email, "email")?,
        subject: required(subject, "subject")?,
        message: required(message, "message")?,
    })
}

fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::unprocessable(format!("missing form field `{field}`")))
}
