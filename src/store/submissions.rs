//! Append-only log of contact-form submissions

use tokio::sync::RwLock;

use crate::types::ContactForm;

#[derive(Default)]
pub struct SubmissionLog {
    submissions: RwLock<Vec<ContactForm>>,
}

impl SubmissionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submission and return it
    pub async fn append(&self, form: ContactForm) -> ContactForm {
        tracing::info!(
            name = %form.name,
            email = %form.email,
            subject = %form.subject,
            "contact form submitted"
        );

        self.submissions.write().await.push(form.clone());
        form
    }

    /// All submissions in the order they were received
    pub async fn list(&self) -> Vec<ContactForm> {
        self.submissions.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            subject: "Hi".to_string(),
            message: "Question".to_string(),
        }
    }

    #[tokio::test]
    async fn test_append_and_list() {
        let log = SubmissionLog::new();
        assert!(log.list().await.is_empty());

        let jane = form("Jane");
        let echoed = log.append(jane.clone()).await;
        assert_eq!(echoed, jane);

        assert_eq!(log.list().await, vec![jane]);
    }

    #[tokio::test]
    async fn test_preserves_call_order() {
        let log = SubmissionLog::new();
        let names = ["Ann", "Bob", "Cid", "Ann"];
        for name in names {
            log.append(form(name)).await;
        }

        let listed: Vec<String> = log.list().await.into_iter().map(|f| f.name).collect();
        assert_eq!(listed, names);
    }
}
