use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_ses::{Body, Content, Destination, Message, SendEmailRequest, Ses, SesClient};

use crate::scale::error::ScaleError;

pub struct SesNotifierClient {
    client: SesClient,
    email: String,
}

#[async_trait]
pub trait Notify {
    async fn send_failure_email(&self, subject: &str, body: &str) -> Result<(), ScaleError>;
}

#[async_trait]
impl Notify for SesNotifierClient {
    async fn send_failure_email(&self, subject: &str, body: &str) -> Result<(), ScaleError> {
        let request = SendEmailRequest {
            source: self.email.clone(),
            destination: Destination {
                to_addresses: Some(vec![self.email.clone()]),
                ..Destination::default()
            },
            message: Message {
                subject: Content {
                    data: subject.to_string(),
                    charset: None,
                },
                body: Body {
                    text: Some(Content {
                        data: body.to_string(),
                        charset: None,
                    }),
                    html: None,
                },
            },
            ..SendEmailRequest::default()
        };
        self.client.send_email(request).await?;
        Ok(())
    }
}

impl SesNotifierClient {
    pub fn new(region: Region, email: String) -> Self {
        SesNotifierClient {
            client: SesClient::new(region),
            email,
        }
    }

    fn new_with_client(client: SesClient, email: String) -> Self {
        SesNotifierClient { client, email }
    }
}

#[cfg(test)]
mod tests {
    use crate::scale::ses_notifier_client::{Notify, SesNotifierClient};
    use rusoto_mock::{
        MockCredentialsProvider, MockRequestDispatcher, MockResponseReader, ReadMockResponse,
    };
    use rusoto_ses::SesClient;

    #[tokio::test]
    async fn test_send_failure_email() {
        let mock = SesClient::new_with(
            MockRequestDispatcher::default().with_body(&*MockResponseReader::read_response(
                "test_resources/valid",
                "send_email.xml",
            )),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = SesNotifierClient::new_with_client(mock, "ops@example.com".to_string());
        let result = client
            .send_failure_email("Infrastructure Scaling Failure", "EC2 in us-east-1: boom")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_send_failure_email_error() {
        let mock = SesClient::new_with(
            MockRequestDispatcher::with_status(400).with_body(&*MockResponseReader::read_response(
                "test_resources/error",
                "send_email.xml",
            )),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = SesNotifierClient::new_with_client(mock, "ops@example.com".to_string());
        let result = client
            .send_failure_email("Infrastructure Scaling Failure", "EC2 in us-east-1: boom")
            .await;

        assert!(result.is_err());
    }
}
