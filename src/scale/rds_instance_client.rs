use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_rds::{
    DescribeDBInstancesMessage, ListTagsForResourceMessage, Rds, RdsClient, StartDBInstanceMessage,
    StopDBInstanceMessage,
};

use crate::scale::action::TargetDirective;
use crate::scale::error::ScaleError;

#[derive(Debug, Clone, PartialEq)]
pub struct DbInstance {
    pub identifier: String,
    pub status: String,
}

pub struct RdsInstanceClient {
    client: RdsClient,
}

#[async_trait]
pub trait ManageDatabases {
    async fn list_tagged_databases(
        &self,
        directive: &TargetDirective,
    ) -> Result<Vec<DbInstance>, ScaleError>;
    async fn stop_database(&self, identifier: &str) -> Result<(), ScaleError>;
    async fn start_database(&self, identifier: &str) -> Result<(), ScaleError>;
}

#[async_trait]
impl ManageDatabases for RdsInstanceClient {
    async fn list_tagged_databases(
        &self,
        directive: &TargetDirective,
    ) -> Result<Vec<DbInstance>, ScaleError> {
        let result = self
            .client
            .describe_db_instances(DescribeDBInstancesMessage::default())
            .await?;

        let mut databases = Vec::new();
        for db_instance in result.db_instances.unwrap_or_default() {
            let arn = db_instance
                .db_instance_arn
                .clone()
                .ok_or(ScaleError::NoneValue)?;
            // RDS has no tag-filtered listing; tags come from a per-instance
            // lookup against the ARN.
            let tags = self
                .client
                .list_tags_for_resource(ListTagsForResourceMessage {
                    resource_name: arn,
                    ..ListTagsForResourceMessage::default()
                })
                .await?
                .tag_list
                .unwrap_or_default();
            let tagged = tags.iter().any(|tag| {
                tag.key.as_deref() == Some(directive.tag_key.as_str())
                    && tag.value.as_deref() == Some(directive.tag_value.as_str())
            });
            if !tagged {
                continue;
            }
            databases.push(DbInstance {
                identifier: db_instance
                    .db_instance_identifier
                    .ok_or(ScaleError::NoneValue)?,
                status: db_instance.db_instance_status.ok_or(ScaleError::NoneValue)?,
            });
        }
        Ok(databases)
    }

    async fn stop_database(&self, identifier: &str) -> Result<(), ScaleError> {
        self.client
            .stop_db_instance(StopDBInstanceMessage {
                db_instance_identifier: identifier.to_string(),
                ..StopDBInstanceMessage::default()
            })
            .await?;
        Ok(())
    }

    async fn start_database(&self, identifier: &str) -> Result<(), ScaleError> {
        self.client
            .start_db_instance(StartDBInstanceMessage {
                db_instance_identifier: identifier.to_string(),
            })
            .await?;
        Ok(())
    }
}

impl RdsInstanceClient {
    pub fn new(region: Region) -> Self {
        RdsInstanceClient {
            client: RdsClient::new(region),
        }
    }

    fn new_with_client(client: RdsClient) -> Self {
        RdsInstanceClient { client }
    }
}

#[cfg(test)]
mod tests {
    use crate::scale::action::{ScaleAction, TargetDirective};
    use crate::scale::config::Config;
    use crate::scale::rds_instance_client::{DbInstance, ManageDatabases, RdsInstanceClient};
    use rusoto_mock::{
        MockCredentialsProvider, MockRequestDispatcher, MockResponseReader,
        MultipleMockRequestDispatcher, ReadMockResponse,
    };
    use rusoto_rds::RdsClient;

    fn directive() -> TargetDirective {
        TargetDirective::new(&Config::default(), ScaleAction::Down)
    }

    #[tokio::test]
    async fn test_list_tagged_databases_filters_on_tag() {
        // Two instances come back from the listing; only the first carries
        // the Autorestart=true tag.
        let mock = RdsClient::new_with(
            MultipleMockRequestDispatcher::new(vec![
                MockRequestDispatcher::default().with_body(&*MockResponseReader::read_response(
                    "test_resources/valid",
                    "describe_db_instances.xml",
                )),
                MockRequestDispatcher::default().with_body(&*MockResponseReader::read_response(
                    "test_resources/valid",
                    "list_tags_autorestart.xml",
                )),
                MockRequestDispatcher::default().with_body(&*MockResponseReader::read_response(
                    "test_resources/valid",
                    "list_tags_other.xml",
                )),
            ]),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = RdsInstanceClient::new_with_client(mock);
        let result = client.list_tagged_databases(&directive()).await;

        assert_eq!(
            result.unwrap(),
            [DbInstance {
                identifier: "analytics-db".to_string(),
                status: "available".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_list_tagged_databases_error() {
        let mock = RdsClient::new_with(
            MockRequestDispatcher::with_status(400).with_body(&*MockResponseReader::read_response(
                "test_resources/error",
                "describe_db_instances.xml",
            )),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = RdsInstanceClient::new_with_client(mock);
        let result = client.list_tagged_databases(&directive()).await;

        assert!(result.is_err());
    }
}
