use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_ec2::{
    DescribeInstancesRequest, Ec2, Ec2Client, Filter, StartInstancesRequest, StopInstancesRequest,
};

use crate::scale::action::TargetDirective;
use crate::scale::error::ScaleError;

#[derive(Debug, Clone, PartialEq)]
pub struct Ec2Instance {
    pub instance_id: String,
    pub state: String,
}

pub struct Ec2InstanceClient {
    client: Ec2Client,
}

#[async_trait]
pub trait ManageInstances {
    async fn list_tagged_instances(
        &self,
        directive: &TargetDirective,
    ) -> Result<Vec<Ec2Instance>, ScaleError>;
    async fn stop_instances(&self, instance_ids: Vec<String>) -> Result<(), ScaleError>;
    async fn start_instances(&self, instance_ids: Vec<String>) -> Result<(), ScaleError>;
}

#[async_trait]
impl ManageInstances for Ec2InstanceClient {
    async fn list_tagged_instances(
        &self,
        directive: &TargetDirective,
    ) -> Result<Vec<Ec2Instance>, ScaleError> {
        let request = DescribeInstancesRequest {
            filters: Some(vec![Filter {
                name: Some(format!("tag:{}", directive.tag_key)),
                values: Some(vec![directive.tag_value.clone()]),
            }]),
            ..DescribeInstancesRequest::default()
        };

        let result = self.client.describe_instances(request).await?;

        let mut instances = Vec::new();
        for reservation in result.reservations.unwrap_or_default() {
            for instance in reservation.instances.unwrap_or_default() {
                let instance_id = instance.instance_id.ok_or(ScaleError::NoneValue)?;
                let state = instance
                    .state
                    .and_then(|state| state.name)
                    .ok_or(ScaleError::NoneValue)?;
                instances.push(Ec2Instance { instance_id, state });
            }
        }
        Ok(instances)
    }

    async fn stop_instances(&self, instance_ids: Vec<String>) -> Result<(), ScaleError> {
        self.client
            .stop_instances(StopInstancesRequest {
                instance_ids,
                ..StopInstancesRequest::default()
            })
            .await?;
        Ok(())
    }

    async fn start_instances(&self, instance_ids: Vec<String>) -> Result<(), ScaleError> {
        self.client
            .start_instances(StartInstancesRequest {
                instance_ids,
                ..StartInstancesRequest::default()
            })
            .await?;
        Ok(())
    }
}

impl Ec2InstanceClient {
    pub fn new(region: Region) -> Self {
        Ec2InstanceClient {
            client: Ec2Client::new(region),
        }
    }

    fn new_with_client(client: Ec2Client) -> Self {
        Ec2InstanceClient { client }
    }
}
