use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_eks::{
    DescribeClusterRequest, DescribeNodegroupRequest, Eks, EksClient, ListClustersRequest,
    ListNodegroupsRequest, NodegroupScalingConfig, UpdateNodegroupConfigRequest,
};

use crate::scale::action::TargetDirective;
use crate::scale::error::ScaleError;

pub struct EksClusterClient {
    client: EksClient,
}

#[async_trait]
pub trait ManageNodeGroups {
    async fn list_tagged_clusters(
        &self,
        directive: &TargetDirective,
    ) -> Result<Vec<String>, ScaleError>;
    async fn list_nodegroups(&self, cluster_name: &str) -> Result<Vec<String>, ScaleError>;
    async fn set_nodegroup_desired_size(
        &self,
        cluster_name: &str,
        nodegroup_name: &str,
        desired_size: i64,
    ) -> Result<(), ScaleError>;
    async fn nodegroup_desired_size(
        &self,
        cluster_name: &str,
        nodegroup_name: &str,
    ) -> Result<i64, ScaleError>;
}

#[async_trait]
impl ManageNodeGroups for EksClusterClient {
    async fn list_tagged_clusters(
        &self,
        directive: &TargetDirective,
    ) -> Result<Vec<String>, ScaleError> {
        let cluster_names = self
            .client
            .list_clusters(ListClustersRequest::default())
            .await?
            .clusters
            .unwrap_or_default();

        let mut tagged = Vec::new();
        for cluster_name in cluster_names {
            let cluster = self
                .client
                .describe_cluster(DescribeClusterRequest {
                    name: cluster_name.clone(),
                })
                .await?
                .cluster
                .ok_or(ScaleError::NoneValue)?;
            let matches = cluster
                .tags
                .map_or(false, |tags| tags.get(&directive.tag_key) == Some(&directive.tag_value));
            if matches {
                tagged.push(cluster_name);
            }
        }
        Ok(tagged)
    }

    async fn list_nodegroups(&self, cluster_name: &str) -> Result<Vec<String>, ScaleError> {
        let nodegroups = self
            .client
            .list_nodegroups(ListNodegroupsRequest {
                cluster_name: cluster_name.to_string(),
                ..ListNodegroupsRequest::default()
            })
            .await?
            .nodegroups
            .unwrap_or_default();
        Ok(nodegroups)
    }

    async fn set_nodegroup_desired_size(
        &self,
        cluster_name: &str,
        nodegroup_name: &str,
        desired_size: i64,
    ) -> Result<(), ScaleError> {
        self.client
            .update_nodegroup_config(UpdateNodegroupConfigRequest {
                cluster_name: cluster_name.to_string(),
                nodegroup_name: nodegroup_name.to_string(),
                scaling_config: Some(NodegroupScalingConfig {
                    desired_size: Some(desired_size),
                    ..NodegroupScalingConfig::default()
                }),
                ..UpdateNodegroupConfigRequest::default()
            })
            .await?;
        Ok(())
    }

    async fn nodegroup_desired_size(
        &self,
        cluster_name: &str,
        nodegroup_name: &str,
    ) -> Result<i64, ScaleError> {
        let nodegroup = self
            .client
            .describe_nodegroup(DescribeNodegroupRequest {
                cluster_name: cluster_name.to_string(),
                nodegroup_name: nodegroup_name.to_string(),
            })
            .await?
            .nodegroup
            .ok_or(ScaleError::NoneValue)?;
        nodegroup
            .scaling_config
            .and_then(|scaling_config| scaling_config.desired_size)
            .ok_or(ScaleError::NoneValue)
    }
}

impl EksClusterClient {
    pub fn new(region: Region) -> Self {
        EksClusterClient {
            client: EksClient::new(region),
        }
    }

    fn new_with_client(client: EksClient) -> Self {
        EksClusterClient { client }
    }
}

#[cfg(test)]
mod tests {
    use crate::scale::action::{ScaleAction, TargetDirective};
    use crate::scale::config::Config;
    use crate::scale::eks_cluster_client::{EksClusterClient, ManageNodeGroups};
    use rusoto_eks::EksClient;
    use rusoto_mock::{
        MockCredentialsProvider, MockRequestDispatcher, MockResponseReader,
        MultipleMockRequestDispatcher, ReadMockResponse,
    };

    fn directive() -> TargetDirective {
        TargetDirective::new(&Config::default(), ScaleAction::Down)
    }

    #[tokio::test]
    async fn test_list_tagged_clusters_filters_on_tag() {
        let mock = EksClient::new_with(
            MultipleMockRequestDispatcher::new(vec![
                MockRequestDispatcher::default().with_body(&*MockResponseReader::read_response(
                    "test_resources/valid",
                    "list_clusters.json",
                )),
                MockRequestDispatcher::default().with_body(&*MockResponseReader::read_response(
                    "test_resources/valid",
                    "describe_cluster_tagged.json",
                )),
                MockRequestDispatcher::default().with_body(&*MockResponseReader::read_response(
                    "test_resources/valid",
                    "describe_cluster_untagged.json",
                )),
            ]),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = EksClusterClient::new_with_client(mock);
        let result = client.list_tagged_clusters(&directive()).await;

        assert_eq!(result.unwrap(), ["analytics-cluster".to_string()]);
    }

    #[tokio::test]
    async fn test_nodegroup_desired_size() {
        let mock = EksClient::new_with(
            MockRequestDispatcher::default().with_body(&*MockResponseReader::read_response(
                "test_resources/valid",
                "describe_nodegroup.json",
            )),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = EksClusterClient::new_with_client(mock);
        let result = client
            .nodegroup_desired_size("analytics-cluster", "analytics-workers")
            .await;

        assert_eq!(result.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_set_nodegroup_desired_size() {
        let mock = EksClient::new_with(
            MockRequestDispatcher::default().with_body(&*MockResponseReader::read_response(
                "test_resources/valid",
                "update_nodegroup_config.json",
            )),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = EksClusterClient::new_with_client(mock);
        let result = client
            .set_nodegroup_desired_size("analytics-cluster", "analytics-workers", 0)
            .await;

        assert!(result.is_ok());
    }
}
