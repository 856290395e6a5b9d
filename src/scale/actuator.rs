use log::{error, info};

use crate::scale::action::{ScaleAction, TargetDirective};
use crate::scale::ec2_instance_client::ManageInstances;
use crate::scale::eks_cluster_client::ManageNodeGroups;
use crate::scale::error::ScaleError;
use crate::scale::failure::FailureRecord;
use crate::scale::rds_instance_client::ManageDatabases;

/// Transitions every tagged instance in the actionable source state. Returns
/// the instance ids a transition was requested for; a listing or transition
/// error is recorded against the region and yields an empty list.
pub async fn actuate_instances<C: ManageInstances + Sync>(
    client: &C,
    directive: &TargetDirective,
    region: &str,
    failures: &mut FailureRecord,
) -> Vec<String> {
    let instances = match client.list_tagged_instances(directive).await {
        Ok(instances) => instances,
        Err(error) => {
            error!(
                "Error {} EC2 instances in region {}: {}",
                directive.action.transition_gerund(),
                region,
                error
            );
            failures.record(region, format!("EC2 in {}: {}", region, error));
            return Vec::new();
        }
    };

    let instance_ids: Vec<String> = instances
        .into_iter()
        .filter(|instance| instance.state == directive.action.actionable_instance_state())
        .map(|instance| instance.instance_id)
        .collect();
    if instance_ids.is_empty() {
        return instance_ids;
    }

    let outcome = match directive.action {
        ScaleAction::Down => client.stop_instances(instance_ids.clone()).await,
        ScaleAction::Up => client.start_instances(instance_ids.clone()).await,
    };
    match outcome {
        Ok(()) => {
            info!(
                "{} EC2 instances: {:?} in region {}",
                directive.action.transition_past(),
                instance_ids,
                region
            );
            instance_ids
        }
        Err(error) => {
            error!(
                "Error {} EC2 instances in region {}: {}",
                directive.action.transition_gerund(),
                region,
                error
            );
            failures.record(region, format!("EC2 in {}: {}", region, error));
            Vec::new()
        }
    }
}

/// Transitions every tagged database in the actionable status. One failed
/// call abandons the remaining databases in this region (recorded once);
/// other kinds and regions are unaffected.
pub async fn actuate_databases<C: ManageDatabases + Sync>(
    client: &C,
    directive: &TargetDirective,
    region: &str,
    failures: &mut FailureRecord,
) -> Vec<String> {
    let mut acted = Vec::new();
    let outcome: Result<(), ScaleError> = async {
        for database in client.list_tagged_databases(directive).await? {
            if database.status != directive.action.actionable_db_status() {
                continue;
            }
            match directive.action {
                ScaleAction::Down => client.stop_database(&database.identifier).await?,
                ScaleAction::Up => client.start_database(&database.identifier).await?,
            }
            info!(
                "{} RDS instance: {} in region {}",
                directive.action.transition_past(),
                database.identifier,
                region
            );
            acted.push(database.identifier);
        }
        Ok(())
    }
    .await;

    if let Err(error) = outcome {
        error!(
            "Error {} RDS instances in region {}: {}",
            directive.action.transition_gerund(),
            region,
            error
        );
        failures.record(region, format!("RDS in {}: {}", region, error));
        return Vec::new();
    }
    acted
}

/// Sets the directive's desired size on every node-group of every tagged
/// cluster. Returns the cluster names that were scaled.
pub async fn actuate_nodegroups<C: ManageNodeGroups + Sync>(
    client: &C,
    directive: &TargetDirective,
    region: &str,
    failures: &mut FailureRecord,
) -> Vec<String> {
    let mut scaled = Vec::new();
    let outcome: Result<(), ScaleError> = async {
        for cluster_name in client.list_tagged_clusters(directive).await? {
            for nodegroup_name in client.list_nodegroups(&cluster_name).await? {
                client
                    .set_nodegroup_desired_size(
                        &cluster_name,
                        &nodegroup_name,
                        directive.desired_size,
                    )
                    .await?;
            }
            info!(
                "Scaled {} EKS cluster: {} in region {}",
                directive.action.direction(),
                cluster_name,
                region
            );
            scaled.push(cluster_name);
        }
        Ok(())
    }
    .await;

    if let Err(error) = outcome {
        error!(
            "Error scaling {} EKS clusters in region {}: {}",
            directive.action.direction(),
            region,
            error
        );
        failures.record(region, format!("EKS in {}: {}", region, error));
        return Vec::new();
    }
    scaled
}
