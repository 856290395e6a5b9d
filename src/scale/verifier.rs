use log::error;

use crate::scale::action::TargetDirective;
use crate::scale::ec2_instance_client::ManageInstances;
use crate::scale::eks_cluster_client::ManageNodeGroups;
use crate::scale::error::ScaleError;
use crate::scale::failure::FailureRecord;
use crate::scale::rds_instance_client::ManageDatabases;

/// Re-lists tagged instances and records every one that has not reached the
/// directive's terminal state. A listing error is recorded, never propagated.
pub async fn verify_instances<C: ManageInstances + Sync>(
    client: &C,
    directive: &TargetDirective,
    region: &str,
    failures: &mut FailureRecord,
) {
    match client.list_tagged_instances(directive).await {
        Ok(instances) => {
            for instance in instances {
                if instance.state != directive.action.target_instance_state() {
                    failures.record(
                        region,
                        format!(
                            "EC2 instance {} in {} is not {}.",
                            instance.instance_id,
                            region,
                            directive.action.verb_past()
                        ),
                    );
                }
            }
        }
        Err(error) => {
            error!("Error checking infrastructure state in region {}: {}", region, error);
            failures.record(region, format!("State check error in {}: {}", region, error));
        }
    }
}

pub async fn verify_databases<C: ManageDatabases + Sync>(
    client: &C,
    directive: &TargetDirective,
    region: &str,
    failures: &mut FailureRecord,
) {
    match client.list_tagged_databases(directive).await {
        Ok(databases) => {
            for database in databases {
                if database.status != directive.action.target_db_status() {
                    failures.record(
                        region,
                        format!(
                            "RDS instance {} in {} is not {}.",
                            database.identifier,
                            region,
                            directive.action.verb_past()
                        ),
                    );
                }
            }
        }
        Err(error) => {
            error!("Error checking infrastructure state in region {}: {}", region, error);
            failures.record(region, format!("State check error in {}: {}", region, error));
        }
    }
}

pub async fn verify_nodegroups<C: ManageNodeGroups + Sync>(
    client: &C,
    directive: &TargetDirective,
    region: &str,
    failures: &mut FailureRecord,
) {
    let outcome: Result<(), ScaleError> = async {
        for cluster_name in client.list_tagged_clusters(directive).await? {
            for nodegroup_name in client.list_nodegroups(&cluster_name).await? {
                let desired_size = client
                    .nodegroup_desired_size(&cluster_name, &nodegroup_name)
                    .await?;
                if !directive.action.desired_size_reached(desired_size) {
                    failures.record(
                        region,
                        format!(
                            "EKS nodegroup {} in {} is not scaled {}.",
                            nodegroup_name,
                            region,
                            directive.action.direction()
                        ),
                    );
                }
            }
        }
        Ok(())
    }
    .await;

    if let Err(error) = outcome {
        error!("Error checking infrastructure state in region {}: {}", region, error);
        failures.record(region, format!("State check error in {}: {}", region, error));
    }
}
