use crate::scale::action::{ScaleAction, TargetDirective};
use crate::scale::actuator::{actuate_databases, actuate_instances, actuate_nodegroups};
use crate::scale::config::Config;
use crate::scale::ec2_instance_client::{Ec2InstanceClient, ManageInstances};
use crate::scale::eks_cluster_client::{EksClusterClient, ManageNodeGroups};
use crate::scale::failure::FailureRecord;
use crate::scale::rds_instance_client::{ManageDatabases, RdsInstanceClient};
use crate::scale::reporter::report_failures;
use crate::scale::ses_notifier_client::SesNotifierClient;
use crate::scale::verifier::{verify_databases, verify_instances, verify_nodegroups};

pub async fn actuate_region<E, R, K>(
    ec2: &E,
    rds: &R,
    eks: &K,
    directive: &TargetDirective,
    region: &str,
    failures: &mut FailureRecord,
) where
    E: ManageInstances + Sync,
    R: ManageDatabases + Sync,
    K: ManageNodeGroups + Sync,
{
    actuate_instances(ec2, directive, region, failures).await;
    actuate_databases(rds, directive, region, failures).await;
    actuate_nodegroups(eks, directive, region, failures).await;
}

pub async fn verify_region<E, R, K>(
    ec2: &E,
    rds: &R,
    eks: &K,
    directive: &TargetDirective,
    region: &str,
    failures: &mut FailureRecord,
) where
    E: ManageInstances + Sync,
    R: ManageDatabases + Sync,
    K: ManageNodeGroups + Sync,
{
    verify_instances(ec2, directive, region, failures).await;
    verify_databases(rds, directive, region, failures).await;
    verify_nodegroups(eks, directive, region, failures).await;
}

pub struct Controller {
    config: Config,
    directive: TargetDirective,
}

impl Controller {
    pub fn new(config: Config, action: ScaleAction) -> Self {
        let directive = TargetDirective::new(&config, action);
        Controller { config, directive }
    }

    /// Actuate every region, then verify every region, then report once.
    /// Every provider call returns a Result that is contained where it
    /// happens, so the verify and report steps always run.
    pub async fn run(&self) {
        let mut failures = FailureRecord::new();

        for region in &self.config.regions {
            let ec2 = Ec2InstanceClient::new(region.clone());
            let rds = RdsInstanceClient::new(region.clone());
            let eks = EksClusterClient::new(region.clone());
            actuate_region(&ec2, &rds, &eks, &self.directive, region.name(), &mut failures).await;
        }

        for region in &self.config.regions {
            let ec2 = Ec2InstanceClient::new(region.clone());
            let rds = RdsInstanceClient::new(region.clone());
            let eks = EksClusterClient::new(region.clone());
            verify_region(&ec2, &rds, &eks, &self.directive, region.name(), &mut failures).await;
        }

        let notifier = SesNotifierClient::new(
            self.config.ses_region.clone(),
            self.config.notification_email.clone(),
        );
        report_failures(&notifier, &self.directive, &failures).await;
    }
}
