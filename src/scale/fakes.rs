use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::scale::action::TargetDirective;
use crate::scale::ec2_instance_client::{Ec2Instance, ManageInstances};
use crate::scale::eks_cluster_client::ManageNodeGroups;
use crate::scale::error::ScaleError;
use crate::scale::rds_instance_client::{DbInstance, ManageDatabases};
use crate::scale::ses_notifier_client::Notify;

// In-memory stand-ins for the provider clients. They model only tagged
// resources, since the real listings are already tag-filtered.

#[derive(Default)]
pub(crate) struct FakeEc2 {
    pub instances: Mutex<Vec<Ec2Instance>>,
    pub fail_list: bool,
    pub fail_transition: bool,
    pub transitions: Mutex<Vec<Vec<String>>>,
}

impl FakeEc2 {
    pub fn with_instances(instances: Vec<Ec2Instance>) -> Self {
        FakeEc2 {
            instances: Mutex::new(instances),
            ..FakeEc2::default()
        }
    }

    fn transition(&self, instance_ids: Vec<String>, state: &str) -> Result<(), ScaleError> {
        if self.fail_transition {
            return Err(ScaleError::NoneValue);
        }
        self.transitions.lock().unwrap().push(instance_ids.clone());
        for instance in self.instances.lock().unwrap().iter_mut() {
            if instance_ids.contains(&instance.instance_id) {
                instance.state = state.to_string();
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ManageInstances for FakeEc2 {
    async fn list_tagged_instances(
        &self,
        _directive: &TargetDirective,
    ) -> Result<Vec<Ec2Instance>, ScaleError> {
        if self.fail_list {
            return Err(ScaleError::NoneValue);
        }
        Ok(self.instances.lock().unwrap().clone())
    }

    async fn stop_instances(&self, instance_ids: Vec<String>) -> Result<(), ScaleError> {
        self.transition(instance_ids, "stopped")
    }

    async fn start_instances(&self, instance_ids: Vec<String>) -> Result<(), ScaleError> {
        self.transition(instance_ids, "running")
    }
}

#[derive(Default)]
pub(crate) struct FakeRds {
    pub databases: Mutex<Vec<DbInstance>>,
    pub fail_list: bool,
    pub fail_transition: bool,
}

impl FakeRds {
    pub fn with_databases(databases: Vec<DbInstance>) -> Self {
        FakeRds {
            databases: Mutex::new(databases),
            ..FakeRds::default()
        }
    }

    fn transition(&self, identifier: &str, status: &str) -> Result<(), ScaleError> {
        if self.fail_transition {
            return Err(ScaleError::NoneValue);
        }
        for database in self.databases.lock().unwrap().iter_mut() {
            if database.identifier == identifier {
                database.status = status.to_string();
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ManageDatabases for FakeRds {
    async fn list_tagged_databases(
        &self,
        _directive: &TargetDirective,
    ) -> Result<Vec<DbInstance>, ScaleError> {
        if self.fail_list {
            return Err(ScaleError::NoneValue);
        }
        Ok(self.databases.lock().unwrap().clone())
    }

    async fn stop_database(&self, identifier: &str) -> Result<(), ScaleError> {
        self.transition(identifier, "stopped")
    }

    async fn start_database(&self, identifier: &str) -> Result<(), ScaleError> {
        self.transition(identifier, "available")
    }
}

#[derive(Default)]
pub(crate) struct FakeEks {
    pub clusters: Vec<String>,
    pub nodegroups: HashMap<String, Vec<String>>,
    pub desired_sizes: Mutex<HashMap<(String, String), i64>>,
    pub fail_list: bool,
}

impl FakeEks {
    pub fn with_cluster(cluster_name: &str, nodegroup_names: Vec<&str>, desired_size: i64) -> Self {
        let mut desired_sizes = HashMap::new();
        for nodegroup_name in &nodegroup_names {
            desired_sizes.insert(
                (cluster_name.to_string(), nodegroup_name.to_string()),
                desired_size,
            );
        }
        let mut nodegroups = HashMap::new();
        nodegroups.insert(
            cluster_name.to_string(),
            nodegroup_names.iter().map(|name| name.to_string()).collect(),
        );
        FakeEks {
            clusters: vec![cluster_name.to_string()],
            nodegroups,
            desired_sizes: Mutex::new(desired_sizes),
            fail_list: false,
        }
    }

    pub fn desired_size(&self, cluster_name: &str, nodegroup_name: &str) -> i64 {
        self.desired_sizes.lock().unwrap()[&(cluster_name.to_string(), nodegroup_name.to_string())]
    }
}

#[async_trait]
impl ManageNodeGroups for FakeEks {
    async fn list_tagged_clusters(
        &self,
        _directive: &TargetDirective,
    ) -> Result<Vec<String>, ScaleError> {
        if self.fail_list {
            return Err(ScaleError::NoneValue);
        }
        Ok(self.clusters.clone())
    }

    async fn list_nodegroups(&self, cluster_name: &str) -> Result<Vec<String>, ScaleError> {
        Ok(self.nodegroups.get(cluster_name).cloned().unwrap_or_default())
    }

    async fn set_nodegroup_desired_size(
        &self,
        cluster_name: &str,
        nodegroup_name: &str,
        desired_size: i64,
    ) -> Result<(), ScaleError> {
        self.desired_sizes.lock().unwrap().insert(
            (cluster_name.to_string(), nodegroup_name.to_string()),
            desired_size,
        );
        Ok(())
    }

    async fn nodegroup_desired_size(
        &self,
        cluster_name: &str,
        nodegroup_name: &str,
    ) -> Result<i64, ScaleError> {
        self.desired_sizes
            .lock()
            .unwrap()
            .get(&(cluster_name.to_string(), nodegroup_name.to_string()))
            .copied()
            .ok_or(ScaleError::NoneValue)
    }
}

#[derive(Default)]
pub(crate) struct FakeNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail_send: bool,
}

#[async_trait]
impl Notify for FakeNotifier {
    async fn send_failure_email(&self, subject: &str, body: &str) -> Result<(), ScaleError> {
        if self.fail_send {
            return Err(ScaleError::NoneValue);
        }
        self.sent
            .lock()
            .unwrap()
            .push((subject.to_string(), body.to_string()));
        Ok(())
    }
}
