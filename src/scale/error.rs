use std::error::Error;

use rusoto_core::RusotoError;
use rusoto_ec2::{DescribeInstancesError, StartInstancesError, StopInstancesError};
use rusoto_eks::{
    DescribeClusterError, DescribeNodegroupError, ListClustersError, ListNodegroupsError,
    UpdateNodegroupConfigError,
};
use rusoto_rds::{
    DescribeDBInstancesError, ListTagsForResourceError, StartDBInstanceError, StopDBInstanceError,
};
use rusoto_ses::SendEmailError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum ScaleError {
    NoneValue,
    DescribeInstances(RusotoError<DescribeInstancesError>),
    StopInstances(RusotoError<StopInstancesError>),
    StartInstances(RusotoError<StartInstancesError>),
    DescribeDbInstances(RusotoError<DescribeDBInstancesError>),
    ListTags(RusotoError<ListTagsForResourceError>),
    StopDbInstance(RusotoError<StopDBInstanceError>),
    StartDbInstance(RusotoError<StartDBInstanceError>),
    ListClusters(RusotoError<ListClustersError>),
    DescribeCluster(RusotoError<DescribeClusterError>),
    ListNodegroups(RusotoError<ListNodegroupsError>),
    UpdateNodegroupConfig(RusotoError<UpdateNodegroupConfigError>),
    DescribeNodegroup(RusotoError<DescribeNodegroupError>),
    SendEmail(RusotoError<SendEmailError>),
}

impl Display for ScaleError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            ScaleError::NoneValue => write!(f, "Value is None"),
            ScaleError::DescribeInstances(ref error) => Display::fmt(error, f),
            ScaleError::StopInstances(ref error) => Display::fmt(error, f),
            ScaleError::StartInstances(ref error) => Display::fmt(error, f),
            ScaleError::DescribeDbInstances(ref error) => Display::fmt(error, f),
            ScaleError::ListTags(ref error) => Display::fmt(error, f),
            ScaleError::StopDbInstance(ref error) => Display::fmt(error, f),
            ScaleError::StartDbInstance(ref error) => Display::fmt(error, f),
            ScaleError::ListClusters(ref error) => Display::fmt(error, f),
            ScaleError::DescribeCluster(ref error) => Display::fmt(error, f),
            ScaleError::ListNodegroups(ref error) => Display::fmt(error, f),
            ScaleError::UpdateNodegroupConfig(ref error) => Display::fmt(error, f),
            ScaleError::DescribeNodegroup(ref error) => Display::fmt(error, f),
            ScaleError::SendEmail(ref error) => Display::fmt(error, f),
        }
    }
}

impl Error for ScaleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ScaleError::NoneValue => None,
            ScaleError::DescribeInstances(ref error) => Some(error),
            ScaleError::StopInstances(ref error) => Some(error),
            ScaleError::StartInstances(ref error) => Some(error),
            ScaleError::DescribeDbInstances(ref error) => Some(error),
            ScaleError::ListTags(ref error) => Some(error),
            ScaleError::StopDbInstance(ref error) => Some(error),
            ScaleError::StartDbInstance(ref error) => Some(error),
            ScaleError::ListClusters(ref error) => Some(error),
            ScaleError::DescribeCluster(ref error) => Some(error),
            ScaleError::ListNodegroups(ref error) => Some(error),
            ScaleError::UpdateNodegroupConfig(ref error) => Some(error),
            ScaleError::DescribeNodegroup(ref error) => Some(error),
            ScaleError::SendEmail(ref error) => Some(error),
        }
    }
}

impl From<RusotoError<DescribeInstancesError>> for ScaleError {
    fn from(e: RusotoError<DescribeInstancesError>) -> ScaleError {
        ScaleError::DescribeInstances(e)
    }
}

impl From<RusotoError<StopInstancesError>> for ScaleError {
    fn from(e: RusotoError<StopInstancesError>) -> ScaleError {
        ScaleError::StopInstances(e)
    }
}

impl From<RusotoError<StartInstancesError>> for ScaleError {
    fn from(e: RusotoError<StartInstancesError>) -> ScaleError {
        ScaleError::StartInstances(e)
    }
}

impl From<RusotoError<DescribeDBInstancesError>> for ScaleError {
    fn from(e: RusotoError<DescribeDBInstancesError>) -> ScaleError {
        ScaleError::DescribeDbInstances(e)
    }
}

impl From<RusotoError<ListTagsForResourceError>> for ScaleError {
    fn from(e: RusotoError<ListTagsForResourceError>) -> ScaleError {
        ScaleError::ListTags(e)
    }
}

impl From<RusotoError<StopDBInstanceError>> for ScaleError {
    fn from(e: RusotoError<StopDBInstanceError>) -> ScaleError {
        ScaleError::StopDbInstance(e)
    }
}

impl From<RusotoError<StartDBInstanceError>> for ScaleError {
    fn from(e: RusotoError<StartDBInstanceError>) -> ScaleError {
        ScaleError::StartDbInstance(e)
    }
}

impl From<RusotoError<ListClustersError>> for ScaleError {
    fn from(e: RusotoError<ListClustersError>) -> ScaleError {
        ScaleError::ListClusters(e)
    }
}

impl From<RusotoError<DescribeClusterError>> for ScaleError {
    fn from(e: RusotoError<DescribeClusterError>) -> ScaleError {
        ScaleError::DescribeCluster(e)
    }
}

impl From<RusotoError<ListNodegroupsError>> for ScaleError {
    fn from(e: RusotoError<ListNodegroupsError>) -> ScaleError {
        ScaleError::ListNodegroups(e)
    }
}

impl From<RusotoError<UpdateNodegroupConfigError>> for ScaleError {
    fn from(e: RusotoError<UpdateNodegroupConfigError>) -> ScaleError {
        ScaleError::UpdateNodegroupConfig(e)
    }
}

impl From<RusotoError<DescribeNodegroupError>> for ScaleError {
    fn from(e: RusotoError<DescribeNodegroupError>) -> ScaleError {
        ScaleError::DescribeNodegroup(e)
    }
}

impl From<RusotoError<SendEmailError>> for ScaleError {
    fn from(e: RusotoError<SendEmailError>) -> ScaleError {
        ScaleError::SendEmail(e)
    }
}
