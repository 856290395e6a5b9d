use log::warn;
use rusoto_core::Region;
use std::env;
use std::str::FromStr;

const DEFAULT_REGIONS: &str = "us-east-1,us-west-2";
const DEFAULT_TAG_KEY: &str = "Autorestart";
const DEFAULT_TAG_VALUE: &str = "true";
const DEFAULT_NOTIFICATION_EMAIL: &str = "ops@example.com";
const DEFAULT_SCALE_UP_DESIRED_SIZE: i64 = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub regions: Vec<Region>,
    pub tag_key: String,
    pub tag_value: String,
    pub notification_email: String,
    pub scale_up_desired_size: i64,
    pub ses_region: Region,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            regions: parse_regions(DEFAULT_REGIONS),
            tag_key: DEFAULT_TAG_KEY.to_string(),
            tag_value: DEFAULT_TAG_VALUE.to_string(),
            notification_email: DEFAULT_NOTIFICATION_EMAIL.to_string(),
            scale_up_desired_size: DEFAULT_SCALE_UP_DESIRED_SIZE,
            ses_region: Region::UsEast1,
        }
    }
}

impl Config {
    /// Compiled-in defaults, each overridable through the environment. Never
    /// fails: malformed values fall back to the defaults so a handler always
    /// has a usable configuration.
    pub fn from_env() -> Self {
        let regions = parse_regions(
            &env::var("SCALE_REGIONS").unwrap_or_else(|_| DEFAULT_REGIONS.to_string()),
        );
        let scale_up_desired_size = env::var("SCALE_UP_DESIRED_SIZE")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_SCALE_UP_DESIRED_SIZE);
        let ses_region = env::var("SES_REGION")
            .ok()
            .and_then(|raw| Region::from_str(&raw).ok())
            .unwrap_or(Region::UsEast1);
        Config {
            regions,
            tag_key: env::var("SCALE_TAG_KEY").unwrap_or_else(|_| DEFAULT_TAG_KEY.to_string()),
            tag_value: env::var("SCALE_TAG_VALUE")
                .unwrap_or_else(|_| DEFAULT_TAG_VALUE.to_string()),
            notification_email: env::var("NOTIFICATION_EMAIL")
                .unwrap_or_else(|_| DEFAULT_NOTIFICATION_EMAIL.to_string()),
            scale_up_desired_size,
            ses_region,
        }
    }
}

fn parse_regions(raw: &str) -> Vec<Region> {
    let mut regions = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
        match Region::from_str(entry) {
            Ok(region) => regions.push(region),
            Err(error) => warn!("Ignoring unknown region {}: {}", entry, error),
        }
    }
    if regions.is_empty() {
        regions = parse_regions(DEFAULT_REGIONS);
    }
    regions
}

#[cfg(test)]
mod tests {
    use crate::scale::config::parse_regions;
    use rusoto_core::Region;

    #[test]
    fn test_parse_regions() {
        assert_eq!(
            parse_regions("us-east-1, eu-west-1"),
            vec![Region::UsEast1, Region::EuWest1]
        );
    }

    #[test]
    fn test_parse_regions_skips_unknown_entries() {
        assert_eq!(parse_regions("us-east-1,narnia-north-1"), vec![Region::UsEast1]);
    }

    #[test]
    fn test_parse_regions_falls_back_to_defaults() {
        assert_eq!(parse_regions(""), vec![Region::UsEast1, Region::UsWest2]);
    }
}
