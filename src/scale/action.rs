use crate::scale::config::Config;

/// Direction of a scaling run. The stop and start handlers differ only in
/// which direction they hand to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleAction {
    Down,
    Up,
}

impl ScaleAction {
    pub fn actionable_instance_state(self) -> &'static str {
        match self {
            ScaleAction::Down => "running",
            ScaleAction::Up => "stopped",
        }
    }

    pub fn target_instance_state(self) -> &'static str {
        match self {
            ScaleAction::Down => "stopped",
            ScaleAction::Up => "running",
        }
    }

    pub fn actionable_db_status(self) -> &'static str {
        match self {
            ScaleAction::Down => "available",
            ScaleAction::Up => "stopped",
        }
    }

    pub fn target_db_status(self) -> &'static str {
        match self {
            ScaleAction::Down => "stopped",
            ScaleAction::Up => "available",
        }
    }

    /// Whether an observed node-group desired size counts as reached. The
    /// scale-up side accepts any positive size, not only the configured
    /// target.
    pub fn desired_size_reached(self, desired_size: i64) -> bool {
        match self {
            ScaleAction::Down => desired_size == 0,
            ScaleAction::Up => desired_size > 0,
        }
    }

    pub fn transition_gerund(self) -> &'static str {
        match self {
            ScaleAction::Down => "stopping",
            ScaleAction::Up => "starting",
        }
    }

    pub fn transition_past(self) -> &'static str {
        match self {
            ScaleAction::Down => "Stopped",
            ScaleAction::Up => "Started",
        }
    }

    pub fn verb_past(self) -> &'static str {
        match self {
            ScaleAction::Down => "stopped",
            ScaleAction::Up => "started",
        }
    }

    pub fn direction(self) -> &'static str {
        match self {
            ScaleAction::Down => "down",
            ScaleAction::Up => "up",
        }
    }

    pub fn email_subject(self) -> &'static str {
        match self {
            ScaleAction::Down => "Infrastructure Scaling Failure",
            ScaleAction::Up => "Infrastructure Start Failure",
        }
    }

    pub fn email_intro(self) -> &'static str {
        match self {
            ScaleAction::Down => "failed to stop or scale down",
            ScaleAction::Up => "failed to start or scale up",
        }
    }
}

/// Selects which resources a run touches and the end-state they must reach.
#[derive(Debug, Clone)]
pub struct TargetDirective {
    pub tag_key: String,
    pub tag_value: String,
    pub action: ScaleAction,
    pub desired_size: i64,
}

impl TargetDirective {
    pub fn new(config: &Config, action: ScaleAction) -> Self {
        TargetDirective {
            tag_key: config.tag_key.clone(),
            tag_value: config.tag_value.clone(),
            action,
            desired_size: match action {
                ScaleAction::Down => 0,
                ScaleAction::Up => config.scale_up_desired_size,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::scale::action::{ScaleAction, TargetDirective};
    use crate::scale::config::Config;

    #[test]
    fn test_down_states() {
        let action = ScaleAction::Down;
        assert_eq!(action.actionable_instance_state(), "running");
        assert_eq!(action.target_instance_state(), "stopped");
        assert_eq!(action.actionable_db_status(), "available");
        assert_eq!(action.target_db_status(), "stopped");
        assert_eq!(action.email_subject(), "Infrastructure Scaling Failure");
    }

    #[test]
    fn test_up_states() {
        let action = ScaleAction::Up;
        assert_eq!(action.actionable_instance_state(), "stopped");
        assert_eq!(action.target_instance_state(), "running");
        assert_eq!(action.actionable_db_status(), "stopped");
        assert_eq!(action.target_db_status(), "available");
        assert_eq!(action.email_subject(), "Infrastructure Start Failure");
    }

    #[test]
    fn test_desired_size_reached_down() {
        assert!(ScaleAction::Down.desired_size_reached(0));
        assert!(!ScaleAction::Down.desired_size_reached(3));
    }

    #[test]
    fn test_desired_size_reached_up_accepts_any_positive_size() {
        assert!(ScaleAction::Up.desired_size_reached(3));
        assert!(ScaleAction::Up.desired_size_reached(1));
        assert!(!ScaleAction::Up.desired_size_reached(0));
    }

    #[test]
    fn test_directive_desired_size_follows_action() {
        let config = Config::default();
        let down = TargetDirective::new(&config, ScaleAction::Down);
        assert_eq!(down.desired_size, 0);
        let up = TargetDirective::new(&config, ScaleAction::Up);
        assert_eq!(up.desired_size, config.scale_up_desired_size);
    }
}
