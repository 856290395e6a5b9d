use log::{error, info};

use crate::scale::action::TargetDirective;
use crate::scale::failure::FailureRecord;
use crate::scale::ses_notifier_client::Notify;

/// Sends one notification summarizing every recorded failure. Does nothing
/// when the record is empty; a send error is logged, never propagated.
pub async fn report_failures<N: Notify + Sync>(
    notifier: &N,
    directive: &TargetDirective,
    failures: &FailureRecord,
) {
    if failures.is_empty() {
        return;
    }
    let body = format!(
        "The following resources {}:\n{}",
        directive.action.email_intro(),
        failures.lines().join("\n")
    );
    match notifier
        .send_failure_email(directive.action.email_subject(), &body)
        .await
    {
        Ok(()) => info!("Sent failure email."),
        Err(error) => error!("Error sending failure email: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use crate::scale::action::{ScaleAction, TargetDirective};
    use crate::scale::config::Config;
    use crate::scale::failure::FailureRecord;
    use crate::scale::fakes::FakeNotifier;
    use crate::scale::reporter::report_failures;

    fn directive(action: ScaleAction) -> TargetDirective {
        TargetDirective::new(&Config::default(), action)
    }

    #[tokio::test]
    async fn test_no_email_when_record_is_empty() {
        let notifier = FakeNotifier::default();
        let failures = FailureRecord::new();

        report_failures(&notifier, &directive(ScaleAction::Down), &failures).await;

        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_one_email_with_all_lines() {
        let notifier = FakeNotifier::default();
        let mut failures = FailureRecord::new();
        failures.record("us-east-1", "EC2 in us-east-1: boom");
        failures.record("us-east-1", "EC2 instance i-1 in us-east-1 is not stopped.");

        report_failures(&notifier, &directive(ScaleAction::Down), &failures).await;

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (subject, body) = &sent[0];
        assert_eq!(subject, "Infrastructure Scaling Failure");
        assert!(body.starts_with("The following resources failed to stop or scale down:\n"));
        assert!(body.contains("EC2 in us-east-1: boom"));
        assert!(body.contains("EC2 instance i-1 in us-east-1 is not stopped."));
    }

    #[tokio::test]
    async fn test_send_error_is_contained() {
        let mut notifier = FakeNotifier::default();
        notifier.fail_send = true;
        let mut failures = FailureRecord::new();
        failures.record("us-east-1", "EC2 in us-east-1: boom");

        report_failures(&notifier, &directive(ScaleAction::Up), &failures).await;

        assert!(notifier.sent.lock().unwrap().is_empty());
    }
}
