use infra_automation::scale::action::ScaleAction;
use infra_automation::scale::config::Config;
use infra_automation::scale::controller::Controller;
use lambda_runtime::{handler_fn, Context, Error};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    lambda_runtime::run(handler_fn(scale_up_handler)).await?;
    Ok(())
}

async fn scale_up_handler(event: Value, _: Context) -> Result<Value, Error> {
    let controller = Controller::new(Config::from_env(), ScaleAction::Up);
    controller.run().await;
    Ok(event)
}
