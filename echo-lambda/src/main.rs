use lambda_http::{service_fn, Error};
use echo_lambda::router::handle_lambda;
use echo_shared::utilities::config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    std::panic::set_hook(Box::new(|info| {
        log::error!("Application panicked: {}", info);
    }));

    config::init();
    let app_config = config::app_config();
    log::info!("Starting echo-lambda with ENV={:?}", app_config.env);

    lambda_http::run(service_fn(handle_lambda)).await?;
    Ok(())
}
