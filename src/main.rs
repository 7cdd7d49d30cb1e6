use storefront_dashboard::{configuration::get_configuration, telemetry, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_subscriber(telemetry::get_subscriber(
        "storefront_dashboard".to_string(),
        std::io::stdout,
    ))?;

    let configuration = get_configuration()?;
    let app = App::build(configuration).await?;
    app.run_until_stopped().await?;

    Ok(())
}
