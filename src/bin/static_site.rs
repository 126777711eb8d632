use petstore::{
    configuration,
    static_site::StaticSite,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_subscriber(get_subscriber());

    let settings = configuration::get_configuration().expect("config fetched");

    let site = StaticSite::build(settings.static_site).await?;
    site.run_until_stopped().await?;
    Ok(())
}
