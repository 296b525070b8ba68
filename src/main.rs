use session_logout::{
    configuration::Settings,
    logout_handler::LogoutHandler,
    navigation::Location,
    session_client::SessionClient,
    telemetry::{get_subscriber, init_subscriber},
};

#[actix_web::main]
async fn main() -> anyhow::Result<()>{
    let subscriber = get_subscriber("session-logout".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let settings = Settings::get()?;
    let endpoints = settings.application.endpoints()?;

    let session_client = SessionClient::new(endpoints.logout, &settings.session)?;
    let location = Location::new(settings.application.base_url.clone());
    let handler = LogoutHandler::new(session_client, location, endpoints.login);

    handler.logout().await;

    tracing::info!(
        location = %handler.navigator().href(),
        navigated = !handler.navigator().visits().is_empty(),
        "Logout flow finished"
    );
    Ok(())
}
