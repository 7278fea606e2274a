use repclub_web::config::WebConfig;
use repclub_web::App;
use tracing::{info, warn};

fn main() {
    let (config, config_error) = WebConfig::load();
    dioxus::logger::init(config.log_level).expect("Failed to initialize logger");
    if let Some(e) = config_error {
        warn!("{e}; using {}", config.log_level);
    }
    info!("Starting storefront (log level {})", config.log_level);
    dioxus::launch(App);
}
