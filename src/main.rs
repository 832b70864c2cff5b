use adminportal::config::PortalConfig;
use adminportal::logging;
use adminportal::state::labels;
use adminportal::ui::app::App;

fn main() {
    let config = PortalConfig::from_env();
    logging::init(&config.log_filter);
    tracing::info!(plans_file = ?config.plans_file, "starting admin portal");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title(labels::tr("app.title"))
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 800.0)),
            ),
        )
        .with_context(config)
        .launch(App);
}
