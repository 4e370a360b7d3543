use pomodoro_widget::{Config, JsonFileStore, JsonLinesHost, WidgetPresenter};
use std::io;
use tracing::info;
use types::RefreshEvent;
use widget_app::ContextProvider;

type Error = Box<dyn std::error::Error + Send + Sync>;

struct AppContext {
    presenter: WidgetPresenter<JsonFileStore, JsonLinesHost<io::Stdout>>,
}

impl ContextProvider<Config> for AppContext {
    fn new(config: Config) -> Self {
        Self {
            presenter: WidgetPresenter::with_package_name(
                JsonFileStore::new(config.widget_data_path),
                JsonLinesHost::new(io::stdout()),
                config.package_name,
            ),
        }
    }
}

fn main() -> Result<(), Error> {
    let context = widget_app::create_app_context::<AppContext, Config>()?;

    let event: RefreshEvent = serde_json::from_reader(io::stdin().lock())?;

    let summary = context.presenter.on_refresh(&event.widget_ids);

    info!(
        instances_processed = summary.instances_processed,
        instances_updated = summary.instances_updated,
        "Refresh complete"
    );

    Ok(())
}
