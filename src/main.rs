use gui::App;
use iced::{Application, Settings};
use travelmood_core::{AppConfig, CoreError};

#[tokio::main]
async fn main() -> Result<(), CoreError> {
    let config = AppConfig::load_or_default(std::path::Path::new("travelmood.toml"));

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.clone())
        .init();

    tracing::info!("Starting Travelmood - Travel Sentiment Monitor");

    let settings = Settings {
        window: iced::window::Settings {
            size: iced::Size::new(config.window_width, config.window_height),
            min_size: Some(iced::Size::new(
                config.min_window_width,
                config.min_window_height,
            )),
            ..Default::default()
        },
        ..Default::default()
    };

    TravelmoodApp::run(settings).map_err(|e| {
        tracing::error!("Application error: {}", e);
        CoreError::Internal {
            message: format!("GUI error: {e}"),
        }
    })
}

struct TravelmoodApp {
    app: App,
}

impl Application for TravelmoodApp {
    type Message = gui::Message;
    type Theme = iced::Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: Self::Flags) -> (Self, iced::Command<Self::Message>) {
        tracing::info!("Initializing session state");
        (Self { app: App::new() }, iced::Command::none())
    }

    fn title(&self) -> String {
        "Travelmood - Travel Sentiment Monitor".to_string()
    }

    fn update(&mut self, message: Self::Message) -> iced::Command<Self::Message> {
        if let Err(e) = self.app.update(message) {
            tracing::error!("Update error: {}", e);
        }
        iced::Command::none()
    }

    fn view(&self) -> iced::Element<Self::Message> {
        self.app.view()
    }
}
