//! Wiring and run loops
//!
//! Builds the controller from configuration and drives the splash and home
//! screens from stdin. Lookups run on spawned tasks and report back through a
//! channel so typing never waits on the network.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use application::{
    ApplicationError, HomeController, HomeScreen, LocationFix, Navigator, NoticePort,
    RideCatalogView, Screen, SearchOutcome, SearchUpdate, SplashConfig, SplashScreen, SplashStep,
    SuggestionService,
};
use domain::entities::RideCatalog;
use infrastructure::{AppConfig, ConfiguredLocationAdapter, NominatimGeocodingAdapter};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::notices::TerminalNotices;
use crate::render;
use crate::shell::{HELP, ShellCommand};

/// Animation frame length
pub const FRAME: Duration = Duration::from_millis(16);

/// Something that finished in the background
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Search(SearchUpdate),
    Located(LocationFix),
}

/// What the loop should do after a line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Render,
    Message(String),
    Nothing,
    Quit,
}

/// Suggestion service over Nominatim
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` for an invalid geocoding section.
pub fn build_suggestion_service(config: &AppConfig) -> Result<SuggestionService, ApplicationError> {
    let adapter = NominatimGeocodingAdapter::from_config(&config.geocoding.to_nominatim_config())?;
    Ok(SuggestionService::new(Arc::new(adapter))
        .with_config(config.geocoding.to_suggestion_config()))
}

/// Home controller with all adapters attached
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` for an invalid geocoding section.
pub fn build_controller(
    config: &AppConfig,
    notices: Arc<dyn NoticePort>,
) -> Result<HomeController, ApplicationError> {
    let search = Arc::new(build_suggestion_service(config)?);
    let device = Arc::new(ConfiguredLocationAdapter::from_config(&config.location));
    let screen = HomeScreen::new(
        config.geocoding.min_query_len,
        config.menu.build_panel(),
        RideCatalogView::new(RideCatalog::standard()),
    );

    Ok(HomeController::new(screen, search, device, notices).with_settings(
        config
            .location
            .to_home_settings(config.geocoding.label_device_location),
    ))
}

/// Hand a background result to the event loop if it is still listening
fn deliver(events: &mpsc::UnboundedSender<UiEvent>, event: UiEvent) {
    if let Err(mpsc::error::SendError(event)) = events.send(event) {
        debug!(?event, "Event loop gone, dropping background result");
    }
}

/// Home screen session: turns shell lines into controller calls
#[derive(Debug)]
pub struct Session {
    controller: HomeController,
    notices: Arc<TerminalNotices>,
    events: mpsc::UnboundedSender<UiEvent>,
}

impl Session {
    #[must_use]
    pub fn new(
        controller: HomeController,
        notices: Arc<TerminalNotices>,
    ) -> (Self, mpsc::UnboundedReceiver<UiEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        (
            Self {
                controller,
                notices,
                events,
            },
            rx,
        )
    }

    #[must_use]
    pub const fn controller(&self) -> &HomeController {
        &self.controller
    }

    /// Locate the device in the background
    pub fn spawn_mount(&self) {
        let controller = self.controller.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let fix = controller.mount().await;
            deliver(&events, UiEvent::Located(fix));
        });
    }

    /// Handle one input line; a pending alert swallows it
    pub fn handle_line(&self, line: &str) -> Flow {
        if self.notices.dismiss().is_some() {
            return Flow::Render;
        }
        match line.parse::<ShellCommand>() {
            Ok(command) => self.handle(command),
            Err(e) => Flow::Message(e.to_string()),
        }
    }

    pub fn handle(&self, command: ShellCommand) -> Flow {
        match command {
            ShellCommand::Type { kind, text } => {
                if let Some(ticket) = self.controller.begin_edit(kind, &text) {
                    let controller = self.controller.clone();
                    let events = self.events.clone();
                    tokio::spawn(async move {
                        let update = controller.complete_search(ticket).await;
                        deliver(&events, UiEvent::Search(update));
                    });
                }
                Flow::Render
            },
            ShellCommand::Select { index, kind } => {
                match self.controller.select_suggestion(index, kind) {
                    Ok(_) => Flow::Render,
                    Err(e) => Flow::Message(format!("⚠️  {e}")),
                }
            },
            ShellCommand::ToggleMenu => {
                self.controller.toggle_menu();
                Flow::Render
            },
            ShellCommand::CloseMenu => {
                self.controller.close_menu();
                Flow::Render
            },
            ShellCommand::ToggleRides => {
                self.controller.toggle_rides();
                Flow::Render
            },
            ShellCommand::SelectRide(id) => match self.controller.select_ride(&id) {
                Ok(_) => Flow::Render,
                Err(e) => Flow::Message(format!("⚠️  {e}")),
            },
            ShellCommand::Confirm => match self.controller.confirm_ride() {
                Ok(()) => Flow::Nothing,
                Err(e) => Flow::Message(format!("⚠️  {e}")),
            },
            ShellCommand::Back => {
                self.controller.back_to_rides();
                Flow::Render
            },
            ShellCommand::Show => Flow::Render,
            ShellCommand::Help => Flow::Message(HELP.to_string()),
            ShellCommand::Quit => Flow::Quit,
        }
    }

    /// Whether a background event changes what is on screen
    #[must_use]
    pub fn needs_redraw(event: &UiEvent) -> bool {
        !matches!(event, UiEvent::Search(SearchUpdate::Stale))
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.controller.snapshot(render::home)
    }
}

/// Play the splash until it asks to navigate
pub async fn run_splash(config: &SplashConfig) -> std::io::Result<()> {
    let mut splash = SplashScreen::new(config);
    let mut ticker = tokio::time::interval(FRAME);
    let mut stdout = std::io::stdout();

    loop {
        ticker.tick().await;
        match splash.tick(FRAME) {
            SplashStep::Showing { scale } => {
                print!("\r{}", render::splash_frame(scale, splash.logo()));
                stdout.flush()?;
            },
            SplashStep::Navigate => {
                println!();
                return Ok(());
            },
        }
    }
}

/// Splash, then the interactive home screen until `quit` or end of input
pub async fn run_app(config: &AppConfig) -> anyhow::Result<()> {
    let mut navigator = Navigator::default();
    run_splash(&config.splash).await?;
    navigator.replace(Screen::Home);
    info!(screen = navigator.current().title(), "Navigated");

    let notices = Arc::new(TerminalNotices::new());
    let controller = build_controller(config, notices.clone())?;
    let (session, mut events) = Session::new(controller, notices);

    println!("{}", session.render());
    println!("Type 'help' for commands.");
    session.spawn_mount();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(FRAME);

    loop {
        let sliding = session.controller().snapshot(|s| s.menu().is_sliding());

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match session.handle_line(&line) {
                    Flow::Render => println!("{}", session.render()),
                    Flow::Message(text) => println!("{text}"),
                    Flow::Nothing => {},
                    Flow::Quit => break,
                }
            },
            Some(event) = events.recv() => {
                debug!(?event, "Background event");
                if Session::needs_redraw(&event) {
                    println!("{}", session.render());
                }
            },
            _ = ticker.tick(), if sliding => {
                session.controller().tick(FRAME);
                if !session.controller().snapshot(|s| s.menu().is_sliding()) {
                    println!("{}", session.render());
                }
            },
        }
    }

    Ok(())
}

/// One-shot suggestion lookup
pub async fn run_search(
    config: &AppConfig,
    query: &str,
    limit: Option<u8>,
    json: bool,
) -> anyhow::Result<()> {
    let mut search_config = config.geocoding.to_suggestion_config();
    if let Some(limit) = limit {
        anyhow::ensure!(
            (1..=10).contains(&limit),
            "--limit must be between 1 and 10"
        );
        search_config.max_results = limit;
    }

    let service = build_suggestion_service(config)?.with_config(search_config);
    if !service.qualifies(query) {
        println!(
            "Type at least {} characters to search.",
            service.config().min_query_len
        );
        return Ok(());
    }

    match service.fetch(query).await {
        SearchOutcome::Suggestions(list) if json => {
            println!("{}", serde_json::to_string_pretty(&list)?);
        },
        SearchOutcome::Suggestions(list) if list.is_empty() => println!("No matches."),
        SearchOutcome::Suggestions(list) => print!("{}", render::suggestion_list(&list)),
        SearchOutcome::Unavailable(reason) => {
            anyhow::bail!("No suggestions available: {reason}")
        },
    }
    Ok(())
}

/// Print the ride catalog
pub fn run_rides(json: bool) -> anyhow::Result<()> {
    let catalog = RideCatalog::standard();
    if json {
        println!("{}", serde_json::to_string_pretty(catalog.offers())?);
    } else {
        print!("{}", render::ride_table(catalog.offers()));
    }
    Ok(())
}
