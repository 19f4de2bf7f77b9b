use std::path::PathBuf;
use std::sync::Arc;

use iced::keyboard;
use iced::widget::{column, scrollable};
use iced::{Element, Subscription, Task, Theme};

mod config;
mod error;
mod logging;
mod markup;
mod media;
mod source;
mod state;
mod ui;

use config::{Config, ThemeChoice};
use error::GalleryError;
use media::cache::ImageCache;
use media::CardImage;
use source::{RecordPage, RecordSource, StaticSource};
use state::controller::{Effect, GalleryController, Intent};

/// Main application state
struct MemeGallery {
    /// Records, view state, modal and load phase
    controller: GalleryController,
    /// Where records come from
    source: Arc<dyn RecordSource>,
    /// Shared client for image downloads
    http: reqwest::Client,
    config: Config,
    /// Search box contents (applied on submit)
    query_input: String,
    /// Decoded card images by record ID
    images: ImageCache,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// A gallery intent (search, sort, paging, modal)
    Gallery(Intent),
    /// The search box was edited
    QueryChanged(String),
    /// Search button pressed or Enter in the search box
    SubmitSearch,
    /// User asked to reload the records
    Reload,
    /// A record load finished
    RecordsLoaded(u64, Result<RecordPage, Arc<GalleryError>>),
    /// A card image finished loading (or was replaced by the placeholder);
    /// tagged with the image cache generation it was requested under
    ImageLoaded(u64, u64, CardImage),
    /// User clicked "Export HTML"
    ExportPage,
    /// Background export finished
    ExportFinished(Result<PathBuf, Arc<GalleryError>>),
}

impl MemeGallery {
    /// Create a new instance of the application and start the initial load
    fn new(config: Config) -> (Self, Task<Message>) {
        let source = source::from_config(&config).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "record endpoint unusable, falling back to bundled catalog");
            Arc::new(StaticSource::bundled())
        });
        tracing::info!(source = source.name(), "meme gallery starting");

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .unwrap_or_default();

        let mut gallery = MemeGallery {
            controller: GalleryController::new(),
            source,
            http,
            config,
            query_input: String::new(),
            images: ImageCache::default(),
            status: String::new(),
        };
        let task = gallery.start_load();
        (gallery, task)
    }

    /// Kick off a record load; any load still in flight is cancelled
    fn start_load(&mut self) -> Task<Message> {
        let ticket = self.controller.begin_load();
        let id = ticket.id;
        let cancel = ticket.cancel;
        let source = Arc::clone(&self.source);
        let query = self.controller.load_query();

        Task::perform(
            async move {
                tokio::select! {
                    _ = cancel.cancelled() => Err(GalleryError::Cancelled),
                    result = source.fetch(&query) => result,
                }
            },
            move |result| Message::RecordsLoaded(id, result.map_err(Arc::new)),
        )
    }

    /// Fetch images for the current page and the open modal that have none yet
    fn request_images(&mut self) -> Task<Message> {
        let mut wanted = self.controller.view().records;
        if let Some(open) = self.controller.modal().record() {
            // Prefer the freshly loaded copy in case its URL changed
            let current = self.controller.records().iter().find(|r| r.id == open.id);
            wanted.push(current.unwrap_or(open).clone());
        }

        let mut tasks = Vec::new();
        for record in wanted {
            let Some(generation) = self.images.claim(record.id) else {
                continue;
            };
            let id = record.id;
            tasks.push(Task::perform(
                media::fetch::load_card_image(self.http.clone(), record),
                move |image| Message::ImageLoaded(generation, id, image),
            ));
        }
        Task::batch(tasks)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(intent) => {
                let scroll = match self.controller.dispatch(intent) {
                    Effect::ScrollToTop => scrollable::scroll_to(
                        ui::grid::grid_scroll_id(),
                        scrollable::AbsoluteOffset { x: 0.0, y: 0.0 },
                    ),
                    Effect::None => Task::none(),
                };
                Task::batch([scroll, self.request_images()])
            }
            Message::QueryChanged(query) => {
                self.query_input = query;
                Task::none()
            }
            Message::SubmitSearch => {
                let query = self.query_input.clone();
                self.update(Message::Gallery(Intent::Search(query)))
            }
            Message::Reload => self.start_load(),
            Message::RecordsLoaded(id, result) => {
                let succeeded = result.is_ok();
                if !self.controller.finish_load(id, result) {
                    return Task::none();
                }
                if succeeded {
                    // Records may point at different images now
                    self.images.reset();
                    self.status = format!("{} memes loaded.", self.controller.records().len());
                }
                self.request_images()
            }
            Message::ImageLoaded(generation, id, image) => {
                self.images.store(generation, id, image);
                Task::none()
            }
            Message::ExportPage => {
                // Show the native save dialog
                let target = rfd::FileDialog::new()
                    .set_title("Export page as HTML")
                    .set_file_name("memes.html")
                    .add_filter("HTML", &["html"])
                    .save_file();

                let Some(path) = target else {
                    return Task::none();
                };

                let html = markup::render_page(
                    &self.controller.view(),
                    &self.controller.view_state().search_term,
                );
                self.status = format!("Exporting to {}...", path.display());
                Task::perform(
                    async move { markup::write_page(path, html).await.map_err(Arc::new) },
                    Message::ExportFinished,
                )
            }
            Message::ExportFinished(result) => {
                self.status = match result {
                    Ok(path) => {
                        tracing::info!(path = %path.display(), "page exported");
                        format!("Exported page to {}.", path.display())
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "export failed");
                        format!("Export failed: {e}")
                    }
                };
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page = self.controller.view();
        let loading = self.controller.is_loading();

        let body: Element<Message> = if page.is_empty() && !loading {
            ui::no_results()
        } else {
            ui::grid::grid(&page, &self.images)
        };

        let mut content = column![
            ui::toolbar::toolbar(
                &self.query_input,
                self.controller.view_state().sort_order,
                loading
            ),
            ui::status_line(loading, self.controller.error_message(), &self.status),
            body,
        ]
        .spacing(16)
        .padding(24);

        if page.show_pagination() {
            content = content.push(ui::pagination::pagination_bar(&page));
        }

        let modal = self.controller.modal();
        match modal.record() {
            Some(record) => ui::modal::with_modal(
                content.into(),
                record,
                self.images.get(record.id),
                &self.config.date_format,
                modal.suppresses_background_scroll(),
            ),
            None => content.into(),
        }
    }

    /// Escape closes the modal while it is open
    fn subscription(&self) -> Subscription<Message> {
        if !self.controller.modal().is_open() {
            return Subscription::none();
        }
        keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                Some(Message::Gallery(Intent::CloseModal))
            }
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        match self.config.theme {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

fn main() -> iced::Result {
    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init_tracing(&config);
    if let Err(e) = loaded {
        tracing::warn!(error = %e, "ignoring unreadable config file, using defaults");
    }

    iced::application("AI Memes", MemeGallery::update, MemeGallery::view)
        .theme(MemeGallery::theme)
        .subscription(MemeGallery::subscription)
        .window_size((1280.0, 860.0))
        .centered()
        .run_with(move || MemeGallery::new(config))
}
