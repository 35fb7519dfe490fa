use std::sync::mpsc;

use crate::api::{FetchCommand, FetchOutcome, Product, ProductQuery};
use crate::config::Config;
use crate::ui::events::AppEvent;
use crate::ui::gallery::{GalleryIntent, GalleryReducer, GalleryState, SETTLE_DELAY};
use crate::ui::mvi::Reducer;
use crate::ui::settle::schedule_settle;

/// Which screen the body renders.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum View {
    Catalog,
    Gallery,
}

pub type FetchSender = tokio::sync::mpsc::Sender<FetchCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    view: View,
    size: Option<(u16, u16)>,
    /// Gallery carousel state (MVI pattern).
    gallery: GalleryState,
    /// Generation of the most recently armed settle timer. Bumped on
    /// arm and on cancel; a Settle event only counts if it matches.
    settle_generation: u64,
    event_tx: Option<mpsc::Sender<AppEvent>>,
    fetch_tx: Option<FetchSender>,
    products: Vec<Product>,
    selection: usize,
    categories: Vec<String>,
    /// Index into `categories`; None means no filter.
    category_index: Option<usize>,
    query: ProductQuery,
    /// Title of the product whose gallery is open.
    gallery_title: Option<String>,
    loading: bool,
    last_error: Option<String>,
    config: Config,
}

impl App {
    pub fn new(config: Config, query: ProductQuery) -> Self {
        Self {
            should_quit: false,
            view: View::Catalog,
            size: None,
            gallery: GalleryState::default(),
            settle_generation: 0,
            event_tx: None,
            fetch_tx: None,
            products: Vec::new(),
            selection: 0,
            categories: Vec::new(),
            category_index: None,
            query,
            gallery_title: None,
            loading: false,
            last_error: None,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn on_tick(&mut self) {}

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn set_event_sender(&mut self, sender: mpsc::Sender<AppEvent>) {
        self.event_tx = Some(sender);
    }

    pub fn set_fetch_sender(&mut self, sender: FetchSender) {
        self.fetch_tx = Some(sender);
    }

    // ========================================================================
    // Gallery (MVI pattern + settle timer)
    // ========================================================================

    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    pub fn gallery_title(&self) -> Option<&str> {
        self.gallery_title.as_deref()
    }

    pub fn settle_generation(&self) -> u64 {
        self.settle_generation
    }

    fn dispatch_gallery(&mut self, intent: GalleryIntent) {
        dispatch_mvi!(self, gallery, GalleryReducer, intent);
    }

    /// Advance to the next image. Dropped while a transition is in
    /// flight; the settle timer is armed only for accepted intents.
    pub fn gallery_advance(&mut self) {
        if !self.gallery_accepts_navigation() {
            return;
        }
        self.dispatch_gallery(GalleryIntent::Next);
        self.arm_settle();
    }

    /// Go back to the previous image. Same drop policy as advance.
    pub fn gallery_retreat(&mut self) {
        if !self.gallery_accepts_navigation() {
            return;
        }
        self.dispatch_gallery(GalleryIntent::Prev);
        self.arm_settle();
    }

    /// Jump straight to an image index (dot control).
    pub fn gallery_jump(&mut self, target: usize) {
        if !self.gallery_accepts_navigation() || target >= self.gallery.len() {
            return;
        }
        self.dispatch_gallery(GalleryIntent::JumpTo(target));
        self.arm_settle();
    }

    // Navigation is only offered where the controls are: with zero or
    // one item there is nothing to navigate between, so no settle
    // timer is armed either. The reducer stays safe regardless.
    fn gallery_accepts_navigation(&self) -> bool {
        !self.gallery.is_transitioning() && self.gallery.controls_visible()
    }

    /// Called when a settle event arrives from the timer. Stale
    /// generations (superseded, cancelled, or post-teardown timers)
    /// are discarded without touching state.
    pub fn on_settle(&mut self, generation: u64) {
        if generation != self.settle_generation {
            tracing::debug!(generation, current = self.settle_generation, "stale settle ignored");
            return;
        }
        self.dispatch_gallery(GalleryIntent::Settle);
    }

    fn arm_settle(&mut self) {
        self.settle_generation += 1;
        if let Some(tx) = &self.event_tx {
            schedule_settle(tx.clone(), self.settle_generation, SETTLE_DELAY);
        }
    }

    fn cancel_settle(&mut self) {
        self.settle_generation += 1;
    }

    /// Open the gallery for a product. Any pending settle timer from a
    /// previous gallery is cancelled before the new mount.
    pub fn open_gallery(&mut self, product: &Product) {
        self.cancel_settle();
        self.dispatch_gallery(GalleryIntent::Load {
            items: product.images.clone(),
        });
        self.gallery_title = Some(product.title.clone());
        self.view = View::Gallery;
    }

    /// Tear the gallery down and return to the catalog. Cancels the
    /// pending settle timer so a late fire cannot mutate state.
    pub fn close_gallery(&mut self) {
        self.cancel_settle();
        self.dispatch_gallery(GalleryIntent::Load { items: Vec::new() });
        self.gallery_title = None;
        self.view = View::Catalog;
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn query(&self) -> &ProductQuery {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Move the catalog selection, wrapping at both ends.
    pub fn move_selection(&mut self, direction: i32) {
        if self.products.is_empty() {
            self.selection = 0;
            return;
        }

        let len = self.products.len();
        let current = self.selection.min(len - 1);
        self.selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    /// Request the full record for the selected product; the gallery
    /// opens when the fetch completes.
    pub fn open_selected(&mut self) {
        let Some(product) = self.products.get(self.selection) else {
            return;
        };
        let id = product.id;
        self.send_fetch(FetchCommand::Product(id));
    }

    pub fn next_page(&mut self) {
        self.query.page += 1;
        self.selection = 0;
        self.request_products();
    }

    pub fn prev_page(&mut self) {
        if self.query.page <= 1 {
            return;
        }
        self.query.page -= 1;
        self.selection = 0;
        self.request_products();
    }

    /// Cycle the category filter: none → each category → none.
    pub fn cycle_category(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        self.category_index = match self.category_index {
            None => Some(0),
            Some(i) if i + 1 < self.categories.len() => Some(i + 1),
            Some(_) => None,
        };
        self.query.category = self
            .category_index
            .map(|i| self.categories[i].clone());
        self.query.page = 1;
        self.selection = 0;
        self.request_products();
    }

    pub fn active_category(&self) -> Option<&str> {
        self.query.category.as_deref()
    }

    pub fn request_products(&mut self) {
        let query = self.query.clone();
        self.send_fetch(FetchCommand::Products(query));
    }

    pub fn request_categories(&mut self) {
        self.send_fetch(FetchCommand::Categories);
    }

    fn send_fetch(&mut self, command: FetchCommand) {
        let Some(tx) = &self.fetch_tx else {
            return;
        };
        match tx.try_send(command) {
            Ok(()) => {
                self.loading = true;
                self.last_error = None;
            }
            Err(err) => {
                self.last_error = Some(format!("fetch queue full: {}", err));
            }
        }
    }

    /// Apply a completed fetch to app state.
    pub fn on_fetch(&mut self, outcome: FetchOutcome) {
        self.loading = false;
        match outcome {
            FetchOutcome::Products { products, .. } => {
                self.products = products;
                if self.selection >= self.products.len() {
                    self.selection = self.products.len().saturating_sub(1);
                }
            }
            FetchOutcome::Product(product) => {
                self.open_gallery(&product);
            }
            FetchOutcome::Categories(categories) => {
                self.categories = categories;
            }
            FetchOutcome::Failed { kind, message } => {
                self.last_error = Some(format!("{} fetch failed: {}", kind, message));
            }
        }
    }
}
