//! View controller: owns the viewed date and turns input into re-renders.

mod input;
mod render;

pub use input::*;
pub use render::*;

use chrono::{Local, NaiveDate};

use crate::config::Config;
use crate::errors::AppError;
use crate::models::{format_date_key, next_day, previous_day};
use crate::page::{Control, Page, Region};
use crate::store::{MenuSource, MenuStore};

/// Source of "today".
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The date currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub viewed_date: NaiveDate,
}

/// Everything the controller mutates.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: MenuStore,
    pub view: ViewState,
}

/// Drives a [`Page`] from the menu store and user input.
pub struct ViewController<P: Page, C: Clock = SystemClock> {
    state: AppState,
    config: Config,
    page: P,
    clock: C,
    bindings: KeyBindings,
    debouncer: TouchDebouncer,
}

impl<P: Page> ViewController<P> {
    pub fn new(config: Config, page: P) -> Self {
        Self::with_clock(config, page, SystemClock)
    }
}

impl<P: Page, C: Clock> ViewController<P, C> {
    pub fn with_clock(config: Config, page: P, clock: C) -> Self {
        let state = AppState {
            store: MenuStore::new(),
            view: ViewState {
                viewed_date: clock.today(),
            },
        };
        let bindings = KeyBindings::new(config.h_key);
        let debouncer = TouchDebouncer::new(config.touch_debounce);

        Self {
            state,
            config,
            page,
            clock,
            bindings,
            debouncer,
        }
    }

    /// Load the menus once and show today's.
    ///
    /// A failed fetch still renders (the empty state) before the error is
    /// handed back.
    pub async fn initialize(&mut self, source: &MenuSource) -> Result<(), AppError> {
        self.state.view.viewed_date = self.clock.today();

        self.page.set_visible(Region::Loader, true);
        self.page.set_visible(Region::Unavailable, false);
        self.page.set_visible(Region::Lunch, false);
        self.page.set_visible(Region::Dinner, false);

        let force_refresh = self.config.page_query.force_refresh();
        let result = self
            .state
            .store
            .fetch(source, force_refresh)
            .await
            .map(|_| ());

        if force_refresh {
            self.page.replace_url(&self.config.page_path);
        }

        self.render();
        result
    }

    /// Re-render the viewed date.
    pub fn render(&mut self) {
        render(
            self.state.view.viewed_date,
            &self.state.store,
            &self.config,
            &mut self.page,
        );
    }

    pub fn navigation(&self) -> Navigation {
        Navigation::around(self.state.view.viewed_date, &self.state.store)
    }

    /// Move one day forward. Returns false when there is no menu for it.
    pub fn navigate_next(&mut self) -> bool {
        if !self.navigation().next {
            tracing::debug!("Next is disabled at {}", self.viewed_key());
            return false;
        }
        match next_day(self.state.view.viewed_date) {
            Some(day) => self.show(day),
            None => false,
        }
    }

    /// Move one day back. Returns false when there is no menu for it.
    pub fn navigate_previous(&mut self) -> bool {
        if !self.navigation().previous {
            tracing::debug!("Previous is disabled at {}", self.viewed_key());
            return false;
        }
        match previous_day(self.state.view.viewed_date) {
            Some(day) => self.show(day),
            None => false,
        }
    }

    pub fn jump_to_today(&mut self) {
        let today = self.clock.today();
        self.show(today);
    }

    /// Leave for the full menu listing.
    pub fn show_all(&mut self) {
        self.page.navigate(&self.config.all_url);
    }

    /// Apply an action, returning whether it did anything.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Previous => self.navigate_previous(),
            Action::Next => self.navigate_next(),
            Action::Today => {
                self.jump_to_today();
                true
            }
            Action::ShowAll => {
                self.show_all();
                true
            }
        }
    }

    /// Map an input event to an action and apply it.
    ///
    /// Returns the action when one was applied.
    pub fn handle(&mut self, event: InputEvent) -> Option<Action> {
        let action = match event {
            InputEvent::Control(control) => Some(match control {
                Control::Previous => Action::Previous,
                Control::Next => Action::Next,
                Control::All => Action::ShowAll,
            }),
            InputEvent::Key(key) => self.bindings.action_for(&key),
            InputEvent::Click { x, at } => {
                if self.debouncer.suppresses_click(at) {
                    tracing::debug!("Click right after touch ignored");
                    None
                } else {
                    self.pointer_action(x, true)
                }
            }
            InputEvent::Touch { x, at } => {
                self.debouncer.touched(at);
                self.pointer_action(x, false)
            }
        }?;

        if self.apply(action) {
            Some(action)
        } else {
            None
        }
    }

    fn pointer_action(&self, x: f64, is_click: bool) -> Option<Action> {
        let width = self.page.viewport_width();
        let previous = self.page.control_bounds(Control::Previous)?;
        let all = self.page.control_bounds(Control::All)?;
        let zones = ZoneLayout::from_bounds(previous, all, width)?;

        let x_percent = x * 100.0 / width;
        if is_click && x_percent == 0.0 {
            return None;
        }
        tracing::debug!("Pointer at {:.2}%", x_percent);

        match zones.zone(x_percent) {
            Zone::Left => Some(Action::Previous),
            Zone::Right => Some(Action::Next),
            Zone::Center if self.config.enable_middle_click => Some(Action::ShowAll),
            Zone::Center => None,
        }
    }

    fn show(&mut self, day: NaiveDate) -> bool {
        self.state.view.viewed_date = day;
        self.render();
        tracing::info!("Changed day to {}", self.viewed_key());
        true
    }

    fn viewed_key(&self) -> u32 {
        format_date_key(self.state.view.viewed_date)
    }

    pub fn viewed_date(&self) -> NaiveDate {
        self.state.view.viewed_date
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Swap in a new collection, e.g. one fetched elsewhere, and re-render.
    pub fn replace_menus(&mut self, store: MenuStore) {
        self.state.store = store;
        self.render();
    }

    pub fn page(&self) -> &P {
        &self.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Meal, MenuRecord};
    use crate::page::TextPage;
    use std::time::{Duration, Instant};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: u32) -> MenuRecord {
        MenuRecord {
            id,
            day: format!("Día {}", id % 100),
            url: format!("https://example.org/{}", id),
            lunch: Meal::new("lentejas", None),
            dinner: Meal::new("tortilla", Some("fruta")),
        }
    }

    fn controller(
        today: NaiveDate,
        ids: &[u32],
        config: Config,
    ) -> ViewController<TextPage, FixedClock> {
        let mut controller =
            ViewController::with_clock(config, TextPage::new(90, "/hoy"), FixedClock(today));
        controller.replace_menus(MenuStore::with_records(ids.iter().copied().map(record).collect()));
        controller
    }

    #[test]
    fn test_last_day_has_next_disabled_and_next_is_noop() {
        let mut c = controller(date(2019, 6, 14), &[20190613, 20190614], Config::default());

        assert!(!c.page().is_visible(Region::Unavailable));
        assert_eq!(c.page().title(crate::page::Layout::A).unwrap().0, "Día 14");
        assert!(!c.page().is_disabled(Control::Previous));
        assert!(c.page().is_disabled(Control::Next));

        assert!(!c.navigate_next());
        assert_eq!(c.handle(InputEvent::Control(Control::Next)), None);
        assert_eq!(c.viewed_date(), date(2019, 6, 14));

        assert!(c.navigate_previous());
        assert_eq!(c.viewed_date(), date(2019, 6, 13));
        assert!(c.page().is_disabled(Control::Previous));
        assert!(!c.page().is_disabled(Control::Next));
    }

    #[test]
    fn test_empty_collection_disables_everything() {
        let mut c = controller(date(2019, 6, 14), &[], Config::default());

        assert!(c.page().is_visible(Region::Unavailable));
        assert!(c.page().is_disabled(Control::Previous));
        assert!(c.page().is_disabled(Control::Next));
        assert!(!c.navigate_previous());
        assert!(!c.navigate_next());
        assert_eq!(c.viewed_date(), date(2019, 6, 14));
    }

    #[test]
    fn test_next_then_previous_is_identity_across_year_boundary() {
        let mut c = controller(date(2019, 12, 31), &[20191230, 20191231, 20200101], Config::default());

        assert!(c.navigate_next());
        assert_eq!(c.viewed_date(), date(2020, 1, 1));
        assert!(c.navigate_previous());
        assert_eq!(c.viewed_date(), date(2019, 12, 31));
        assert!(c.navigate_previous());
        assert!(c.navigate_next());
        assert_eq!(c.viewed_date(), date(2019, 12, 31));
    }

    #[test]
    fn test_keys_and_jump_to_today() {
        let mut c = controller(date(2019, 6, 14), &[20190612, 20190613, 20190614], Config::default());

        assert_eq!(c.handle(InputEvent::Key(Key::Char('j'))), Some(Action::Previous));
        assert_eq!(c.handle(InputEvent::Key(Key::ArrowLeft)), Some(Action::Previous));
        assert_eq!(c.viewed_date(), date(2019, 6, 12));

        assert_eq!(c.handle(InputEvent::Key(Key::Char('K'))), Some(Action::Next));
        assert_eq!(c.handle(InputEvent::Key(Key::Char('H'))), Some(Action::Today));
        assert_eq!(c.viewed_date(), date(2019, 6, 14));

        assert_eq!(c.handle(InputEvent::Key(Key::Char('q'))), None);
    }

    #[test]
    fn test_jump_to_today_works_without_menu() {
        let mut c = controller(date(2019, 6, 20), &[20190613, 20190614], Config::default());
        assert!(c.page().is_visible(Region::Unavailable));

        assert_eq!(c.handle(InputEvent::Key(Key::Char('t'))), Some(Action::Today));
        assert_eq!(c.viewed_date(), date(2019, 6, 20));
        assert!(c.page().is_visible(Region::Unavailable));
    }

    #[test]
    fn test_zone_clicks_navigate() {
        let mut c = controller(date(2019, 6, 14), &[20190613, 20190614, 20190615], Config::default());
        let at = Instant::now();

        assert_eq!(c.handle(InputEvent::Click { x: 85.0, at }), Some(Action::Next));
        assert_eq!(c.handle(InputEvent::Click { x: 5.0, at }), Some(Action::Previous));
        assert_eq!(c.viewed_date(), date(2019, 6, 14));
    }

    #[test]
    fn test_center_zone_is_disabled_by_default() {
        let mut c = controller(date(2019, 6, 14), &[20190614], Config::default());
        let at = Instant::now();

        assert_eq!(c.handle(InputEvent::Click { x: 45.0, at }), None);
        assert!(c.page().navigations().is_empty());
    }

    #[test]
    fn test_center_zone_shows_all_when_enabled() {
        let config = Config {
            enable_middle_click: true,
            ..Config::default()
        };
        let mut c = controller(date(2019, 6, 14), &[20190614], config);

        assert_eq!(
            c.handle(InputEvent::Touch { x: 45.0, at: Instant::now() }),
            Some(Action::ShowAll)
        );
        assert_eq!(c.page().navigations(), ["/menus".to_string()]);
    }

    #[test]
    fn test_click_at_left_edge_is_ignored() {
        let mut c = controller(date(2019, 6, 14), &[20190613, 20190614], Config::default());
        assert_eq!(c.handle(InputEvent::Click { x: 0.0, at: Instant::now() }), None);
        assert_eq!(c.viewed_date(), date(2019, 6, 14));
    }

    #[test]
    fn test_touch_then_synthesized_click_navigates_once() {
        let mut c = controller(
            date(2019, 6, 14),
            &[20190614, 20190615, 20190616],
            Config::default(),
        );
        let touch_at = Instant::now();

        assert_eq!(c.handle(InputEvent::Touch { x: 85.0, at: touch_at }), Some(Action::Next));
        let click_at = touch_at + Duration::from_millis(120);
        assert_eq!(c.handle(InputEvent::Click { x: 85.0, at: click_at }), None);
        assert_eq!(c.viewed_date(), date(2019, 6, 15));

        let later = touch_at + Duration::from_millis(900);
        assert_eq!(c.handle(InputEvent::Click { x: 85.0, at: later }), Some(Action::Next));
        assert_eq!(c.viewed_date(), date(2019, 6, 16));
    }

    #[test]
    fn test_all_control_navigates_away() {
        let mut c = controller(date(2019, 6, 14), &[], Config::default());
        assert_eq!(c.handle(InputEvent::Control(Control::All)), Some(Action::ShowAll));
        assert_eq!(c.page().location(), "/menus");
    }
}
