//! Rendering of the viewed date into a page.

use chrono::NaiveDate;

use crate::config::Config;
use crate::models::{day_title, format_date_key, next_day, previous_day, Meal};
use crate::page::{Control, Dish, Layout, MealSlot, Page, Plate, Region};
use crate::store::MenuStore;

/// Which neighbouring days have a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub previous: bool,
    pub next: bool,
}

impl Navigation {
    pub fn around(date: NaiveDate, store: &MenuStore) -> Self {
        let has_menu =
            |day: Option<NaiveDate>| day.is_some_and(|d| store.lookup(format_date_key(d)).is_some());

        Self {
            previous: has_menu(previous_day(date)),
            next: has_menu(next_day(date)),
        }
    }
}

/// Render the menu for `date` into `page`.
pub fn render<P: Page>(date: NaiveDate, store: &MenuStore, config: &Config, page: &mut P) {
    let key = format_date_key(date);
    let menu = store.lookup(key);
    tracing::debug!("Rendering day={} found={}", key, menu.is_some());

    page.set_visible(Region::Loader, false);

    match menu {
        None => {
            page.set_visible(Region::Unavailable, true);
            page.set_visible(Region::Lunch, false);
            page.set_visible(Region::Dinner, false);

            let title = day_title(date);
            for layout in Layout::ALL {
                page.set_title(layout, &title, &config.default_url);
            }
        }
        Some(record) => {
            page.set_visible(Region::Unavailable, false);
            page.set_visible(Region::Lunch, true);
            page.set_visible(Region::Dinner, true);

            for layout in Layout::ALL {
                page.set_title(layout, &record.day, &record.url);
                render_meal(page, MealSlot::Lunch, &record.lunch, layout);
                render_meal(page, MealSlot::Dinner, &record.dinner, layout);
            }
        }
    }

    let navigation = Navigation::around(date, store);
    page.set_disabled(Control::Previous, !navigation.previous);
    page.set_disabled(Control::Next, !navigation.next);
}

fn render_meal<P: Page>(page: &mut P, slot: MealSlot, meal: &Meal, layout: Layout) {
    page.set_dish(Dish::new(slot, Plate::First, layout), &meal.p1);

    let second = Dish::new(slot, Plate::Second, layout);
    match &meal.p2 {
        Some(p2) => {
            page.set_dish(second, p2);
            page.set_visible(Region::Dish(second), true);
        }
        None => {
            page.set_dish(second, "");
            page.set_visible(Region::Dish(second), false);
        }
    }
}
