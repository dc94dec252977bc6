//! Page template boundary.
//!
//! The controller never builds markup; it drives a fixed template through the
//! [`Page`] trait by toggling named regions, filling text slots and enabling
//! controls.

mod text;

pub use text::*;

/// The template renders titles and dishes twice, in two layout copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    A,
    B,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::A, Layout::B];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealSlot {
    Lunch,
    Dinner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plate {
    First,
    Second,
}

/// One dish text slot, e.g. the second lunch plate of layout `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dish {
    pub meal: MealSlot,
    pub plate: Plate,
    pub layout: Layout,
}

impl Dish {
    pub fn new(meal: MealSlot, plate: Plate, layout: Layout) -> Self {
        Self {
            meal,
            plate,
            layout,
        }
    }
}

/// Regions whose visibility the controller toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// "No menu for this day" panel
    Unavailable,
    Lunch,
    Dinner,
    /// Loading indicator, hidden after the first render
    Loader,
    Dish(Dish),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Previous,
    Next,
    /// Link to the full menu listing
    All,
}

/// Horizontal extent of an element, in the same unit as the viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub width: f64,
}

/// The template the controller renders into.
pub trait Page {
    fn set_visible(&mut self, region: Region, visible: bool);

    fn set_dish(&mut self, dish: Dish, text: &str);

    /// Set the day title text and its link target.
    fn set_title(&mut self, layout: Layout, text: &str, href: &str);

    fn set_disabled(&mut self, control: Control, disabled: bool);

    /// Width of the visible area; zero when unknown.
    fn viewport_width(&self) -> f64;

    fn control_bounds(&self, control: Control) -> Option<Bounds>;

    /// Leave the page for `url`.
    fn navigate(&mut self, url: &str);

    /// Change the visible URL without navigating.
    fn replace_url(&mut self, url: &str);
}
