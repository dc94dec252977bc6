//! In-memory page that renders to plain text.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::{Bounds, Control, Dish, Layout, MealSlot, Page, Plate, Region};

const PREVIOUS_LABEL: &str = "< Anterior";
const ALL_LABEL: &str = "Todos";
const NEXT_LABEL: &str = "Siguiente >";
const UNAVAILABLE_TEXT: &str = "No hay menú disponible para este día.";
const LOADER_TEXT: &str = "Cargando...";

/// Below this width the stacked layout `b` is shown instead of `a`.
const WIDE_LAYOUT_MIN_WIDTH: u16 = 60;

/// A page template held in memory.
///
/// Regions start visible and controls start enabled, like a freshly loaded
/// template. `Display` prints the copy that fits the viewport width.
#[derive(Debug, Clone)]
pub struct TextPage {
    width: u16,
    hidden: HashSet<Region>,
    disabled: HashSet<Control>,
    dishes: HashMap<Dish, String>,
    titles: HashMap<Layout, (String, String)>,
    location: String,
    navigations: Vec<String>,
}

impl TextPage {
    pub fn new(width: u16, location: &str) -> Self {
        Self {
            width,
            hidden: HashSet::new(),
            disabled: HashSet::new(),
            dishes: HashMap::new(),
            titles: HashMap::new(),
            location: location.to_string(),
            navigations: Vec::new(),
        }
    }

    pub fn is_visible(&self, region: Region) -> bool {
        !self.hidden.contains(&region)
    }

    pub fn is_disabled(&self, control: Control) -> bool {
        self.disabled.contains(&control)
    }

    pub fn dish(&self, dish: Dish) -> Option<&str> {
        self.dishes.get(&dish).map(String::as_str)
    }

    /// Title text and link of a layout copy.
    pub fn title(&self, layout: Layout) -> Option<(&str, &str)> {
        self.titles
            .get(&layout)
            .map(|(text, href)| (text.as_str(), href.as_str()))
    }

    /// Current visible URL.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// URLs the page was asked to navigate to, oldest first.
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    /// Which layout copy is shown at the current width.
    pub fn active_layout(&self) -> Layout {
        if self.width >= WIDE_LAYOUT_MIN_WIDTH {
            Layout::A
        } else {
            Layout::B
        }
    }

    fn label(control: Control) -> &'static str {
        match control {
            Control::Previous => PREVIOUS_LABEL,
            Control::Next => NEXT_LABEL,
            Control::All => ALL_LABEL,
        }
    }

    fn button(&self, control: Control) -> String {
        if self.is_disabled(control) {
            format!("({})", Self::label(control))
        } else {
            format!("[{}]", Self::label(control))
        }
    }

    /// Button width in columns, brackets included.
    fn button_width(control: Control) -> usize {
        Self::label(control).chars().count() + 2
    }

    fn nav_bar(&self) -> String {
        let width = self.width as usize;
        let previous = self.button(Control::Previous);
        let all = self.button(Control::All);
        let next = self.button(Control::Next);

        let all_left = width.saturating_sub(Self::button_width(Control::All)) / 2;
        let next_left = width.saturating_sub(Self::button_width(Control::Next));

        let mut bar = previous;
        let pad = all_left.saturating_sub(bar.chars().count()).max(1);
        bar.push_str(&" ".repeat(pad));
        bar.push_str(&all);
        let pad = next_left.saturating_sub(bar.chars().count()).max(1);
        bar.push_str(&" ".repeat(pad));
        bar.push_str(&next);
        bar
    }

    /// Visible plates of a meal in the given layout.
    fn plates(&self, meal: MealSlot, layout: Layout) -> Vec<&str> {
        [Plate::First, Plate::Second]
            .into_iter()
            .map(|plate| Dish::new(meal, plate, layout))
            .filter(|dish| self.is_visible(Region::Dish(*dish)))
            .filter_map(|dish| self.dish(dish))
            .collect()
    }

    fn meal_region(meal: MealSlot) -> Region {
        match meal {
            MealSlot::Lunch => Region::Lunch,
            MealSlot::Dinner => Region::Dinner,
        }
    }

    fn meal_heading(meal: MealSlot) -> &'static str {
        match meal {
            MealSlot::Lunch => "Comida",
            MealSlot::Dinner => "Cena",
        }
    }

    fn write_side_by_side(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = self.width as usize / 2;
        let meals: Vec<MealSlot> = [MealSlot::Lunch, MealSlot::Dinner]
            .into_iter()
            .filter(|meal| self.is_visible(Self::meal_region(*meal)))
            .collect();
        if meals.is_empty() {
            return Ok(());
        }

        let columns: Vec<Vec<String>> = meals
            .iter()
            .map(|meal| {
                let mut lines = vec![format!("{}:", Self::meal_heading(*meal))];
                lines.extend(
                    self.plates(*meal, Layout::A)
                        .into_iter()
                        .map(|plate| format!("  - {}", plate)),
                );
                lines
            })
            .collect();

        let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
        for row in 0..rows {
            let mut line = String::new();
            for (index, lines) in columns.iter().enumerate() {
                let cell = lines.get(row).map(String::as_str).unwrap_or("");
                if index + 1 < columns.len() {
                    line.push_str(&format!("{:<width$}", cell, width = column));
                } else {
                    line.push_str(cell);
                }
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }

    fn write_stacked(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for meal in [MealSlot::Lunch, MealSlot::Dinner] {
            if !self.is_visible(Self::meal_region(meal)) {
                continue;
            }
            writeln!(f, "{}:", Self::meal_heading(meal))?;
            for plate in self.plates(meal, Layout::B) {
                writeln!(f, "  - {}", plate)?;
            }
        }
        Ok(())
    }
}

impl Page for TextPage {
    fn set_visible(&mut self, region: Region, visible: bool) {
        if visible {
            self.hidden.remove(&region);
        } else {
            self.hidden.insert(region);
        }
    }

    fn set_dish(&mut self, dish: Dish, text: &str) {
        self.dishes.insert(dish, text.to_string());
    }

    fn set_title(&mut self, layout: Layout, text: &str, href: &str) {
        self.titles
            .insert(layout, (text.to_string(), href.to_string()));
    }

    fn set_disabled(&mut self, control: Control, disabled: bool) {
        if disabled {
            self.disabled.insert(control);
        } else {
            self.disabled.remove(&control);
        }
    }

    fn viewport_width(&self) -> f64 {
        self.width as f64
    }

    fn control_bounds(&self, control: Control) -> Option<Bounds> {
        let width = self.width as usize;
        let button = Self::button_width(control);
        if width < Self::button_width(Control::Previous)
            + Self::button_width(Control::All)
            + Self::button_width(Control::Next)
        {
            return None;
        }

        let left = match control {
            Control::Previous => 0,
            Control::All => (width - button) / 2,
            Control::Next => width - button,
        };
        Some(Bounds {
            left: left as f64,
            width: button as f64,
        })
    }

    fn navigate(&mut self, url: &str) {
        tracing::info!("Navigating to {}", url);
        self.navigations.push(url.to_string());
        self.location = url.to_string();
    }

    fn replace_url(&mut self, url: &str) {
        tracing::debug!("Replacing visible URL {} with {}", self.location, url);
        self.location = url.to_string();
    }
}

impl fmt::Display for TextPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.active_layout();

        writeln!(f, "{}", self.nav_bar())?;
        if let Some((text, href)) = self.title(layout) {
            writeln!(f, "{} <{}>", text, href)?;
        }
        if self.is_visible(Region::Loader) {
            writeln!(f, "{}", LOADER_TEXT)?;
        }
        if self.is_visible(Region::Unavailable) {
            writeln!(f, "{}", UNAVAILABLE_TEXT)?;
        }

        match layout {
            Layout::A => self.write_side_by_side(f),
            Layout::B => self.write_stacked(f),
        }
    }
}
