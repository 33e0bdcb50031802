use console::Style;
use once_cell::sync::Lazy;

pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static HEADING: Lazy<Style> = Lazy::new(|| Style::new().bold().underlined());
pub static SELECTED: Lazy<Style> = Lazy::new(|| Style::new().black().on_yellow());
pub static KEYWORD: Lazy<Style> = Lazy::new(|| Style::new().cyan().bold());
