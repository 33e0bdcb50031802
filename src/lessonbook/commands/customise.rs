use crate::commands::{CmdMessage, CmdResult, UiUpdate};
use crate::config::{FontSize, UserPrefs};

pub const USAGE: &str = "customise: Changes the font size and/or keyword highlighting.\n\
Parameters: [fs/xsmall|small|normal|large|xlarge] [hl/on|off]\n\
Example: customise fs/large hl/off";

/// Applies the given preferences. Persisting them is left to the caller.
pub fn run(prefs: &mut UserPrefs, font_size: Option<FontSize>, highlight: Option<bool>) -> CmdResult {
    let mut result = CmdResult::default();
    if let Some(size) = font_size {
        prefs.font_size = size;
        result.add_message(CmdMessage::success(format!("Font size set to {}", size)));
        result = result.with_update(UiUpdate::FontSizeChanged(size));
    }
    if let Some(on) = highlight {
        prefs.highlight = on;
        let state = if on { "on" } else { "off" };
        result.add_message(CmdMessage::success(format!(
            "Keyword highlighting turned {}",
            state
        )));
        result = result.with_update(UiUpdate::HighlightToggled(on));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_both_settings() {
        let mut prefs = UserPrefs::default();
        let result = run(&mut prefs, Some(FontSize::Large), Some(false));
        assert_eq!(prefs.font_size, FontSize::Large);
        assert!(!prefs.highlight);
        assert_eq!(
            result.updates,
            vec![
                UiUpdate::FontSizeChanged(FontSize::Large),
                UiUpdate::HighlightToggled(false)
            ]
        );
    }

    #[test]
    fn leaves_unset_preferences_alone() {
        let mut prefs = UserPrefs::default();
        let result = run(&mut prefs, None, Some(true));
        assert_eq!(prefs.font_size, FontSize::Normal);
        assert_eq!(result.messages[0].content, "Keyword highlighting turned on");
    }
}
