//! E2E tests for configuration and theme files

use crate::common::fixtures::TestFixture;
use crate::common::harness::WidgetTestHarness;
use anchor_menu::config::{Config, ConfigError};
use anchor_menu::trigger::{Locale, Trigger};
use anchor_menu::view::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::Color;

#[test]
fn test_localized_config_file() {
    let fixture = TestFixture::new(
        "config.json",
        r#"{
            "locale": "ru",
            "placement": { "offset": 3, "margin": 1 }
        }"#,
    )
    .unwrap();

    let config = Config::load_from_file(&fixture.path).unwrap();
    assert_eq!(config.locale, Locale::Ru);

    let mut harness = WidgetTestHarness::with_config(config, 80, 24).unwrap();
    harness.click_trigger(Trigger::TopLeft).unwrap();

    // "Сохранить" is 9 columns wide; the button spans 2..7 x 1..4
    assert_eq!(harness.popup_area(), Some(Rect::new(10, 7, 13, 5)));
    harness.assert_screen_contains("Открыть");
    harness.assert_screen_contains("Сохранить");
    harness.assert_screen_contains("Удалить");
}

#[test]
fn test_localized_action_status() {
    let config = Config {
        locale: Locale::Ru,
        ..Config::default()
    };
    let mut harness = WidgetTestHarness::with_config(config, 80, 24).unwrap();
    harness.click_trigger(Trigger::TopLeft).unwrap();

    let popup = harness.popup_area().unwrap();
    harness.click(popup.x + 3, popup.y + 1).unwrap();

    assert_eq!(harness.app().status_message(), Some("Action: Открыть"));
}

#[test]
fn test_custom_glyph_and_insets() {
    let fixture = TestFixture::new(
        "config.json",
        r#"{ "layout": { "inset_x": 4, "inset_y": 2, "glyph": "≡" } }"#,
    )
    .unwrap();
    let config = Config::load_from_file(&fixture.path).unwrap();

    let harness = WidgetTestHarness::with_config(config, 80, 24).unwrap();
    assert_eq!(
        harness.trigger_area(Trigger::TopLeft),
        Some(Rect::new(4, 2, 5, 3))
    );
    assert_eq!(harness.get_cell(6, 3), "≡");
}

#[test]
fn test_saved_config_loads_back() {
    let fixture = TestFixture::new("config.json", "{}").unwrap();
    let config = Config {
        locale: Locale::Ru,
        ..Config::default()
    };
    config.save_to_file(&fixture.path).unwrap();

    assert!(fixture.read_content().unwrap().contains("\"ru\""));
    assert_eq!(Config::load_from_file(&fixture.path).unwrap(), config);
}

#[test]
fn test_negative_margin_is_rejected() {
    let fixture = TestFixture::new(
        "config.json",
        r#"{ "placement": { "offset": 1, "margin": -2 } }"#,
    )
    .unwrap();

    assert!(matches!(
        Config::load_from_file(&fixture.path),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn test_malformed_config_is_a_parse_error() {
    let fixture = TestFixture::new("config.json", "{ locale: ").unwrap();
    assert!(matches!(
        Config::load_from_file(&fixture.path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn test_theme_file_colors_the_popup() {
    let fixture = TestFixture::new(
        "theme.json",
        r#"{
            "name": "paper",
            "buttons": { "fg": "Black", "border_fg": "Gray" },
            "menu": { "border_fg": "Gray", "bg": [250, 250, 250], "fg": "Black" }
        }"#,
    )
    .unwrap();
    let theme = Theme::from_file(&fixture.path).unwrap();

    let mut harness =
        WidgetTestHarness::with_theme(Config::default(), theme, 80, 24).unwrap();
    harness.click_trigger(Trigger::TopLeft).unwrap();

    let popup = harness.popup_area().unwrap();
    assert_eq!(
        harness.cell_bg(popup.x + 1, popup.y + 1),
        Color::Rgb(250, 250, 250)
    );
}

#[test]
fn test_partial_placement_section_keeps_popup_next_to_trigger() {
    let fixture = TestFixture::new("config.json", r#"{ "placement": { "offset": 1 } }"#).unwrap();
    let config = Config::load_from_file(&fixture.path).unwrap();

    let mut harness = WidgetTestHarness::with_config(config, 80, 24).unwrap();
    harness.click_trigger(Trigger::TopLeft).unwrap();

    // Same spot as with no placement section at all
    assert_eq!(harness.popup_area(), Some(Rect::new(8, 5, 10, 5)));
}
