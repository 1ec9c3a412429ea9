//! E2E tests for dismissing the menu with pointer-downs elsewhere

use crate::common::harness::WidgetTestHarness;
use anchor_menu::trigger::Trigger;
use anchor_menu::MenuState;
use crossterm::event::MouseButton;

fn harness_with_open_menu(trigger: Trigger) -> WidgetTestHarness {
    let mut harness = WidgetTestHarness::new(80, 24).unwrap();
    harness.click_trigger(trigger).unwrap();
    assert!(harness.app().controller().state().is_ready());
    harness
}

#[test]
fn test_click_on_empty_area_closes_menu() {
    let mut harness = harness_with_open_menu(Trigger::TopLeft);

    harness.click(40, 15).unwrap();

    assert_eq!(harness.app().controller().state(), MenuState::Closed);
    assert!(harness.popup_area().is_none());
    harness.assert_screen_not_contains("Delete");
}

#[test]
fn test_click_inside_popup_keeps_menu_open() {
    let mut harness = harness_with_open_menu(Trigger::TopCenter);
    let popup = harness.popup_area().unwrap();

    // Bottom border row, not an item
    harness
        .click(popup.x + 1, popup.y + popup.height - 1)
        .unwrap();

    assert!(harness.app().controller().state().is_ready());
    assert_eq!(harness.popup_area(), Some(popup));
}

#[test]
fn test_right_click_outside_closes_menu() {
    let mut harness = harness_with_open_menu(Trigger::TopRight);

    harness.mouse_down(MouseButton::Right, 5, 20).unwrap();

    assert_eq!(harness.app().controller().state(), MenuState::Closed);
}

#[test]
fn test_right_click_on_trigger_does_not_toggle() {
    let mut harness = harness_with_open_menu(Trigger::TopLeft);
    let area = harness.trigger_area(Trigger::TopRight).unwrap();

    harness
        .mouse_down(MouseButton::Right, area.x + 1, area.y + 1)
        .unwrap();

    assert_eq!(
        harness.app().controller().state().active(),
        Some(Trigger::TopLeft)
    );
}

#[test]
fn test_click_on_other_trigger_switches_instead_of_closing() {
    let mut harness = harness_with_open_menu(Trigger::TopLeft);

    harness.click_trigger(Trigger::TopCenter).unwrap();

    let state = harness.app().controller().state();
    assert_eq!(state.active(), Some(Trigger::TopCenter));
    assert!(state.is_ready());
    harness.assert_screen_contains("Delete");
}

#[test]
fn test_outside_click_while_closed_is_harmless() {
    let mut harness = WidgetTestHarness::new(80, 24).unwrap();

    harness.click(40, 15).unwrap();

    assert_eq!(harness.app().controller().state(), MenuState::Closed);
    harness.assert_screen_contains("Click a button to open its menu");
}

#[test]
fn test_unmounted_widget_ignores_outside_clicks() {
    let mut harness = harness_with_open_menu(Trigger::TopLeft);
    harness.app_mut().unmount();
    assert!(harness.app().listeners().is_empty());

    harness.click(40, 15).unwrap();

    assert!(harness.app().controller().state().is_open());
}

#[test]
fn test_remount_keeps_single_listener() {
    let mut harness = harness_with_open_menu(Trigger::TopLeft);
    harness.app_mut().mount();
    harness.app_mut().mount();
    assert_eq!(harness.app().listeners().len(), 1);

    harness.click(40, 15).unwrap();
    assert_eq!(harness.app().controller().state(), MenuState::Closed);
}
