use std::time::{Duration, Instant};

use filterselect::{
    DropdownState, Event, FilterableSelect, Key, Outcome, SelectConfig, SelectError, SelectList,
    SelectOption, Target, TextInput, Visibility,
};

fn fruit_select() -> FilterableSelect {
    let list = SelectList::with_options(
        ["--", "Apple", "Banana", "Avocado"]
            .into_iter()
            .map(SelectOption::text),
    );
    FilterableSelect::new(TextInput::default().outer_height(3), list)
}

fn focus(select: &mut FilterableSelect, target: Target, now: Instant) -> Vec<Outcome> {
    select.dispatch(&Event::Focus { target }, now)
}

fn blur(select: &mut FilterableSelect, target: Target, now: Instant) -> Vec<Outcome> {
    select.dispatch(&Event::Blur { target }, now)
}

fn type_text(select: &mut FilterableSelect, text: &str, now: Instant) {
    for c in text.chars() {
        select.dispatch(&Event::key(Target::Input, Key::Char(c)), now);
    }
}

const GRACE: Duration = Duration::from_millis(50);

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_init_positions_list_below_input() {
    let select = fruit_select();

    assert_eq!(select.list().top(), 3);
    assert_eq!(select.list().size(), 3);
    assert_eq!(select.list().visibility(), Visibility::Hidden);
    assert_eq!(select.state(), DropdownState::Closed);
}

#[test]
fn test_init_small_list_uses_minimum_rows() {
    let list = SelectList::with_options([SelectOption::text("--"), SelectOption::text("Only")]);
    let select = FilterableSelect::new(TextInput::default(), list);
    assert_eq!(select.list().size(), 2);

    let select = FilterableSelect::new(TextInput::default(), SelectList::new());
    assert_eq!(select.list().size(), 2);
}

#[test]
fn test_row_count_heuristic() {
    let config = SelectConfig::default();
    assert_eq!(config.row_count(0), 2);
    assert_eq!(config.row_count(2), 2);
    assert_eq!(config.row_count(3), 2);
    assert_eq!(config.row_count(4), 3);
    assert_eq!(config.row_count(10), 9);
}

#[test]
fn test_invalid_config_rejected() {
    let result = FilterableSelect::with_config(
        TextInput::default(),
        SelectList::new(),
        SelectConfig::new().min_query_len(0),
    );
    assert!(matches!(result, Err(SelectError::InvalidConfig(_))));

    assert!(SelectConfig::new().min_rows(0).validate().is_err());
    assert!(SelectConfig::default().validate().is_ok());
}

// ============================================================================
// Opening
// ============================================================================

#[test]
fn test_focus_opens_overlay() {
    let mut select = fruit_select();
    let now = Instant::now();

    let outcomes = focus(&mut select, Target::Input, now);

    assert_eq!(outcomes, vec![Outcome::Opened]);
    assert!(select.is_open());
    assert!(select.input().is_focused());
    assert_eq!(select.list().visibility(), Visibility::Visible);
    assert_eq!(select.list().z_index(), 3);
    assert_eq!(select.list().size(), 3);
}

#[test]
fn test_focus_with_two_options_sizes_two_rows() {
    let list = SelectList::with_options([SelectOption::text("A"), SelectOption::text("B")]);
    let mut select = FilterableSelect::new(TextInput::default(), list);

    select.on_input_focus();

    assert_eq!(select.list().size(), 2);
}

#[test]
fn test_focus_when_already_open_stays_open() {
    let mut select = fruit_select();
    let now = Instant::now();

    focus(&mut select, Target::Input, now);
    focus(&mut select, Target::Input, now);

    assert!(select.is_open());
    assert!(select.list().is_visible());
}

#[test]
fn test_focus_sizes_from_current_options() {
    let mut select = fruit_select();
    let now = Instant::now();
    select.list_mut().push(SelectOption::text("Cherry"));

    focus(&mut select, Target::Input, now);

    assert_eq!(select.list().size(), 4);
}

#[test]
fn test_typing_filters_open_list() {
    let mut select = fruit_select();
    let now = Instant::now();
    focus(&mut select, Target::Input, now);

    type_text(&mut select, "Av", now);

    assert_eq!(select.input().value(), "Av");
    assert_eq!(select.list().visible_labels(), vec!["Avocado"]);

    select.dispatch(&Event::key(Target::Input, Key::Backspace), now);

    assert_eq!(select.input().value(), "A");
    assert_eq!(select.list().visible_labels().len(), 4);
    assert_eq!(select.list().size(), 3);
}

// ============================================================================
// Reset triggers
// ============================================================================

#[test]
fn test_change_commits_and_closes() {
    let mut select = fruit_select();
    let now = Instant::now();
    focus(&mut select, Target::Input, now);
    type_text(&mut select, "ban", now);

    let outcomes = select.dispatch(&Event::Change { index: 2 }, now);

    assert_eq!(
        outcomes,
        vec![
            Outcome::Committed {
                label: "Banana".into(),
                value: Some("Banana".into()),
            },
            Outcome::Closed,
        ]
    );
    assert_eq!(select.input().value(), "Banana");
    assert_eq!(select.state(), DropdownState::Closed);
    assert_eq!(select.list().visibility(), Visibility::Hidden);
    // Size and stacking survive the close
    assert_eq!(select.list().z_index(), 3);
}

#[test]
fn test_change_commits_value_separately_from_label() {
    let list = SelectList::with_options([
        SelectOption::new("Select a resource", ""),
        SelectOption::new("West Europe", "/rg/westeurope"),
    ]);
    let mut select = FilterableSelect::new(TextInput::default(), list);
    select.on_input_focus();

    let outcomes = select.on_list_change(1);

    assert_eq!(
        outcomes[0],
        Outcome::Committed {
            label: "West Europe".into(),
            value: Some("/rg/westeurope".into()),
        }
    );
    assert_eq!(select.input().value(), "West Europe");
}

#[test]
fn test_change_out_of_range_ignored() {
    let mut select = fruit_select();
    let now = Instant::now();
    focus(&mut select, Target::Input, now);

    let outcomes = select.dispatch(&Event::Change { index: 9 }, now);

    assert_eq!(outcomes, vec![Outcome::Ignored]);
    assert!(select.is_open());
    assert_eq!(select.list().selected_index(), Some(0));
}

#[test]
fn test_select_index_out_of_range_errors() {
    let mut select = fruit_select();

    assert_eq!(
        select.select_index(4),
        Err(SelectError::OptionOutOfRange { index: 4, len: 4 })
    );
}

#[test]
fn test_blur_closes_after_grace() {
    let mut select = fruit_select();
    let now = Instant::now();
    focus(&mut select, Target::Input, now);
    select.select_index(1).unwrap();
    focus(&mut select, Target::Input, now);
    type_text(&mut select, "zz", now);

    let outcomes = blur(&mut select, Target::Input, now);
    assert_eq!(outcomes, vec![Outcome::CloseScheduled { deadline: now + GRACE }]);
    assert_eq!(select.next_deadline(), Some(now + GRACE));

    // Not yet due
    assert!(select.tick(now + Duration::from_millis(49)).is_empty());
    assert!(select.is_open());

    let outcomes = select.tick(now + GRACE);
    assert!(outcomes.contains(&Outcome::Closed));
    assert_eq!(select.input().value(), "Apple");
    assert!(!select.list().is_visible());
    assert_eq!(select.next_deadline(), None);
}

#[test]
fn test_commit_keeps_last_filter_until_next_edit() {
    let mut select = fruit_select();
    let now = Instant::now();
    focus(&mut select, Target::Input, now);
    type_text(&mut select, "zz", now);
    blur(&mut select, Target::Input, now);
    select.tick(now + GRACE);
    assert_eq!(select.input().value(), "--");

    focus(&mut select, Target::Input, now + GRACE);
    assert!(select.list().visible_labels().is_empty());

    select.dispatch(&Event::key(Target::Input, Key::Backspace), now + GRACE);
    assert_eq!(select.list().visible_labels().len(), 4);
}

#[test]
fn test_blur_then_list_focus_keeps_open() {
    let mut select = fruit_select();
    let now = Instant::now();
    focus(&mut select, Target::Input, now);

    blur(&mut select, Target::Input, now);
    let outcomes = focus(&mut select, Target::List, now + Duration::from_millis(10));

    assert_eq!(outcomes, vec![Outcome::CloseCancelled]);
    assert!(select.tick(now + Duration::from_millis(100)).is_empty());
    assert!(select.is_open());
    assert!(select.list().is_focused());
}

#[test]
fn test_blur_skipped_if_list_focused_at_deadline() {
    let mut select = fruit_select();
    let now = Instant::now();
    focus(&mut select, Target::Input, now);

    // Some hosts report the new focus before the old blur
    focus(&mut select, Target::List, now);
    let outcomes = blur(&mut select, Target::Input, now);
    assert_eq!(outcomes.len(), 1);

    assert!(select.tick(now + GRACE).is_empty());
    assert!(select.is_open());
    assert_eq!(select.next_deadline(), None);
}

#[test]
fn test_refocus_cancels_stale_close() {
    let mut select = fruit_select();
    let now = Instant::now();
    focus(&mut select, Target::Input, now);
    blur(&mut select, Target::Input, now);

    let outcomes = focus(&mut select, Target::Input, now + Duration::from_millis(20));

    assert_eq!(outcomes, vec![Outcome::CloseCancelled, Outcome::Opened]);
    assert!(select.tick(now + Duration::from_millis(60)).is_empty());
    assert!(select.is_open());
}

#[test]
fn test_second_blur_replaces_first() {
    let mut select = fruit_select();
    let start = Instant::now();
    focus(&mut select, Target::Input, start);
    blur(&mut select, Target::Input, start);
    focus(&mut select, Target::Input, start + Duration::from_millis(10));
    blur(&mut select, Target::Input, start + Duration::from_millis(30));

    // First blur's deadline passes without firing
    assert!(select.tick(start + GRACE).is_empty());
    assert!(select.is_open());

    assert!(!select.tick(start + Duration::from_millis(80)).is_empty());
    assert!(!select.is_open());
}

#[test]
fn test_blur_while_closed_schedules_nothing() {
    let mut select = fruit_select();
    let now = Instant::now();

    assert!(blur(&mut select, Target::Input, now).is_empty());
    assert_eq!(select.next_deadline(), None);
}

#[test]
fn test_window_click_closes() {
    let mut select = fruit_select();
    let now = Instant::now();
    focus(&mut select, Target::Input, now);
    select.dispatch(&Event::key(Target::Input, Key::Down), now);
    select.dispatch(&Event::key(Target::Input, Key::Down), now);

    let outcomes = select.dispatch(&Event::Click { target: Target::Window }, now);

    assert!(outcomes.contains(&Outcome::Closed));
    assert_eq!(select.input().value(), "Banana");
}

#[test]
fn test_list_click_bubbles_to_window() {
    let mut select = fruit_select();
    let now = Instant::now();
    focus(&mut select, Target::Input, now);

    select.dispatch(&Event::Click { target: Target::List }, now);

    assert!(!select.is_open());
    assert_eq!(select.input().value(), "--");
}

#[test]
fn test_input_click_does_not_close() {
    let mut select = fruit_select();
    let now = Instant::now();
    focus(&mut select, Target::Input, now);

    let outcomes = select.dispatch(&Event::Click { target: Target::Input }, now);

    assert!(outcomes.is_empty());
    assert!(select.is_open());
}

#[test]
fn test_input_click_reopens_after_commit() {
    let mut select = fruit_select();
    let now = Instant::now();
    focus(&mut select, Target::Input, now);
    select.dispatch(&Event::key(Target::Input, Key::Enter), now);
    assert!(!select.is_open());

    let outcomes = select.dispatch(&Event::Click { target: Target::Input }, now);

    assert_eq!(outcomes, vec![Outcome::Opened]);
    assert!(select.is_open());
}

#[test]
fn test_window_click_while_closed_is_noop() {
    let mut select = fruit_select();
    let now = Instant::now();
    type_text(&mut select, "xy", now);

    let outcomes = select.dispatch(&Event::Click { target: Target::Window }, now);

    assert!(outcomes.is_empty());
    assert_eq!(select.input().value(), "xy");
}

// ============================================================================
// Keyboard navigation
// ============================================================================

#[test]
fn test_arrows_skip_hidden_options() {
    let mut select = fruit_select();
    let now = Instant::now();
    focus(&mut select, Target::Input, now);
    type_text(&mut select, "an", now);

    let outcomes = select.dispatch(&Event::key(Target::Input, Key::Down), now);
    assert_eq!(outcomes, vec![Outcome::Highlighted { index: 2 }]);

    // Nothing visible past Banana
    assert!(select.dispatch(&Event::key(Target::Input, Key::Down), now).is_empty());
    assert_eq!(select.list().selected_index(), Some(2));
}

#[test]
fn test_list_enter_commits() {
    let mut select = fruit_select();
    let now = Instant::now();
    focus(&mut select, Target::Input, now);
    blur(&mut select, Target::Input, now);
    focus(&mut select, Target::List, now);

    select.dispatch(&Event::key(Target::List, Key::Down), now);
    select.dispatch(&Event::key(Target::List, Key::Down), now);
    select.dispatch(&Event::key(Target::List, Key::Down), now);
    select.dispatch(&Event::key(Target::List, Key::Up), now);
    let outcomes = select.dispatch(&Event::key(Target::List, Key::Enter), now);

    assert!(outcomes.contains(&Outcome::Closed));
    assert_eq!(select.input().value(), "Banana");
}

#[test]
fn test_typing_reopens_focused_input() {
    let mut select = fruit_select();
    let now = Instant::now();
    focus(&mut select, Target::Input, now);
    select.dispatch(&Event::key(Target::Input, Key::Escape), now);
    assert!(!select.is_open());

    select.dispatch(&Event::key(Target::Input, Key::Char('x')), now);

    assert!(select.is_open());
}

// ============================================================================
// Independent instances
// ============================================================================

#[test]
fn test_instances_do_not_share_state() {
    let mut first = fruit_select();
    let mut second = fruit_select();
    let now = Instant::now();

    focus(&mut first, Target::Input, now);
    type_text(&mut first, "av", now);

    assert!(!second.is_open());
    assert_eq!(second.list().visible_labels().len(), 4);

    second.select_index(3).unwrap();
    assert_eq!(first.input().value(), "av");
    assert_eq!(second.input().value(), "Avocado");
}
