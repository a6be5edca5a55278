//! Terminal input to widget events.
//!
//! Focus moves are emitted before the click that caused them, and a list
//! pick emits `Change` before the bubbling `Click`, so the pick commits
//! before the window handler sees the click.

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use filterselect::{Event, FilterableSelect, Key, Modifiers, Target};

use crate::view::{Hit, Layout};

pub fn is_quit(raw: &CrosstermEvent) -> bool {
    match raw {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        }
        _ => false,
    }
}

/// Which part of the widget holds focus, if any.
fn focused(select: &FilterableSelect) -> Option<Target> {
    if select.input().is_focused() {
        Some(Target::Input)
    } else if select.list().is_focused() {
        Some(Target::List)
    } else {
        None
    }
}

/// Move focus to `target`, emitting blur for the old holder first.
fn move_focus(select: &FilterableSelect, target: Option<Target>) -> Vec<Event> {
    let current = focused(select);
    if current == target {
        return Vec::new();
    }
    let mut events = Vec::new();
    if let Some(old) = current {
        events.push(Event::Blur { target: old });
    }
    if let Some(new) = target {
        events.push(Event::Focus { target: new });
    }
    events
}

/// Events for a mouse press that landed on `hit`.
pub fn click_events(select: &FilterableSelect, hit: Hit) -> Vec<Event> {
    match hit {
        Hit::Input => {
            let mut events = move_focus(select, Some(Target::Input));
            events.push(Event::Click {
                target: Target::Input,
            });
            events
        }
        Hit::List(row) => {
            let mut events = move_focus(select, Some(Target::List));
            if let Some(index) = row {
                events.push(Event::Change { index });
            }
            events.push(Event::Click {
                target: Target::List,
            });
            events
        }
        Hit::Window => {
            let mut events = move_focus(select, None);
            events.push(Event::Click {
                target: Target::Window,
            });
            events
        }
    }
}

/// Turn one terminal event into widget events.
pub fn translate(raw: &CrosstermEvent, select: &FilterableSelect, layout: &Layout) -> Vec<Event> {
    match raw {
        CrosstermEvent::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return Vec::new();
            }
            let key: Key = key_event.code.into();
            let modifiers: Modifiers = key_event.modifiers.into();

            if key == Key::Tab {
                let next = match focused(select) {
                    Some(Target::Input) if select.list().is_visible() => Some(Target::List),
                    _ => Some(Target::Input),
                };
                return move_focus(select, next);
            }

            match focused(select) {
                Some(target) => vec![Event::Key {
                    target,
                    key,
                    modifiers,
                }],
                None => Vec::new(),
            }
        }
        CrosstermEvent::Mouse(mouse) => {
            if !matches!(mouse.kind, MouseEventKind::Down(_)) {
                return Vec::new();
            }
            click_events(select, layout.hit(select, mouse.column, mouse.row))
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crossterm::event::{KeyEvent, MouseButton, MouseEvent};
    use filterselect::{Outcome, SelectList, SelectOption, TextInput};

    use super::*;

    fn open_select() -> FilterableSelect {
        let list = SelectList::with_options(
            ["--", "Apple", "Banana", "Avocado"]
                .into_iter()
                .map(SelectOption::text),
        );
        let mut select = FilterableSelect::new(TextInput::default().outer_height(3), list);
        select.on_input_focus();
        select
    }

    fn run(select: &mut FilterableSelect, events: &[Event]) -> Vec<Outcome> {
        let now = Instant::now();
        events
            .iter()
            .flat_map(|event| select.dispatch(event, now))
            .collect()
    }

    #[test]
    fn test_list_pick_orders_change_before_click() {
        let select = open_select();

        let events = click_events(&select, Hit::List(Some(2)));

        assert_eq!(
            events,
            vec![
                Event::Blur { target: Target::Input },
                Event::Focus { target: Target::List },
                Event::Change { index: 2 },
                Event::Click { target: Target::List },
            ]
        );
    }

    #[test]
    fn test_list_pick_commits_option() {
        let mut select = open_select();
        let events = click_events(&select, Hit::List(Some(2)));

        let outcomes = run(&mut select, &events);

        assert!(outcomes.contains(&Outcome::Committed {
            label: "Banana".into(),
            value: Some("Banana".into()),
        }));
        assert_eq!(select.input().value(), "Banana");
        assert!(!select.is_open());
        assert_eq!(select.next_deadline(), None);
    }

    #[test]
    fn test_input_click_focuses_then_clicks() {
        let mut select = open_select();
        run(&mut select, &[Event::Click { target: Target::Window }]);
        run(&mut select, &[Event::Blur { target: Target::Input }]);

        let events = click_events(&select, Hit::Input);

        assert_eq!(
            events,
            vec![
                Event::Focus { target: Target::Input },
                Event::Click { target: Target::Input },
            ]
        );
        run(&mut select, &events);
        assert!(select.is_open());
    }

    #[test]
    fn test_input_click_while_focused_only_clicks() {
        let select = open_select();

        assert_eq!(
            click_events(&select, Hit::Input),
            vec![Event::Click { target: Target::Input }]
        );
    }

    #[test]
    fn test_window_click_blurs_then_closes() {
        let mut select = open_select();

        let events = click_events(&select, Hit::Window);

        assert_eq!(
            events,
            vec![
                Event::Blur { target: Target::Input },
                Event::Click { target: Target::Window },
            ]
        );
        run(&mut select, &events);
        assert!(!select.is_open());
        assert_eq!(select.input().value(), "--");
    }

    #[test]
    fn test_mouse_press_on_list_row_translates() {
        let select = open_select();
        let layout = Layout::compute(&select);
        let press = CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: layout.list.x + 1,
            row: layout.list.y + 2,
            modifiers: KeyModifiers::NONE,
        });

        let events = translate(&press, &select, &layout);

        assert!(events.contains(&Event::Change { index: 1 }));
    }

    #[test]
    fn test_tab_moves_focus_to_open_list() {
        let select = open_select();
        let layout = Layout::compute(&select);
        let tab = CrosstermEvent::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));

        assert_eq!(
            translate(&tab, &select, &layout),
            vec![
                Event::Blur { target: Target::Input },
                Event::Focus { target: Target::List },
            ]
        );
    }

    #[test]
    fn test_ctrl_q_quits() {
        let quit = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        let plain = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));

        assert!(is_quit(&quit));
        assert!(!is_quit(&plain));
    }
}
