//! The filterable select component.

use std::time::Instant;

use crate::config::SelectConfig;
use crate::element::{SelectList, TextEditResult, TextInput, Visibility};
use crate::error::{Result, SelectError};
use crate::event::{Event, Key, Modifiers, Target};
use crate::filter::{self, FilterQuery};
use crate::state::{CloseTimer, DropdownState};

/// What a handled event did. Hosts use this to redraw or report selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The overlay was shown.
    Opened,
    /// Option visibility was recomputed.
    Filtered { visible: usize },
    /// The keyboard moved the selection without committing.
    Highlighted { index: usize },
    /// The selected option's label was copied into the input.
    Committed { label: String, value: Option<String> },
    /// The overlay was hidden.
    Closed,
    /// An input blur scheduled a close.
    CloseScheduled { deadline: Instant },
    /// A pending close was dropped before it fired.
    CloseCancelled,
    /// The event was rejected and changed nothing.
    Ignored,
}

/// A text input bound to an option list.
///
/// Typing filters the list, focusing the input shows the list as an
/// overlay, and choosing an option (or leaving the widget) copies the
/// selected label back into the input.
#[derive(Debug)]
pub struct FilterableSelect {
    input: TextInput,
    list: SelectList,
    config: SelectConfig,
    state: DropdownState,
    close_timer: CloseTimer,
}

impl FilterableSelect {
    /// Bind `input` and `list` with the default configuration.
    pub fn new(input: TextInput, list: SelectList) -> Self {
        Self::build(input, list, SelectConfig::default())
    }

    /// Bind `input` and `list` with a custom configuration.
    pub fn with_config(input: TextInput, list: SelectList, config: SelectConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(input, list, config))
    }

    fn build(input: TextInput, mut list: SelectList, config: SelectConfig) -> Self {
        list.set_top(input.height());
        list.set_size(config.row_count(list.child_count()));
        list.set_visibility(Visibility::Hidden);
        log::debug!(
            "[filterselect] init options={} size={} top={}",
            list.child_count(),
            list.size(),
            list.top()
        );
        Self {
            input,
            list,
            config,
            state: DropdownState::Closed,
            close_timer: CloseTimer::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn list(&self) -> &SelectList {
        &self.list
    }

    /// Mutable list access for populating options.
    pub fn list_mut(&mut self) -> &mut SelectList {
        &mut self.list
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DropdownState::Open
    }

    /// When the host should next call `tick`, if ever.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.close_timer.deadline()
    }

    /// Row count the list gets when opened or when filtering is cleared.
    pub fn row_count(&self) -> usize {
        self.config.row_count(self.list.child_count())
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Route one host event to its handler.
    pub fn dispatch(&mut self, event: &Event, now: Instant) -> Vec<Outcome> {
        match event {
            Event::Key {
                target,
                key,
                modifiers,
            } => self.on_key(*target, *key, *modifiers),
            Event::Click { target } => self.on_click(*target),
            Event::Focus { target } => match target {
                Target::Input => self.on_input_focus(),
                Target::List => self.on_list_focus(),
                Target::Window => Vec::new(),
            },
            Event::Blur { target } => match target {
                Target::Input => self.on_input_blur(now),
                Target::List => {
                    self.list.set_focused(false);
                    Vec::new()
                }
                Target::Window => Vec::new(),
            },
            Event::Change { index } => {
                if *index >= self.list.child_count() {
                    log::warn!(
                        "[filterselect] ignoring change to index {} (list has {} options)",
                        index,
                        self.list.child_count()
                    );
                    return vec![Outcome::Ignored];
                }
                self.on_list_change(*index)
            }
        }
    }

    /// Fire the pending blur close if it is due.
    ///
    /// The close is skipped when the list holds focus by then.
    pub fn tick(&mut self, now: Instant) -> Vec<Outcome> {
        let Some(pending) = self.close_timer.take_due(now) else {
            return Vec::new();
        };
        if self.list.is_focused() {
            log::debug!("[filterselect] close {:?} skipped, list focused", pending.token);
            return Vec::new();
        }
        log::debug!("[filterselect] close {:?} fired", pending.token);
        self.reset()
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Recompute option visibility from `text`.
    ///
    /// Short text shows every option and restores the default row count.
    pub fn on_search_text_changed(&mut self, text: &str) -> usize {
        let query = FilterQuery::new(text);
        let min_len = self.config.min_query_len;
        let visible = filter::apply(self.list.options_mut(), &query, min_len);
        if !query.is_active(min_len) {
            self.list.set_size(self.row_count());
        }
        log::debug!(
            "[filterselect] filter query={:?} active={} visible={}",
            query.as_str(),
            query.is_active(min_len),
            visible
        );
        visible
    }

    /// Show the overlay. Always ends in `Open`, whatever the prior state.
    pub fn on_input_focus(&mut self) -> Vec<Outcome> {
        self.input.set_focused(true);
        self.list.set_focused(false);
        let mut outcomes = Vec::new();
        if self.close_timer.cancel() {
            outcomes.push(Outcome::CloseCancelled);
        }
        self.open();
        outcomes.push(Outcome::Opened);
        outcomes
    }

    /// The list took focus; a pending blur close no longer applies.
    pub fn on_list_focus(&mut self) -> Vec<Outcome> {
        self.list.set_focused(true);
        self.input.set_focused(false);
        if self.close_timer.cancel() {
            log::debug!("[filterselect] list focused, pending close cancelled");
            vec![Outcome::CloseCancelled]
        } else {
            Vec::new()
        }
    }

    /// The input lost focus; close after the grace delay unless the list
    /// takes focus first.
    pub fn on_input_blur(&mut self, now: Instant) -> Vec<Outcome> {
        self.input.set_focused(false);
        if !self.is_open() {
            return Vec::new();
        }
        let pending = self.close_timer.schedule(now, self.config.blur_grace);
        log::debug!(
            "[filterselect] input blurred, close {:?} in {:?}",
            pending.token,
            self.config.blur_grace
        );
        vec![Outcome::CloseScheduled {
            deadline: pending.deadline,
        }]
    }

    /// The user picked option `index`: select it and commit.
    pub fn on_list_change(&mut self, index: usize) -> Vec<Outcome> {
        self.list.set_selected(index);
        self.reset()
    }

    /// Programmatically choose an option, committing it like a user pick.
    pub fn select_index(&mut self, index: usize) -> Result<Vec<Outcome>> {
        let len = self.list.child_count();
        if index >= len {
            return Err(SelectError::OptionOutOfRange { index, len });
        }
        Ok(self.on_list_change(index))
    }

    /// A click anywhere outside the input.
    pub fn on_window_click(&mut self) -> Vec<Outcome> {
        if self.is_open() {
            self.reset()
        } else {
            Vec::new()
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    fn open(&mut self) {
        self.list.set_size(self.row_count());
        self.list.set_z_index(self.config.overlay_z_index);
        self.list.set_visibility(Visibility::Visible);
        if self.state != DropdownState::Open {
            log::debug!("[filterselect] open size={}", self.list.size());
        }
        self.state = DropdownState::Open;
    }

    /// Copy the selected label into the input and hide the overlay.
    ///
    /// Option visibility is left as the last search made it; it can trail
    /// the committed input text until the next edit re-runs the filter.
    fn reset(&mut self) -> Vec<Outcome> {
        self.close_timer.cancel();
        let label = self.list.selected_text().to_string();
        let value = self.list.selected().map(|o| o.value.clone());
        self.input.set_value(label.clone());
        self.list.set_visibility(Visibility::Hidden);

        let mut outcomes = vec![Outcome::Committed { label, value }];
        if self.state == DropdownState::Open {
            log::debug!("[filterselect] reset, committed {:?}", self.input.value());
            outcomes.push(Outcome::Closed);
        }
        self.state = DropdownState::Closed;
        outcomes
    }

    // -------------------------------------------------------------------------
    // Input handling
    // -------------------------------------------------------------------------

    fn on_click(&mut self, target: Target) -> Vec<Outcome> {
        match target {
            // Handled at the input; does not bubble to the window.
            Target::Input => {
                if self.input.is_focused() && self.is_open() {
                    Vec::new()
                } else {
                    self.on_input_focus()
                }
            }
            Target::List | Target::Window => self.on_window_click(),
        }
    }

    fn on_key(&mut self, target: Target, key: Key, modifiers: Modifiers) -> Vec<Outcome> {
        match target {
            Target::Input => self.on_input_key(key, modifiers),
            Target::List => self.on_list_key(key),
            Target::Window => Vec::new(),
        }
    }

    fn on_input_key(&mut self, key: Key, modifiers: Modifiers) -> Vec<Outcome> {
        if self.is_open() {
            match key {
                Key::Up | Key::Down => return self.move_selection(key == Key::Down),
                Key::Enter | Key::Escape => return self.reset(),
                _ => {}
            }
        }

        match self.input.handle_key(key, modifiers) {
            TextEditResult::Changed => {
                let mut outcomes = Vec::new();
                if !self.is_open() && self.input.is_focused() {
                    self.open();
                    outcomes.push(Outcome::Opened);
                }
                let text = self.input.value().to_string();
                let visible = self.on_search_text_changed(&text);
                outcomes.push(Outcome::Filtered { visible });
                outcomes
            }
            TextEditResult::Handled | TextEditResult::Ignored => Vec::new(),
        }
    }

    fn on_list_key(&mut self, key: Key) -> Vec<Outcome> {
        match key {
            Key::Up | Key::Down => self.move_selection(key == Key::Down),
            Key::Enter => match self.list.selected_index() {
                Some(index) => self.on_list_change(index),
                None => Vec::new(),
            },
            Key::Escape if self.is_open() => self.reset(),
            _ => Vec::new(),
        }
    }

    fn move_selection(&mut self, forward: bool) -> Vec<Outcome> {
        match self.list.next_visible(self.list.selected_index(), forward) {
            Some(index) => {
                self.list.set_selected(index);
                vec![Outcome::Highlighted { index }]
            }
            None => Vec::new(),
        }
    }
}
