use unicode_width::UnicodeWidthStr;

/// A single entry in the option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    /// Toggled by filtering only.
    pub visible: bool,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            visible: true,
        }
    }

    /// An option whose value is its label.
    pub fn text(label: impl Into<String>) -> Self {
        let label = label.into();
        Self::new(label.clone(), label)
    }
}

/// Whether the list overlay is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// The dropdown list element.
///
/// Options are owned by whoever populates the list; the select component
/// only flips their `visible` flag and reads the selected one.
#[derive(Debug, Clone, Default)]
pub struct SelectList {
    options: Vec<SelectOption>,
    selected: Option<usize>,
    size: usize,
    z_index: i32,
    visibility: Visibility,
    top: u16,
    focused: bool,
}

impl SelectList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list with initial options, the first one selected.
    pub fn with_options(options: impl IntoIterator<Item = SelectOption>) -> Self {
        let options: Vec<_> = options.into_iter().collect();
        let selected = if options.is_empty() { None } else { Some(0) };
        Self {
            options,
            selected,
            ..Default::default()
        }
    }

    // -------------------------------------------------------------------------
    // Options
    // -------------------------------------------------------------------------

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub(crate) fn options_mut(&mut self) -> &mut [SelectOption] {
        &mut self.options
    }

    pub fn child_count(&self) -> usize {
        self.options.len()
    }

    /// Append an option. The first option pushed becomes selected.
    pub fn push(&mut self, option: SelectOption) {
        self.options.push(option);
        if self.selected.is_none() {
            self.selected = Some(0);
        }
    }

    /// Labels of options currently shown.
    pub fn visible_labels(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.visible)
            .map(|o| o.label.as_str())
            .collect()
    }

    /// Widest label, in terminal columns.
    pub fn content_width(&self) -> usize {
        self.options
            .iter()
            .map(|o| o.label.width())
            .max()
            .unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    /// Displayed text of the selected option, empty when nothing is selected.
    pub fn selected_text(&self) -> &str {
        self.selected().map(|o| o.label.as_str()).unwrap_or("")
    }

    pub(crate) fn set_selected(&mut self, index: usize) {
        self.selected = Some(index);
    }

    /// Next visible option index after `from` in the given direction.
    pub(crate) fn next_visible(&self, from: Option<usize>, forward: bool) -> Option<usize> {
        let len = self.options.len();
        if forward {
            let start = from.map(|i| i + 1).unwrap_or(0);
            (start..len).find(|&i| self.options[i].visible)
        } else {
            let end = from.unwrap_or(len);
            (0..end).rev().find(|&i| self.options[i].visible)
        }
    }

    // -------------------------------------------------------------------------
    // Presentation
    // -------------------------------------------------------------------------

    /// Number of rows drawn at once.
    pub fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn set_size(&mut self, size: usize) {
        self.size = size;
    }

    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    pub(crate) fn set_z_index(&mut self, z: i32) {
        self.z_index = z;
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Vertical offset below the input.
    pub fn top(&self) -> u16 {
        self.top
    }

    pub(crate) fn set_top(&mut self, top: u16) {
        self.top = top;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
