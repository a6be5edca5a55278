use std::io;

use crossterm::style::Attribute;
use filterselect::FilterableSelect;
use unicode_width::UnicodeWidthChar;

use crate::terminal::Terminal;

const ORIGIN_X: u16 = 2;
const ORIGIN_Y: u16 = 2;
const MIN_WIDTH: u16 = 30;

/// A rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

/// Where a mouse click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Input,
    /// Inside the list overlay; `Some` when on an option row.
    List(Option<usize>),
    Window,
}

/// Screen geometry of the widget for one frame.
#[derive(Debug)]
pub struct Layout {
    pub input: Rect,
    pub list: Rect,
    /// Option index shown on each list row.
    pub rows: Vec<usize>,
}

impl Layout {
    pub fn compute(select: &FilterableSelect) -> Self {
        let list = select.list();
        let width = to_cells(list.content_width()).saturating_add(4).max(MIN_WIDTH);
        let input = Rect {
            x: ORIGIN_X,
            y: ORIGIN_Y,
            width,
            height: select.input().height(),
        };

        let visible: Vec<usize> = list
            .options()
            .iter()
            .enumerate()
            .filter(|(_, o)| o.visible)
            .map(|(i, _)| i)
            .collect();
        let size = list.size().max(1);

        // Keep the selected option in view
        let selected_pos = list
            .selected_index()
            .and_then(|sel| visible.iter().position(|&i| i == sel))
            .unwrap_or(0);
        let scroll = (selected_pos + 1).saturating_sub(size);
        let rows: Vec<usize> = visible.into_iter().skip(scroll).take(size).collect();

        let list_rect = Rect {
            x: ORIGIN_X,
            y: ORIGIN_Y.saturating_add(list.top()),
            width,
            height: to_cells(size).saturating_add(2),
        };

        Self {
            input,
            list: list_rect,
            rows,
        }
    }

    /// Resolve a click, honouring the list only while it is shown.
    pub fn hit(&self, select: &FilterableSelect, x: u16, y: u16) -> Hit {
        if select.list().is_visible() && self.list.contains(x, y) {
            let row = y.checked_sub(self.list.y.saturating_add(1)).map(usize::from);
            return Hit::List(row.and_then(|r| self.rows.get(r).copied()));
        }
        if self.input.contains(x, y) {
            return Hit::Input;
        }
        Hit::Window
    }
}

pub fn render(
    term: &mut Terminal,
    select: &FilterableSelect,
    layout: &Layout,
    status: &str,
) -> io::Result<()> {
    term.begin_frame()?;

    term.print(
        ORIGIN_X,
        0,
        "Type to filter, Up/Down to move, Enter to pick, Tab to switch, Ctrl+Q to quit",
        Attribute::Dim,
    )?;

    let input = select.input();
    let input_attr = if input.is_focused() {
        Attribute::Bold
    } else {
        Attribute::Reset
    };
    draw_box(term, layout.input, input_attr)?;
    let inner = layout.input.width.saturating_sub(2) as usize;
    term.print(layout.input.x + 1, layout.input.y + 1, &fit(input.value(), inner), Attribute::Reset)?;

    // Content underneath the overlay
    let below = layout.input.y.saturating_add(layout.input.height).saturating_add(1);
    term.print(ORIGIN_X, below, "Selected:", Attribute::Dim)?;
    term.print(ORIGIN_X, below.saturating_add(1), status, Attribute::Reset)?;

    let list = select.list();
    if list.is_visible() {
        let list_attr = if list.is_focused() {
            Attribute::Bold
        } else {
            Attribute::Reset
        };
        draw_box(term, layout.list, list_attr)?;
        let blank = " ".repeat(inner);
        for row in 0..layout.list.height.saturating_sub(2) {
            let y = layout.list.y.saturating_add(1 + row);
            match layout.rows.get(row as usize) {
                Some(&index) => {
                    let option = &list.options()[index];
                    let attr = if list.selected_index() == Some(index) {
                        Attribute::Reverse
                    } else {
                        Attribute::Reset
                    };
                    term.print(layout.list.x + 1, y, &fit(&option.label, inner), attr)?;
                }
                None => term.print(layout.list.x + 1, y, &blank, Attribute::Reset)?,
            }
        }
    }

    let cursor = input.is_focused().then(|| {
        let col = to_cells(input.cursor_column().min(inner.saturating_sub(1)));
        (layout.input.x.saturating_add(1 + col), layout.input.y + 1)
    });
    term.end_frame(cursor)
}

fn draw_box(term: &mut Terminal, rect: Rect, attr: Attribute) -> io::Result<()> {
    if rect.width < 2 || rect.height < 2 {
        return Ok(());
    }
    let horizontal = "─".repeat(rect.width as usize - 2);
    term.print(rect.x, rect.y, &format!("┌{horizontal}┐"), attr)?;
    let right = rect.x.saturating_add(rect.width - 1);
    let bottom = rect.y.saturating_add(rect.height - 1);
    for y in rect.y + 1..bottom {
        term.print(rect.x, y, "│", attr)?;
        term.print(right, y, "│", attr)?;
    }
    term.print(rect.x, bottom, &format!("└{horizontal}┘"), attr)
}

/// Clamp a column or row count to the terminal coordinate range.
fn to_cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Truncate or pad `text` to exactly `width` columns.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}
