//! A searchable single-select dropdown.
//!
//! [`FilterableSelect`] binds a [`TextInput`] to a [`SelectList`]: typing
//! hides options whose label does not contain the search text, focusing
//! the input shows the list as an overlay, and picking an option or
//! leaving the widget copies the selected label back into the input.
//!
//! The component owns no terminal or window. Hosts translate their own
//! input into [`Event`]s, call [`FilterableSelect::dispatch`], and call
//! [`FilterableSelect::tick`] once [`FilterableSelect::next_deadline`]
//! passes.

pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod filter;
pub mod select;
pub mod state;

pub use config::SelectConfig;
pub use element::{SelectList, SelectOption, TextEditResult, TextInput, Visibility};
pub use error::{Result, SelectError};
pub use event::{Event, Key, Modifiers, Target};
pub use filter::FilterQuery;
pub use select::{FilterableSelect, Outcome};
pub use state::{CloseTimer, CloseToken, DropdownState, PendingClose};
