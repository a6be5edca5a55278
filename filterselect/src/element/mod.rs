mod input;
mod list;

pub use input::{TextEditResult, TextInput};
pub use list::{SelectList, SelectOption, Visibility};
