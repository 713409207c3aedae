mod central_panel;
mod placement_panel;
mod tools_panel;

pub use central_panel::{central_panel, text_entry_window};
pub use placement_panel::placement_panel;
pub use tools_panel::tools_panel;
