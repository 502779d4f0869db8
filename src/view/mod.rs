//! List view over the country collection: pagination, selection, bulk delete and the
//! edit side panel, plus an HTML renderer for the page.

mod list;
mod panel;
mod render;

pub use list::{paginate, select_all_checked, ListView, PageWindow, Phase, PAGE_SIZE};
pub use panel::{EditPanel, PanelError};
pub use render::{format_last_update, render_page};
