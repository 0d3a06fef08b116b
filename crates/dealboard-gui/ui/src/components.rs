mod main_action_bar;
mod page_header;
mod spinner;

pub use main_action_bar::MainActionBar;
pub use page_header::PageHeader;
pub use spinner::Spinner;
