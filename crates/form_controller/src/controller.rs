use tracing::debug;

use crate::{create::CreatePage, detail::DetailPage, page_mode::PageMode};

/// Handlers bound for the current page.
#[derive(Debug)]
pub enum BoundPage {
    Create(CreatePage),
    Detail(DetailPage),
    Unbound,
}

/// Page load entry point.
pub fn initialize(mode: PageMode) -> BoundPage {
    debug!(?mode, "binding page handlers");
    match mode {
        PageMode::Create => BoundPage::Create(CreatePage),
        PageMode::Detail => BoundPage::Detail(DetailPage::default()),
        PageMode::Other => BoundPage::Unbound,
    }
}
