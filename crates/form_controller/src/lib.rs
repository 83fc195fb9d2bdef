//! Form controller for the business directory pages: binds the create and
//! detail pages, validates fields, calls the backend, and reflects the result
//! on the page through a [`PageSurface`].

pub mod controller;
pub mod create;
pub mod detail;
pub mod layout;
pub mod memory;
pub mod outcome;
pub mod page_mode;
pub mod slots;
mod submit;
pub mod surface;
pub mod validation;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

pub use controller::{initialize, BoundPage};
pub use create::CreatePage;
pub use detail::DetailPage;
pub use memory::MemoryPage;
pub use outcome::{ErrorRoute, Flow, FlowOutcome};
pub use page_mode::PageMode;
pub use surface::{DetailCard, PageSurface};
