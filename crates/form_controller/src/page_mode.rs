use shared::domain::BusinessId;

pub const CREATE_PAGE_PATH: &str = "/cadastrar";
pub const LIST_PAGE_PATH: &str = "/empresas";
const DETAIL_PAGE_MARKER: &str = "/empresa/";

pub fn detail_page_path(id: BusinessId) -> String {
    format!("{DETAIL_PAGE_MARKER}{id}")
}

/// Which handlers a page gets. Decided once from the path at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    Create,
    Detail,
    Other,
}

impl PageMode {
    pub fn from_path(path: &str) -> Self {
        if path == CREATE_PAGE_PATH || path.contains(CREATE_PAGE_PATH) {
            PageMode::Create
        } else if path.contains(DETAIL_PAGE_MARKER) {
            PageMode::Detail
        } else {
            PageMode::Other
        }
    }
}
