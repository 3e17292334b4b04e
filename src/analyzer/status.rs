#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 401, aborts the run.
    Unauthorized,
    /// 403, aborts the run.
    Forbidden,
    NotFound,
    ServerError,
    Scannable,
}

pub struct StatusAnalyzer;

impl StatusAnalyzer {
    pub fn classify(status: u16) -> StatusClass {
        match status {
            401 => StatusClass::Unauthorized,
            403 => StatusClass::Forbidden,
            404 => StatusClass::NotFound,
            s if s >= 500 => StatusClass::ServerError,
            _ => StatusClass::Scannable,
        }
    }
}
