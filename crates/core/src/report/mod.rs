//! Report orchestration over injected data-access collaborators.
//!
//! The engine has no wire protocol or persistence of its own; request
//! handlers hand it transaction sources as closures and receive plain,
//! fully-serializable report values back.

pub mod cache;
pub mod error;
pub mod service;
pub mod types;


pub use cache::ReportCache;
pub use error::ReportError;
pub use service::ReportService;
pub use types::{
    DebtorReport, DebtorReportParams, ReportScope, ServiceLineMetrics, WipReport, WipReportParams,
};
