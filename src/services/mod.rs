pub mod live;
mod render;
pub mod report;

pub use live::LiveService;
pub use report::ReportService;
