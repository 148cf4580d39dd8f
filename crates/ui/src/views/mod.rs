mod quiz;
mod report;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::QuizView;
pub use report::ReportView;
pub use state::{Notice, ViewError};
