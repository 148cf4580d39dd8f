mod quiz_vm;
mod report_vm;
mod strings;
mod time_fmt;

pub use quiz_vm::{ConfirmVm, OptionVm, QuizIntent, QuizScreenVm, map_quiz_screen};
pub use report_vm::{
    CHART_SIZE, CategoryLineVm, ChartConfig, ChartSegment, DoughnutArc, ReportVm, ReviewRowVm,
    map_report, review_toggle_label,
};
pub use strings::{UiStrings, strings};
pub use time_fmt::{format_countdown, format_datetime, format_elapsed};
