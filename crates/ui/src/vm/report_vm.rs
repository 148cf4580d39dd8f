use std::f64::consts::PI;

use quiz_core::model::{Locale, Outcome};
use services::{SessionReport, SubmitReason};

use crate::vm::strings::strings;
use crate::vm::time_fmt::{format_datetime, format_elapsed};

pub const COLOR_CORRECT: &str = "#4caf50";
pub const COLOR_INCORRECT: &str = "#e53935";
pub const COLOR_UNATTEMPTED: &str = "#fbc02d";

/// Doughnut geometry in SVG user units (viewBox `0 0 200 200`).
pub const CHART_SIZE: f64 = 200.0;
const OUTER_RADIUS: f64 = 90.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSegment {
    pub label: String,
    pub percent: f64,
    pub color: &'static str,
}

/// Typed description of the results doughnut.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub segments: Vec<ChartSegment>,
    pub center_label: String,
    /// Share of the radius that is hollow.
    pub cutout_percent: u8,
}

/// One stroked arc of the doughnut, ready for `stroke-dasharray`.
#[derive(Clone, Debug, PartialEq)]
pub struct DoughnutArc {
    /// Hover text, e.g. "Correct: 40.00%".
    pub label: String,
    pub color: &'static str,
    pub radius: f64,
    pub width: f64,
    pub dash: f64,
    pub gap: f64,
    pub offset: f64,
}

impl DoughnutArc {
    #[must_use]
    pub fn dasharray(&self) -> String {
        format!("{:.3} {:.3}", self.dash, self.gap)
    }

    #[must_use]
    pub fn dashoffset(&self) -> String {
        format!("{:.3}", self.offset)
    }
}

impl ChartConfig {
    /// Ring radius (centre of the stroke) and stroke width.
    #[must_use]
    pub fn ring(&self) -> (f64, f64) {
        let inner = OUTER_RADIUS * f64::from(self.cutout_percent.min(100)) / 100.0;
        let width = OUTER_RADIUS - inner;
        (inner + width / 2.0, width)
    }

    /// Accessible summary of every segment, zero-sized ones included.
    #[must_use]
    pub fn description(&self) -> String {
        let parts: Vec<String> = self
            .segments
            .iter()
            .map(|segment| format!("{} {:.2}%", segment.label, segment.percent))
            .collect();
        format!("{}. {}", self.center_label, parts.join(", "))
    }

    /// Arcs for the non-empty segments, laid end to end.
    #[must_use]
    pub fn arcs(&self) -> Vec<DoughnutArc> {
        let (radius, width) = self.ring();
        let circumference = 2.0 * PI * radius;
        let mut start = 0.0;
        let mut arcs = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            let dash = segment.percent / 100.0 * circumference;
            if dash > 0.0 {
                arcs.push(DoughnutArc {
                    label: format!("{}: {:.2}%", segment.label, segment.percent),
                    color: segment.color,
                    radius,
                    width,
                    dash,
                    gap: circumference - dash,
                    offset: -start,
                });
            }
            start += dash;
        }
        arcs
    }
}

/// Summary text of the collapsible answer review.
#[must_use]
pub fn review_toggle_label(locale: Locale, open: bool) -> &'static str {
    let text = strings(locale);
    if open { text.hide_answers } else { text.show_answers }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryLineVm {
    pub outcome: Outcome,
    pub label: String,
    /// "Correct: 2 / 5"
    pub line: String,
    /// Two decimals, e.g. "40.00%".
    pub percent_label: String,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRowVm {
    pub number: usize,
    pub prompt: String,
    pub selected: String,
    pub answered: bool,
    pub correct_answer: String,
    pub outcome: Outcome,
}

impl ReviewRowVm {
    #[must_use]
    pub fn answer_class(&self) -> &'static str {
        if self.answered {
            "review__answer"
        } else {
            "review__answer review__answer--missing"
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportVm {
    pub locale: Locale,
    pub chart: ChartConfig,
    pub categories: Vec<CategoryLineVm>,
    pub score_label: String,
    pub time_used_label: String,
    pub completed_at_label: String,
    pub timed_out: bool,
    pub reviews: Vec<ReviewRowVm>,
}

fn color_for(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Correct => COLOR_CORRECT,
        Outcome::Incorrect => COLOR_INCORRECT,
        Outcome::Unattempted => COLOR_UNATTEMPTED,
    }
}

fn label_for(outcome: Outcome, locale: Locale) -> &'static str {
    let text = strings(locale);
    match outcome {
        Outcome::Correct => text.correct,
        Outcome::Incorrect => text.incorrect,
        Outcome::Unattempted => text.unattempted,
    }
}

#[must_use]
pub fn map_report(report: &SessionReport) -> ReportVm {
    let locale = report.locale;
    let text = strings(locale);
    let result = report.result;
    let total = result.total();
    let score_label = format!("{}: {}", text.score, result.score());

    let segments = Outcome::ALL
        .iter()
        .map(|&outcome| ChartSegment {
            label: label_for(outcome, locale).to_string(),
            percent: report.percent(outcome),
            color: color_for(outcome),
        })
        .collect();

    let categories = Outcome::ALL
        .iter()
        .map(|&outcome| {
            let label = label_for(outcome, locale);
            CategoryLineVm {
                outcome,
                label: label.to_string(),
                line: format!("{label}: {} / {total}", result.count(outcome)),
                percent_label: format!("{:.2}%", report.percent(outcome)),
                color: color_for(outcome),
            }
        })
        .collect();

    let reviews = report
        .reviews
        .iter()
        .map(|review| ReviewRowVm {
            number: review.number,
            prompt: review.prompt.clone(),
            selected: review
                .selected
                .clone()
                .unwrap_or_else(|| text.not_answered.to_string()),
            answered: review.selected.is_some(),
            correct_answer: review.correct_answer.clone(),
            outcome: review.outcome,
        })
        .collect();

    ReportVm {
        locale,
        chart: ChartConfig {
            segments,
            center_label: score_label.clone(),
            cutout_percent: 70,
        },
        categories,
        score_label,
        time_used_label: format_elapsed(report.time_used_secs),
        completed_at_label: format_datetime(report.submitted_at),
        timed_out: report.reason == SubmitReason::TimeExpired,
        reviews,
    }
}
