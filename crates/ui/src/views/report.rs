use dioxus::prelude::*;
use services::SessionReport;

use crate::vm::{CHART_SIZE, ChartConfig, ReportVm, map_report, review_toggle_label, strings};

#[component]
pub fn ReportView(report: SessionReport, on_try_again: EventHandler<()>) -> Element {
    let vm = map_report(&report);
    let text = strings(vm.locale);

    rsx! {
        section { class: "report",
            if vm.timed_out {
                p { class: "report__banner", "{text.time_up}" }
            }

            div { class: "report__summary",
                DoughnutChart { chart: vm.chart.clone() }
                ul { class: "report__legend",
                    for category in vm.categories.iter().cloned() {
                        li { key: "{category.label}", class: "report__legend-item",
                            span {
                                class: "report__swatch",
                                style: "background-color: {category.color}",
                            }
                            span { class: "report__line", "{category.line}" }
                            span { class: "report__percent", "{category.percent_label}" }
                        }
                    }
                }
            }

            dl { class: "report__facts",
                dt { "{text.score}" }
                dd { class: "report__score", "{vm.score_label}" }

                dt { "{text.time_used}" }
                dd { "{vm.time_used_label}" }

                dt { "{text.completed_at}" }
                dd { "{vm.completed_at_label}" }
            }

            ReviewList { vm: vm.clone() }

            button {
                class: "btn btn--primary",
                id: "report-try-again",
                r#type: "button",
                onclick: move |_| on_try_again.call(()),
                "{text.try_again}"
            }
        }
    }
}

#[component]
fn DoughnutChart(chart: ChartConfig) -> Element {
    let arcs = chart.arcs();
    let (radius, width) = chart.ring();
    let center = CHART_SIZE / 2.0;
    let rotate = format!("rotate(-90 {center} {center})");
    let description = chart.description();

    rsx! {
        svg {
            class: "report__chart",
            view_box: "0 0 200 200",
            width: "200",
            height: "200",
            role: "img",
            "aria-label": "{description}",
            circle {
                cx: "{center}",
                cy: "{center}",
                r: "{radius}",
                fill: "none",
                stroke: "var(--chart-track)",
                stroke_width: "{width}",
            }
            for arc in arcs {
                circle {
                    key: "{arc.color}",
                    cx: "{center}",
                    cy: "{center}",
                    r: "{arc.radius}",
                    fill: "none",
                    stroke: "{arc.color}",
                    stroke_width: "{arc.width}",
                    stroke_dasharray: arc.dasharray(),
                    stroke_dashoffset: arc.dashoffset(),
                    transform: "{rotate}",
                    title { "{arc.label}" }
                }
            }
            text {
                class: "report__chart-label",
                x: "{center}",
                y: "{center}",
                text_anchor: "middle",
                dominant_baseline: "middle",
                "{chart.center_label}"
            }
        }
    }
}

#[component]
fn ReviewList(vm: ReportVm) -> Element {
    let text = strings(vm.locale);
    let mut open = use_signal(|| false);
    let toggle_label = review_toggle_label(vm.locale, open());

    rsx! {
        details { class: "review", open: open(),
            summary {
                onclick: move |evt| {
                    evt.prevent_default();
                    open.toggle();
                },
                "{toggle_label}"
            }
            ol { class: "review__list",
                for row in vm.reviews.iter().cloned() {
                    li { key: "{row.number}", class: "review__row",
                        p { class: "review__prompt", "{row.number}. {row.prompt}" }
                        p {
                            class: row.answer_class(),
                            "{text.your_answer}: {row.selected}"
                        }
                        p { class: "review__correct", "{text.correct_answer}: {row.correct_answer}" }
                    }
                }
            }
        }
    }
}
