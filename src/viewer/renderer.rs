use console::style;

use crate::models::{
    ExecutiveOverview, Financials, MarketCompetition, Metric, ProductValidation, Recommendations,
    StartupReport,
};
use crate::utils::formatting::{bar, format_money, format_number, wrap};
use super::state::SectionView;
use super::tabs::Tab;
use super::terms::BUSINESS_TERMS;

const TEXT_WIDTH: usize = 76;
const BAR_WIDTH: usize = 30;

/// Shown in place of a section the report does not contain.
pub const NO_DATA: &str = "No data available";

/// Render whichever section the view carries.
pub fn render_view(view: SectionView<'_>) -> String {
    let body = match view {
        SectionView::ExecutiveOverview(s) => s.map(render_overview),
        SectionView::MarketCompetition(s) => s.map(render_market),
        SectionView::ProductValidation(s) => s.map(render_validation),
        SectionView::Financials(s) => s.map(render_financials),
        SectionView::Recommendations(s) => s.map(render_recommendations),
        SectionView::BusinessTerms => Some(render_terms()),
    };
    let mut out = render_heading(view.tab().display_name());
    out.push_str(&body.unwrap_or_else(|| format!("  {}\n", style(NO_DATA).dim())));
    out
}

/// Render every tab of the report, one after another.
pub fn render_report(report: &StartupReport) -> String {
    Tab::ALL
        .iter()
        .map(|tab| render_view(SectionView::select(report, *tab)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sidebar equivalent: every tab on one line, the selected one highlighted.
pub fn render_nav(selected: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            let label = format!("{}:{}", tab.index() + 1, tab.slug());
            if *tab == selected {
                style(format!("[{}]", label)).cyan().bold().to_string()
            } else {
                style(format!(" {} ", label)).dim().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_overview(section: &ExecutiveOverview) -> String {
    let mut out = render_summary(&section.summary);
    out.push_str(&render_metrics("Key Metrics", &section.metrics));
    out.push_str(&render_bullets("Highlights", &section.highlights));
    out
}

pub fn render_financials(section: &Financials) -> String {
    let mut out = render_summary(&section.summary);

    if !section.revenue.is_empty() {
        out.push_str(&render_subheading("Revenue Projection"));
        let max = section
            .revenue
            .iter()
            .filter_map(|p| p.revenue)
            .fold(0.0_f64, f64::max);
        for point in &section.revenue {
            let amount = point.revenue.map(format_money).unwrap_or_else(|| "n/a".into());
            out.push_str(&format!(
                "  {:<10} {:>9}  {}\n",
                point.year,
                style(amount).white().bold(),
                style(bar(point.revenue.unwrap_or(0.0), max, BAR_WIDTH)).green(),
            ));
        }
    }

    out.push_str(&render_metrics("KPIs", &section.kpis));
    out.push_str(&render_bullets("Insights", &section.insights));
    out
}

pub fn render_market(section: &MarketCompetition) -> String {
    let mut out = render_summary(&section.summary);

    if !section.stats.is_empty() {
        out.push_str(&render_subheading("Market Share"));
        let max = section.stats.iter().filter_map(|s| s.value).fold(0.0_f64, f64::max);
        for share in &section.stats {
            let value = share.value.map(|v| format!("{}%", format_number(v))).unwrap_or_else(|| "n/a".into());
            out.push_str(&format!(
                "  {:<16} {:>6}  {}\n",
                share.name,
                style(value).white().bold(),
                style(bar(share.value.unwrap_or(0.0), max, BAR_WIDTH)).cyan(),
            ));
        }
    }

    out.push_str(&render_bullets("Growth Drivers", &section.drivers));

    if !section.competitors.is_empty() {
        out.push_str(&render_subheading("Competitors"));
        for c in &section.competitors {
            out.push_str(&format!("  {} {}\n", style("•").cyan(), style(&c.name).white().bold()));
            if !c.detail.is_empty() {
                out.push_str(&wrap(&c.detail, TEXT_WIDTH - 4, "    "));
                out.push('\n');
            }
        }
    }

    if !section.radar.is_empty() {
        out.push_str(&render_subheading("Competitive Position (You vs Competitors)"));
        let max = section
            .radar
            .iter()
            .flat_map(|p| [p.you, p.competitors])
            .flatten()
            .fold(0.0_f64, f64::max);
        for point in &section.radar {
            out.push_str(&format!(
                "  {:<14} {} {:<5} {}\n  {:<14} {} {:<5} {}\n",
                point.aspect,
                style("you ").green(),
                point.you.map(format_number).unwrap_or_else(|| "n/a".into()),
                style(bar(point.you.unwrap_or(0.0), max, BAR_WIDTH / 2)).green(),
                "",
                style("comp").yellow(),
                point.competitors.map(format_number).unwrap_or_else(|| "n/a".into()),
                style(bar(point.competitors.unwrap_or(0.0), max, BAR_WIDTH / 2)).yellow(),
            ));
        }
    }

    out.push_str(&render_bullets("Insights", &section.insights));
    out
}

pub fn render_validation(section: &ProductValidation) -> String {
    let mut out = render_summary(&section.summary);
    out.push_str(&render_metrics("Validation Metrics", &section.metrics));

    if !section.trends.is_empty() {
        out.push_str(&render_subheading("Adoption Trend"));
        out.push_str(&format!(
            "  {:<10} {:>8} {:>10}\n",
            style("Month").dim(),
            style("MVP").dim(),
            style("Advanced").dim(),
        ));
        for point in &section.trends {
            out.push_str(&format!(
                "  {:<10} {:>8} {:>10}\n",
                point.month,
                point.mvp.map(format_number).unwrap_or_else(|| "-".into()),
                point.advanced.map(format_number).unwrap_or_else(|| "-".into()),
            ));
        }
    }

    out.push_str(&render_bullets("User Feedback", &section.feedback));
    out
}

pub fn render_recommendations(section: &Recommendations) -> String {
    let mut out = render_summary(&section.summary);

    if !section.actions.is_empty() {
        out.push_str(&render_subheading("Action Plan"));
        for (i, action) in section.actions.iter().enumerate() {
            out.push_str(&format!(
                "  {} {}\n",
                style(format!("{}.", i + 1)).cyan().bold(),
                style(&action.title).white().bold(),
            ));
            for task in &action.tasks {
                out.push_str(&format!("     {} {}\n", style("-").dim(), task));
            }
        }
    }

    if !section.risks.is_empty() {
        out.push_str(&render_subheading("Risks & Mitigation"));
        for risk in &section.risks {
            out.push_str(&format!("  {} {}\n", style("⚠").yellow(), style(&risk.risk).yellow()));
            if !risk.mitigation.is_empty() {
                out.push_str(&wrap(&format!("→ {}", risk.mitigation), TEXT_WIDTH - 4, "    "));
                out.push('\n');
            }
        }
    }

    if !section.final_note.is_empty() {
        out.push_str(&render_subheading("Final Note"));
        out.push_str(&wrap(&section.final_note, TEXT_WIDTH, "  "));
        out.push('\n');
    }
    out
}

pub fn render_terms() -> String {
    let mut out = String::new();
    for term in BUSINESS_TERMS {
        out.push_str(&format!("  {}\n", style(term.term).cyan().bold()));
        out.push_str(&wrap(term.meaning, TEXT_WIDTH - 2, "    "));
        out.push('\n');
    }
    out
}

fn render_heading(title: &str) -> String {
    format!(
        "\n{}\n{}\n",
        style(title).white().bold(),
        style("─".repeat(title.chars().count())).cyan(),
    )
}

fn render_subheading(title: &str) -> String {
    format!("\n  {}\n", style(title).cyan().bold())
}

fn render_summary(summary: &str) -> String {
    if summary.trim().is_empty() {
        return String::new();
    }
    format!("{}\n", wrap(summary, TEXT_WIDTH, "  "))
}

fn render_metrics(title: &str, metrics: &[Metric]) -> String {
    if metrics.is_empty() {
        return String::new();
    }
    let width = metrics.iter().map(|m| m.label.chars().count()).max().unwrap_or(0);
    let mut out = render_subheading(title);
    for m in metrics {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            style(&m.label).dim(),
            style(&m.value).white().bold(),
            width = width,
        ));
    }
    out
}

fn render_bullets(title: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut out = render_subheading(title);
    for item in items {
        let wrapped = wrap(item, TEXT_WIDTH - 4, "    ");
        out.push_str(&format!("  {} {}\n", style("•").cyan(), wrapped.trim_start()));
    }
    out
}
