//! SVG chart rendering for balance trajectories and the payment breakdown

use crate::portfolio::Portfolio;
use crate::report::format_money;
use log::warn;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

/// Wedge colors for the principal-vs-interest breakdown
const PRINCIPAL_COLOR: RGBColor = RGBColor(0x33, 0xb4, 0x3a);
const INTEREST_COLOR: RGBColor = RGBColor(0xd9, 0x2b, 0x25);

/// Which charts to render after a simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotMode {
    /// Per-loan trajectories plus the aggregate balance
    Balances,
    /// Per-loan trajectories only
    IndividualBalances,
    /// Aggregate balance only
    TotalBalance,
    /// Principal-vs-interest breakdown
    Pie,
    /// Balance chart and pie side by side
    All,
    /// No chart output
    None,
}

impl PlotMode {
    /// Parse a plot-mode string, case-insensitively. Unrecognized values
    /// degrade to `None` with a warning rather than failing the run.
    pub fn parse(input: &str) -> Self {
        match input.to_lowercase().as_str() {
            "balances" => PlotMode::Balances,
            "individual balances" => PlotMode::IndividualBalances,
            "total balance" => PlotMode::TotalBalance,
            "pie" => PlotMode::Pie,
            "all" => PlotMode::All,
            "none" => PlotMode::None,
            other => {
                warn!(
                    "did not recognize {other:?} as a plot mode; valid inputs are 'balances', \
                     'individual balances', 'total balance', 'pie', or 'all'; defaulting to no plots"
                );
                PlotMode::None
            }
        }
    }
}

/// Render the requested charts for a finished simulation to an SVG file.
/// Returns whether a file was written (`PlotMode::None` writes nothing).
pub fn render(
    portfolio: &Portfolio,
    mode: PlotMode,
    monthly_payment: f64,
    path: &Path,
) -> Result<bool, Box<dyn Error>> {
    match mode {
        PlotMode::None => Ok(false),
        PlotMode::Pie => {
            let root = SVGBackend::new(path, (700, 700)).into_drawing_area();
            root.fill(&WHITE)?;
            draw_pie_chart(&root, portfolio)?;
            root.present()?;
            Ok(true)
        }
        PlotMode::All => {
            let root = SVGBackend::new(path, (1400, 600)).into_drawing_area();
            root.fill(&WHITE)?;
            let (balances, pie) = root.split_horizontally(1000);
            draw_balance_chart(&balances, portfolio, monthly_payment, true, true)?;
            draw_pie_chart(&pie, portfolio)?;
            root.present()?;
            Ok(true)
        }
        mode => {
            let (loans, total) = match mode {
                PlotMode::Balances => (true, true),
                PlotMode::IndividualBalances => (true, false),
                PlotMode::TotalBalance => (false, true),
                _ => unreachable!(),
            };
            let root = SVGBackend::new(path, (1000, 600)).into_drawing_area();
            root.fill(&WHITE)?;
            draw_balance_chart(&root, portfolio, monthly_payment, loans, total)?;
            root.present()?;
            Ok(true)
        }
    }
}

/// Balance trajectories: one line per loan and/or a heavier aggregate line
fn draw_balance_chart(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    portfolio: &Portfolio,
    monthly_payment: f64,
    include_loans: bool,
    include_total: bool,
) -> Result<(), Box<dyn Error>> {
    let x_max = portfolio.months_elapsed().max(1);
    let y_max = portfolio
        .total_balance_history
        .iter()
        .cloned()
        .fold(1.0f64, f64::max)
        * 1.05;

    let caption = format!(
        "{}'s Loans: ${}/Month Payment, ${} paid in interest",
        portfolio.title,
        monthly_payment,
        format_money(portfolio.total_interest_paid)
    );

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0u32..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Months")
        .y_desc("Balance ($)")
        .y_label_formatter(&|v| format_money(*v))
        .draw()?;

    if include_loans {
        for (idx, loan) in portfolio.loans.iter().enumerate() {
            let points: Vec<(u32, f64)> = loan
                .month_history
                .iter()
                .zip(loan.balance_history.iter())
                .map(|(month, balance)| (*month, *balance))
                .collect();

            let color = Palette99::pick(idx);
            chart
                .draw_series(LineSeries::new(points, &color))?
                .label(format!(
                    "${} at {:.2}%",
                    format_money(loan.start_balance),
                    loan.annual_rate * 100.0
                ))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], &Palette99::pick(idx))
                });
        }
    }

    if include_total {
        let points: Vec<(u32, f64)> = portfolio
            .month_history
            .iter()
            .zip(portfolio.total_balance_history.iter())
            .map(|(month, balance)| (*month, *balance))
            .collect();

        chart
            .draw_series(LineSeries::new(points, ShapeStyle::from(&BLACK).stroke_width(3)))?
            .label(format!("Total Loan Balance ({})", portfolio.title))
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], ShapeStyle::from(&BLACK).stroke_width(3))
            });
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    Ok(())
}

/// Principal-vs-interest donut for the whole run
fn draw_pie_chart(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    portfolio: &Portfolio,
) -> Result<(), Box<dyn Error>> {
    let principal = portfolio.starting_balance();
    let interest = portfolio.total_interest_paid;

    let caption = format!(
        "{}'s Payment Breakdown: ${} paid total",
        portfolio.title,
        format_money(principal + interest)
    );
    let area = area.titled(&caption, ("sans-serif", 20))?;

    // Nothing meaningful to slice for an all-zero run
    if principal + interest <= 0.0 {
        return Ok(());
    }

    let dims = area.dim_in_pixel();
    let center = (dims.0 as i32 / 2, dims.1 as i32 / 2);
    let radius = f64::from(dims.0.min(dims.1)) * 0.32;

    let sizes = vec![principal, interest.max(0.0)];
    let colors = vec![PRINCIPAL_COLOR, INTEREST_COLOR];
    let labels = vec![
        format!("Principal: ${}", format_money(principal)),
        format!("Interest: ${}", format_money(interest)),
    ];

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(90.0);
    pie.label_style(("sans-serif", 16).into_font());
    pie.percentages(("sans-serif", 14).into_font().color(&BLACK));
    area.draw(&pie)?;

    Ok(())
}
