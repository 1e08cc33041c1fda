//! Console and JSON reports comparing the two solution methods

use crate::backend::LpSolution;
use contest_logic::{BidCosts, RegimeSolution};
use serde::Serialize;

/// Everything the `solve` subcommand prints: the input triple and both
/// independently computed solutions.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub costs: [f64; 3],
    pub numerical: LpSolution,
    pub analytical: RegimeSolution,
    pub narrative: &'static str,
}

impl Report {
    pub fn new(costs: BidCosts, numerical: LpSolution, analytical: RegimeSolution) -> Self {
        Self {
            costs: costs.as_array(),
            numerical,
            analytical,
            narrative: analytical.narrative(),
        }
    }

    /// Fixed-width console report, 4-decimal fixed floats.
    pub fn render_human(&self) -> String {
        let mut out = String::new();
        section(&mut out, " Inputs ");
        line(&mut out, "Bid costs:", &self.costs);
        section(&mut out, " Numerical Results ");
        line(&mut out, "Numerical scores:", &self.numerical.scores);
        line(&mut out, "Numerical prizes:", &self.numerical.prizes);
        line(&mut out, "Numerical revenue:", &[self.numerical.objective]);
        section(&mut out, " Analytical Results ");
        line(&mut out, "Analytical scores:", &self.analytical.scores);
        line(&mut out, "Analytical prizes:", &self.analytical.prizes);
        line(&mut out, "Analytical revenue:", &[self.analytical.revenue]);
        out.push('\n');
        out.push_str(&format!(
            "Case {}: {}\n",
            self.analytical.regime.index(),
            self.narrative
        ));
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("{:=^80}\n\n", title));
}

fn line(out: &mut String, label: &str, values: &[f64]) {
    out.push_str(&format!("{:<20} {}\n", label, format_values(values)));
}

fn format_values(values: &[f64]) -> String {
    let inner = values
        .iter()
        .map(|v| format!("{:.4}", v))
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::solve_lp;
    use contest_logic::{build_lp, solve_analytical};

    // Interior regime-2 point; revenue 0.6 + 3/5.4 = 1.1556 at 4 decimals.
    fn sample_report() -> Report {
        let costs = BidCosts::new(5.0 / 6.0, 1.0, 2.7).unwrap();
        let numerical = solve_lp(&build_lp(costs)).unwrap();
        Report::new(costs, numerical, solve_analytical(costs))
    }

    #[test]
    fn test_values_use_four_decimal_fixed_format() {
        assert_eq!(format_values(&[5.0 / 6.0, 1.0, 2.5]), "[0.8333 1.0000 2.5000]");
        assert_eq!(format_values(&[1.2]), "[1.2000]");
    }

    #[test]
    fn test_human_report_has_all_sections() {
        let text = sample_report().render_human();
        for needle in [
            " Inputs ",
            " Numerical Results ",
            " Analytical Results ",
            "Bid costs:",
            "Numerical revenue:",
            "Analytical revenue:  [1.1556]",
            "Case 2:",
        ] {
            assert!(text.contains(needle), "missing {:?} in:\n{}", needle, text);
        }
    }

    #[test]
    fn test_json_report_round_trips_fields() {
        let json = sample_report().render_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["analytical"]["regime"], "SecondPrizeShared");
        assert_eq!(value["costs"][1], 1.0);
        assert!(value["numerical"]["objective"].as_f64().is_some());
        assert!(value["narrative"].as_str().unwrap().contains("Player 3"));
    }
}
