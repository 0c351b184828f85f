//! Run report output.
//!
//! Collects a finished allocation into a report that can be printed to the
//! console, written as CSV cutting maps (one row per profile: the profile
//! length followed by its cuts with the kerf interleaved between them), or
//! saved as pretty JSON with run metadata.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use u_cutstock_core::{AllocationResult, Length, RemainderKind};

/// Report of one allocation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutReport {
    /// Kerf width used for the run.
    pub tolerance: Length,

    /// One entry per profile.
    pub plans: Vec<PlanRow>,

    /// Cut lengths that fit no profile.
    pub unplaced: Vec<Length>,

    /// Report metadata.
    pub metadata: ReportMetadata,
}

/// One profile's cutting map in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRow {
    /// Stock length of the profile.
    pub profile: Length,
    /// Assigned cut lengths.
    pub cuts: Vec<Length>,
    /// Leftover material after cuts and kerf.
    pub leftover: i64,
    /// Disposition of the leftover.
    pub remainder: RemainderKind,
}

/// Version and timestamp block attached to saved reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// u-cutstock version.
    pub version: String,
    /// UTC timestamp of the run.
    pub timestamp: String,
}

impl CutReport {
    /// Builds the report from an allocation result.
    pub fn new(result: &AllocationResult, tolerance: Length) -> Self {
        Self {
            tolerance,
            plans: result
                .plans
                .iter()
                .map(|plan| PlanRow {
                    profile: plan.profile,
                    cuts: plan.cuts.clone(),
                    leftover: plan.leftover,
                    remainder: plan.remainder,
                })
                .collect(),
            unplaced: result.unplaced.clone(),
            metadata: ReportMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp: clock::utc_now(),
            },
        }
    }

    /// CSV rows for the cutting maps: each row starts with the profile
    /// length, then its cuts with the kerf between consecutive cuts.
    pub fn csv_rows(&self) -> Vec<Vec<Length>> {
        self.plans
            .iter()
            .map(|plan| {
                let mut row = vec![plan.profile];
                for (i, &cut) in plan.cuts.iter().enumerate() {
                    if i > 0 {
                        row.push(self.tolerance);
                    }
                    row.push(cut);
                }
                row
            })
            .collect()
    }

    /// Saves the cutting maps as CSV.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        for row in self.csv_rows() {
            let fields: Vec<String> = row.iter().map(Length::to_string).collect();
            writeln!(file, "{}", fields.join(","))?;
        }
        Ok(())
    }

    /// Saves the full report as pretty JSON.
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Prints the run summary to stdout.
    pub fn print_summary(&self) {
        println!("\n{:=<72}", "");
        println!("CUTTING PLAN");
        println!("{:=<72}", "");
        println!(
            "{:<10} {:<36} {:>10} {:>12}",
            "Profile", "Cuts", "Leftover", "Offcut"
        );
        println!("{:-<72}", "");

        for plan in &self.plans {
            let cuts: Vec<String> = plan.cuts.iter().map(Length::to_string).collect();
            println!(
                "{:<10} {:<36} {:>10} {:>12}",
                plan.profile,
                cuts.join(", "),
                plan.leftover,
                plan.remainder.to_string()
            );
        }
        println!("{:=<72}", "");

        for plan in &self.plans {
            match plan.remainder {
                RemainderKind::Scrap => {
                    println!("Profile {}: leftover {}, write off.", plan.profile, plan.leftover)
                }
                RemainderKind::Reusable => println!(
                    "Profile {}: leftover {}, return to stock.",
                    plan.profile, plan.leftover
                ),
            }
        }

        if !self.unplaced.is_empty() {
            println!("Not enough profiles for cuts: {:?}", self.unplaced);
        }
    }
}

/// Returns the timestamped directory for one run's output files.
pub fn run_directory(root: impl AsRef<Path>) -> PathBuf {
    root.as_ref().join(clock::unix_seconds().to_string())
}

/// Minimal UTC timestamp formatting (keeps a datetime crate out of the tree).
mod clock {
    use std::time::{SystemTime, UNIX_EPOCH};

    pub fn unix_seconds() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0)
    }

    /// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn utc_now() -> String {
        format_utc(unix_seconds())
    }

    // Approximate calendar math, good enough for a report stamp.
    pub fn format_utc(secs: u64) -> String {
        let mut days = secs / 86400;
        let rest = secs % 86400;
        let (hour, minute, second) = (rest / 3600, rest % 3600 / 60, rest % 60);

        let mut year = 1970u64;
        loop {
            let length = if year % 4 == 0 { 366 } else { 365 };
            if days < length {
                break;
            }
            days -= length;
            year += 1;
        }

        const MONTH_DAYS: [u64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        let mut month = 1;
        for length in MONTH_DAYS {
            if days < length {
                break;
            }
            days -= length;
            month += 1;
        }

        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            year,
            month,
            days + 1,
            hour,
            minute,
            second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_cutstock_core::CutPlan;

    fn sample_result() -> AllocationResult {
        AllocationResult {
            plans: vec![
                CutPlan {
                    profile: 1000,
                    cuts: vec![400, 300],
                    leftover: 295,
                    remainder: RemainderKind::Scrap,
                },
                CutPlan {
                    profile: 500,
                    cuts: vec![450],
                    leftover: 45,
                    remainder: RemainderKind::Scrap,
                },
                CutPlan {
                    profile: 400,
                    cuts: vec![],
                    leftover: 400,
                    remainder: RemainderKind::Reusable,
                },
            ],
            unplaced: vec![300],
        }
    }

    #[test]
    fn test_report_mirrors_result() {
        let report = CutReport::new(&sample_result(), 5);

        assert_eq!(report.tolerance, 5);
        assert_eq!(report.plans.len(), 3);
        assert_eq!(report.plans[0].cuts, vec![400, 300]);
        assert_eq!(report.unplaced, vec![300]);
        assert_eq!(report.metadata.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_csv_rows_interleave_kerf() {
        let report = CutReport::new(&sample_result(), 5);
        let rows = report.csv_rows();

        assert_eq!(rows[0], vec![1000, 400, 5, 300]);
        assert_eq!(rows[1], vec![500, 450]);
        assert_eq!(rows[2], vec![400]);
    }

    #[test]
    fn test_json_includes_classification() {
        let report = CutReport::new(&sample_result(), 5);
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"Scrap\""));
        assert!(json.contains("\"Reusable\""));
        assert!(json.contains("\"tolerance\":5"));
    }

    #[test]
    fn test_clock_format() {
        assert_eq!(clock::format_utc(0), "1970-01-01T00:00:00Z");
        assert_eq!(clock::format_utc(86_399), "1970-01-01T23:59:59Z");
    }
}
