//! Fixed commentary printed after the measurements
//!
//! The wording depends only on the measured speedups, so it is built as
//! plain data and rendered separately.

use crate::bench::{MinMaxReport, SortReport, Verdict};

/// A numbered conclusion with its bullet points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conclusion {
    pub title: String,
    pub points: Vec<String>,
}

impl Conclusion {
    fn new(title: impl Into<String>, points: &[&str]) -> Self {
        Self {
            title: title.into(),
            points: points.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// One-line description of which variant won
pub fn faster_variant(speedup: f64) -> &'static str {
    if speedup > 1.0 {
        "Parallel version is faster"
    } else if speedup < 1.0 {
        "Sequential version is faster"
    } else {
        "Both versions performed the same"
    }
}

/// "Parallel version is faster by 35.0%" style summary
pub fn relative_difference(speedup: f64) -> String {
    if speedup > 1.0 {
        format!("Parallel version is faster by {:.1}%", (speedup - 1.0) * 100.0)
    } else if speedup > 0.0 {
        format!("Sequential version is faster by {:.1}%", (1.0 / speedup - 1.0) * 100.0)
    } else {
        "Parallel run took no measurable time".to_string()
    }
}

pub fn verdict_summary(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::SignificantSpeedup => "noticeable speedup",
        Verdict::Marginal => "little or no gain",
        Verdict::Slowdown => "slower than sequential",
    }
}

pub fn min_max_conclusions(report: &MinMaxReport) -> Vec<Conclusion> {
    let size_points: &[&str] = match report.verdict {
        Verdict::SignificantSpeedup => &[
            "Parallelisation gave a substantial speedup",
            "The loop iterations were spread evenly across the thread team",
        ],
        Verdict::Marginal => &[
            "The speedup is small because creating threads has a fixed cost",
            "For small arrays that overhead is a large share of the run time",
        ],
        Verdict::Slowdown => &[
            "The sequential version is faster",
            "The cost of parallelisation outweighs the benefit",
        ],
    };

    vec![
        Conclusion::new(format!("For an array of {} elements:", report.size), size_points),
        Conclusion::new(
            "The parallel-for hands each thread a contiguous block of iterations",
            &[],
        ),
        Conclusion::new(
            "The reduction merges the per-thread minima and maxima after the join",
            &[],
        ),
        Conclusion::new(
            "With millions of elements the effect of parallelisation would be stronger",
            &[],
        ),
    ]
}

pub fn sort_conclusions(reports: &[SortReport]) -> Vec<Conclusion> {
    let mut efficiency: Vec<String> = reports
        .iter()
        .map(|r| {
            format!(
                "n={}: {:.2}x ({})",
                r.size,
                r.speedup,
                verdict_summary(r.verdict)
            )
        })
        .collect();
    efficiency.push("Creating threads costs a lot relative to one inner scan".to_string());

    let mut conclusions = vec![
        Conclusion::new(
            "Selection sort:",
            &[
                "Runs in O(n²) time",
                "The outer loop is sequential (each iteration depends on the previous swaps)",
                "The inner loop, the search for the minimum, can run in parallel",
            ],
        ),
        Conclusion {
            title: "Parallel efficiency:".to_string(),
            points: efficiency,
        },
        Conclusion::new(
            "Why selection sort parallelises poorly:",
            &[
                "The outer loop stays sequential",
                "A thread team is created and destroyed on every outer iteration",
                "The critical section is a serialisation point",
                "Only the minimum search runs in parallel, not the sort as a whole",
            ],
        ),
    ];

    let pooled: Vec<String> = reports
        .iter()
        .filter_map(|r| {
            r.pool.as_ref().map(|pool| {
                format!(
                    "n={}: {:.2}x with a persistent pool vs {:.2}x with a team per iteration",
                    r.size, pool.speedup, r.speedup
                )
            })
        })
        .collect();
    if !pooled.is_empty() {
        conclusions.push(Conclusion {
            title: "Reusing threads across iterations:".to_string(),
            points: pooled,
        });
    }

    conclusions.push(Conclusion::new(
        "Recommendations:",
        &[
            "Use algorithms that split into independent halves for parallel sorting",
            "For example merge sort or quicksort",
            "They parallelise much better than selection sort",
            "Selection sort is useful for teaching, not for production",
        ],
    ));
    conclusions.push(Conclusion::new(
        "Building blocks used:",
        &[
            "A parallel region creates a team of threads and joins them at the end",
            "Static work-sharing gives each thread a contiguous block of iterations",
            "A critical section serialises updates to the shared minimum",
        ],
    ));

    conclusions
}
