// SPDX-License-Identifier: MPL-2.0
//! Client success stories shown on the "About - Success Stories" page.

/// Industry category of a client engagement.
///
/// Each category maps to its own card style; see
/// [`StyleTable`](crate::ui::industry::StyleTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Industry {
    Healthcare,
    Manufacturing,
    PublicSector,
    FinancialServices,
    HigherEducation,
    Technology,
}

impl Industry {
    /// Every category, in style-table order.
    pub const ALL: [Industry; 6] = [
        Industry::Healthcare,
        Industry::Manufacturing,
        Industry::PublicSector,
        Industry::FinancialServices,
        Industry::HigherEducation,
        Industry::Technology,
    ];

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Industry::Healthcare => "Healthcare",
            Industry::Manufacturing => "Manufacturing",
            Industry::PublicSector => "Public Sector",
            Industry::FinancialServices => "Financial Services",
            Industry::HigherEducation => "Higher Education",
            Industry::Technology => "Technology",
        }
    }

    /// Position in [`Industry::ALL`].
    #[must_use]
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

/// Headline figure of a story. Free-form display strings, never parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub percentage: &'static str,
    pub label: &'static str,
    pub change: &'static str,
}

/// One case study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub outcome: Option<&'static str>,
    pub industry: Industry,
    pub metrics: Metrics,
}

/// Stories in display order.
pub static STORIES: [Story; 4] = [
    Story {
        title: "Regional Health System Reins In Self-Funded Claims",
        description: "A 14-hospital network saw medical and pharmacy claims outpace \
                      budget three years running. We rebuilt their claims forecasting \
                      and renegotiated stop-loss coverage.",
        details: &[
            "Claims lag and trend model rebuilt on 36 months of paid data",
            "Specific stop-loss attachment point re-marketed to five carriers",
            "Pharmacy benefit carve-out with transparent pass-through pricing",
        ],
        outcome: Some("Budget variance fell from 9% to under 2% in the first plan year."),
        industry: Industry::Healthcare,
        metrics: Metrics {
            percentage: "18%",
            label: "Reduction in plan cost",
            change: "+$4.2M saved annually",
        },
    },
    Story {
        title: "Pension De-Risking for a Family-Owned Manufacturer",
        description: "A legacy defined benefit plan was driving earnings volatility. \
                      We designed a glide path and led a partial annuity buyout for \
                      retirees.",
        details: &[
            "Liability-driven glide path tied to funded status triggers",
            "Lump-sum window for terminated vested participants",
            "Retiree annuity purchase placed with an A+ rated insurer",
        ],
        outcome: Some("PBGC premiums dropped by a third and the plan is on track to terminate."),
        industry: Industry::Manufacturing,
        metrics: Metrics {
            percentage: "96%",
            label: "Funded status",
            change: "+14 pts in 3 years",
        },
    },
    Story {
        title: "County Retiree Health Valuation Overhaul",
        description: "A county government faced a qualified audit opinion on its \
                      OPEB disclosures. We delivered a GASB 75 valuation and a \
                      funding policy the board could adopt.",
        details: &[
            "Census data cleansing across four bargaining units",
            "Implicit rate subsidy measured for pre-65 retirees",
            "Trust funding policy with a 20-year closed amortization",
        ],
        outcome: None,
        industry: Industry::PublicSector,
        metrics: Metrics {
            percentage: "0",
            label: "Audit findings the following year",
            change: "from 3 material weaknesses",
        },
    },
    Story {
        title: "Benefits Benchmarking for a Fast-Growing Software Firm",
        description: "Headcount doubled in eighteen months and the benefits package \
                      had not kept up. We benchmarked against peers and redesigned \
                      the total rewards offering.",
        details: &[
            "Peer benchmarking against 40 venture-backed employers",
            "HSA-qualified plan option with employer seed contribution",
            "401(k) safe harbor design replacing annual testing refunds",
        ],
        outcome: Some("Offer acceptance rose and benefits now rank in the top three hiring reasons."),
        industry: Industry::Technology,
        metrics: Metrics {
            percentage: "27%",
            label: "Increase in offer acceptance",
            change: "+11 pts eNPS",
        },
    },
];
