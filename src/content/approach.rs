// SPDX-License-Identifier: MPL-2.0
//! Copy for the "About - Approach" page.

/// Visual marker for an approach section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproachIcon {
    Search,
    Chart,
    Compass,
    Gear,
    Pulse,
}

/// One step of the engagement process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproachSection {
    pub heading: &'static str,
    pub body: &'static str,
    pub points: &'static [&'static str],
    pub icon: ApproachIcon,
}

pub const HERO_TITLE: &str = "Our Approach";

pub const HERO_SUMMARY: &str = "Benefit programs are long-lived promises. We pair \
    credentialed actuaries with plan design consultants so every recommendation is \
    priced, tested and explainable to the people who have to approve it.";

pub static SECTIONS: [ApproachSection; 5] = [
    ApproachSection {
        heading: "Discover",
        body: "We start with your data, not a template. Plan documents, census files \
               and claims history tell us where the real risk sits.",
        points: &[
            "Data intake and reconciliation",
            "Stakeholder interviews",
            "Regulatory and contract review",
        ],
        icon: ApproachIcon::Search,
    },
    ApproachSection {
        heading: "Analyze",
        body: "Valuation models and stochastic projections quantify cost, volatility \
               and funding needs under a range of economic scenarios.",
        points: &[
            "Actuarial valuations (ASC 715, GASB 68/75)",
            "Claims trend and lag modeling",
            "Asset-liability projections",
        ],
        icon: ApproachIcon::Chart,
    },
    ApproachSection {
        heading: "Design",
        body: "Options are priced side by side so decision makers can weigh cost \
               against employee value and long-term risk.",
        points: &[
            "Plan design alternatives",
            "Contribution strategy",
            "Funding and de-risking policy",
        ],
        icon: ApproachIcon::Compass,
    },
    ApproachSection {
        heading: "Implement",
        body: "We coordinate carriers, recordkeepers and counsel through transition \
               so changes land on time and in compliance.",
        points: &[
            "Vendor selection and contracting",
            "Employee communication",
            "Administrative testing",
        ],
        icon: ApproachIcon::Gear,
    },
    ApproachSection {
        heading: "Monitor",
        body: "Quarterly dashboards track results against projections, and we \
               revisit assumptions before small drifts become large ones.",
        points: &[
            "Experience studies",
            "Budget-to-actual reporting",
            "Annual strategy review",
        ],
        icon: ApproachIcon::Pulse,
    },
];
