// SPDX-License-Identifier: MPL-2.0
//! Client roster scrolled by the logo ticker.

/// A client wordmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientLogo {
    pub name: &'static str,
    pub sector: &'static str,
}

pub static CLIENTS: [ClientLogo; 10] = [
    ClientLogo {
        name: "Northgate Health",
        sector: "Hospital network",
    },
    ClientLogo {
        name: "Harlow Steel Works",
        sector: "Manufacturing",
    },
    ClientLogo {
        name: "Pine County",
        sector: "Local government",
    },
    ClientLogo {
        name: "Bayline Credit Union",
        sector: "Financial services",
    },
    ClientLogo {
        name: "Westbrook University",
        sector: "Higher education",
    },
    ClientLogo {
        name: "Quillsoft",
        sector: "Software",
    },
    ClientLogo {
        name: "Summit Transit Authority",
        sector: "Public transit",
    },
    ClientLogo {
        name: "Everly Foods",
        sector: "Consumer goods",
    },
    ClientLogo {
        name: "Carrow Mutual",
        sector: "Insurance",
    },
    ClientLogo {
        name: "Lakeshore Schools",
        sector: "K-12 education",
    },
];
