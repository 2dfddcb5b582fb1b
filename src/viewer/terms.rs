/// One entry in the Business Terms Reference tab.
#[derive(Debug, Clone, Copy)]
pub struct BusinessTerm {
    pub term: &'static str,
    pub meaning: &'static str,
}

pub const BUSINESS_TERMS: &[BusinessTerm] = &[
    BusinessTerm {
        term: "ARR",
        meaning: "Annual Recurring Revenue. Subscription revenue expected over a year, usually MRR x 12.",
    },
    BusinessTerm {
        term: "Burn Rate",
        meaning: "How much cash the company spends each month beyond what it brings in.",
    },
    BusinessTerm {
        term: "CAC",
        meaning: "Customer Acquisition Cost. Total sales and marketing spend divided by new customers won.",
    },
    BusinessTerm {
        term: "Churn",
        meaning: "Share of customers or revenue lost in a period, typically quoted monthly.",
    },
    BusinessTerm {
        term: "Gross Margin",
        meaning: "Revenue minus the direct cost of delivering the product, as a percentage of revenue.",
    },
    BusinessTerm {
        term: "LTV",
        meaning: "Customer Lifetime Value. Total gross profit expected from a customer before they churn.",
    },
    BusinessTerm {
        term: "LTV:CAC",
        meaning: "Return on acquisition spend. A ratio above 3 is generally considered healthy.",
    },
    BusinessTerm {
        term: "MRR",
        meaning: "Monthly Recurring Revenue from active subscriptions.",
    },
    BusinessTerm {
        term: "MVP",
        meaning: "Minimum Viable Product. The smallest release that tests the core value with real users.",
    },
    BusinessTerm {
        term: "Payback Period",
        meaning: "Months of gross profit needed to recover the cost of acquiring a customer.",
    },
    BusinessTerm {
        term: "Product-Market Fit",
        meaning: "The point where a product satisfies strong demand in a clearly defined market.",
    },
    BusinessTerm {
        term: "Runway",
        meaning: "Months the company can operate before cash runs out at the current burn rate.",
    },
    BusinessTerm {
        term: "TAM",
        meaning: "Total Addressable Market. Revenue available if every possible customer bought.",
    },
    BusinessTerm {
        term: "SAM",
        meaning: "Serviceable Available Market. The part of TAM the business model can actually reach.",
    },
    BusinessTerm {
        term: "SOM",
        meaning: "Serviceable Obtainable Market. The part of SAM realistically capturable in the near term.",
    },
];

/// Look up a term case-insensitively.
pub fn lookup(term: &str) -> Option<&'static BusinessTerm> {
    let wanted = term.trim();
    BUSINESS_TERMS.iter().find(|t| t.term.eq_ignore_ascii_case(wanted))
}
