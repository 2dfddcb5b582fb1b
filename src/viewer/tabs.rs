use std::fmt;

/// Navigation tabs of the report dashboard, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    ExecutiveOverview,
    MarketCompetition,
    ProductValidation,
    Financials,
    Recommendations,
    BusinessTerms,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::ExecutiveOverview,
        Tab::MarketCompetition,
        Tab::ProductValidation,
        Tab::Financials,
        Tab::Recommendations,
        Tab::BusinessTerms,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ExecutiveOverview => "Executive Overview",
            Self::MarketCompetition => "Market & Competition",
            Self::ProductValidation => "Product Validation",
            Self::Financials => "Financials",
            Self::Recommendations => "Recommendations",
            Self::BusinessTerms => "Business Terms Reference",
        }
    }

    /// Short name used on the command line and in `/tab`.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::ExecutiveOverview => "overview",
            Self::MarketCompetition => "market",
            Self::ProductValidation => "validation",
            Self::Financials => "financials",
            Self::Recommendations => "recommendations",
            Self::BusinessTerms => "terms",
        }
    }

    /// Match a display name, slug or common alias, ignoring case and
    /// surrounding whitespace.
    pub fn parse(name: &str) -> Option<Tab> {
        let key = name.trim().to_lowercase();
        let tab = match key.as_str() {
            "executive overview" | "overview" | "executive" | "summary" => Self::ExecutiveOverview,
            "market & competition" | "market and competition" | "market" | "competition" => {
                Self::MarketCompetition
            }
            "product validation" | "validation" | "product" => Self::ProductValidation,
            "financials" | "finance" | "financial" => Self::Financials,
            "recommendations" | "recommendation" | "actions" => Self::Recommendations,
            "business terms reference" | "business terms" | "terms" | "glossary" => Self::BusinessTerms,
            _ => return None,
        };
        Some(tab)
    }

    /// Like [`Tab::parse`], but any unrecognized name selects the
    /// Executive Overview.
    pub fn from_name(name: &str) -> Tab {
        Self::parse(name).unwrap_or_default()
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::parse(tab.display_name()), Some(tab));
            assert_eq!(Tab::parse(tab.slug()), Some(tab));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Tab::parse("  FINANCIALS "), Some(Tab::Financials));
        assert_eq!(Tab::parse("market AND competition"), Some(Tab::MarketCompetition));
    }

    #[test]
    fn test_unknown_name_falls_back_to_overview() {
        assert_eq!(Tab::parse("Pricing Strategy"), None);
        assert_eq!(Tab::from_name("Pricing Strategy"), Tab::ExecutiveOverview);
        assert_eq!(Tab::from_name(""), Tab::ExecutiveOverview);
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(Tab::ExecutiveOverview.prev(), Tab::BusinessTerms);
        assert_eq!(Tab::BusinessTerms.next(), Tab::ExecutiveOverview);
        assert_eq!(Tab::Financials.next(), Tab::Recommendations);
    }
}
