use serde::{Deserialize, Serialize};

/// Search phrase used when the requested service slug is unknown.
pub const GENERIC_SEARCH_PHRASE: &str = "loans";

/// Service label given to stores whose categories match no known keyword.
pub const GENERIC_SERVICE_LABEL: &str = "Financial Services";

/// A service slug supported by the store locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    PaydayLoans,
    PersonalLoans,
    InstallmentLoans,
    TitleLoans,
    CheckCashing,
    PawnLoans,
    CashForGold,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 7] = [
        ServiceCategory::PaydayLoans,
        ServiceCategory::PersonalLoans,
        ServiceCategory::InstallmentLoans,
        ServiceCategory::TitleLoans,
        ServiceCategory::CheckCashing,
        ServiceCategory::PawnLoans,
        ServiceCategory::CashForGold,
    ];

    /// Parses a URL slug such as `"payday-loans"`. Unknown slugs yield `None`.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(slug))
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            ServiceCategory::PaydayLoans => "payday-loans",
            ServiceCategory::PersonalLoans => "personal-loans",
            ServiceCategory::InstallmentLoans => "installment-loans",
            ServiceCategory::TitleLoans => "title-loans",
            ServiceCategory::CheckCashing => "check-cashing",
            ServiceCategory::PawnLoans => "pawn-loans",
            ServiceCategory::CashForGold => "cash-for-gold",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            ServiceCategory::PaydayLoans => "Payday Loans",
            ServiceCategory::PersonalLoans => "Personal Loans",
            ServiceCategory::InstallmentLoans => "Installment Loans",
            ServiceCategory::TitleLoans => "Title Loans",
            ServiceCategory::CheckCashing => "Check Cashing",
            ServiceCategory::PawnLoans => "Pawn Loans",
            ServiceCategory::CashForGold => "Cash For Gold",
        }
    }

    /// Canonical phrases sent to the place-search provider, most specific first.
    #[must_use]
    pub fn search_phrases(self) -> &'static [&'static str] {
        match self {
            ServiceCategory::PaydayLoans => &["payday loans", "cash advance", "payday advance"],
            ServiceCategory::PersonalLoans => {
                &["personal loans", "unsecured loans", "installment loans"]
            }
            ServiceCategory::InstallmentLoans => &["installment loans", "monthly payment loans"],
            ServiceCategory::TitleLoans => &["title loans", "car title loans", "auto title loans"],
            ServiceCategory::CheckCashing => &["check cashing", "cash checks"],
            ServiceCategory::PawnLoans => &["pawn shop", "pawn loans"],
            ServiceCategory::CashForGold => &["cash for gold", "sell gold", "gold buyers"],
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            ServiceCategory::PaydayLoans => {
                "Short-term loans designed to cover expenses until your next paycheck."
            }
            ServiceCategory::PersonalLoans => {
                "Flexible loans for various personal expenses and financial needs."
            }
            ServiceCategory::InstallmentLoans => {
                "Loans repaid in fixed monthly installments over a set period."
            }
            ServiceCategory::TitleLoans => {
                "Loans secured by your vehicle title with quick approval."
            }
            ServiceCategory::CheckCashing => {
                "Convenient check cashing services for immediate access to funds."
            }
            ServiceCategory::PawnLoans => "Collateral loans against jewelry, electronics, and tools.",
            ServiceCategory::CashForGold => "Buyers paying cash for gold, silver, and jewelry.",
        }
    }

    /// The store service label that corresponds to this category.
    #[must_use]
    pub fn service_label(self) -> &'static str {
        match self {
            ServiceCategory::PaydayLoans => "Payday Loan",
            ServiceCategory::PersonalLoans | ServiceCategory::InstallmentLoans => {
                "Installment Loan"
            }
            ServiceCategory::TitleLoans => "Title Loan",
            ServiceCategory::CheckCashing => "Check Cashing",
            ServiceCategory::PawnLoans => "Pawn Loan",
            ServiceCategory::CashForGold => "Cash For Gold",
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Keyword → service label table applied to vendor category strings.
/// Matching is a case-insensitive substring test; one category may yield
/// several labels.
const SERVICE_KEYWORDS: [(&[&str], &str); 6] = [
    (&["payday", "cash advance"], "Payday Loan"),
    (&["personal loan", "installment"], "Installment Loan"),
    (&["title", "auto loan"], "Title Loan"),
    (&["check cash"], "Check Cashing"),
    (&["pawn"], "Pawn Loan"),
    (&["gold", "jewelry"], "Cash For Gold"),
];

/// Maps vendor category strings to unique service labels.
///
/// When `preferred` is given and its label was matched, that label is moved
/// to the front. Never returns an empty vector: with no keyword hits the
/// result is `[GENERIC_SERVICE_LABEL]`.
#[must_use]
pub fn service_labels<S: AsRef<str>>(
    categories: &[S],
    preferred: Option<ServiceCategory>,
) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for category in categories {
        let lower = category.as_ref().to_lowercase();
        for (keywords, label) in &SERVICE_KEYWORDS {
            if keywords.iter().any(|k| lower.contains(k)) && !labels.iter().any(|l| l == label) {
                labels.push((*label).to_string());
            }
        }
    }

    if labels.is_empty() {
        return vec![GENERIC_SERVICE_LABEL.to_string()];
    }

    if let Some(preferred) = preferred {
        if let Some(pos) = labels.iter().position(|l| l == preferred.service_label()) {
            let label = labels.remove(pos);
            labels.insert(0, label);
        }
    }
    labels
}
