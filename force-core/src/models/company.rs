use serde::{Deserialize, Serialize};

/// Industry a prospective customer operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Technology,
    Healthcare,
    FinancialServices,
    Manufacturing,
    Retail,
    Education,
    Energy,
    Other,
}

impl Industry {
    /// Every industry, in the order the selection list shows them.
    pub const ALL: [Industry; 8] = [
        Self::Technology,
        Self::Healthcare,
        Self::FinancialServices,
        Self::Manufacturing,
        Self::Retail,
        Self::Education,
        Self::Energy,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Healthcare => "healthcare",
            Self::FinancialServices => "financial_services",
            Self::Manufacturing => "manufacturing",
            Self::Retail => "retail",
            Self::Education => "education",
            Self::Energy => "energy",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::FinancialServices => "Financial Services",
            Self::Manufacturing => "Manufacturing",
            Self::Retail => "Retail",
            Self::Education => "Education",
            Self::Energy => "Energy",
            Self::Other => "Other",
        }
    }

    /// Accepts either the wire value or the display label.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|industry| industry.as_str() == s || industry.label() == s)
    }
}

/// Head-count bracket of the customer's company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeSize {
    #[serde(rename = "1-10")]
    UpTo10,
    #[serde(rename = "11-50")]
    UpTo50,
    #[serde(rename = "51-200")]
    UpTo200,
    #[serde(rename = "201-500")]
    UpTo500,
    #[serde(rename = "501-1000")]
    UpTo1000,
    #[serde(rename = "1001-5000")]
    UpTo5000,
    #[serde(rename = "5000+")]
    Over5000,
}

impl EmployeeSize {
    pub const ALL: [EmployeeSize; 7] = [
        Self::UpTo10,
        Self::UpTo50,
        Self::UpTo200,
        Self::UpTo500,
        Self::UpTo1000,
        Self::UpTo5000,
        Self::Over5000,
    ];

    /// The bracket is its own label, e.g. `"51-200"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpTo10 => "1-10",
            Self::UpTo50 => "11-50",
            Self::UpTo200 => "51-200",
            Self::UpTo500 => "201-500",
            Self::UpTo1000 => "501-1000",
            Self::UpTo5000 => "1001-5000",
            Self::Over5000 => "5000+",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|size| size.as_str() == s)
    }
}

/// Values collected by the first wizard step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDetails {
    pub name: String,
    pub industry: Option<Industry>,
    pub employee_size: Option<EmployeeSize>,
}
