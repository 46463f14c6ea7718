//! Funding sources and their fixed terms.

use crate::types::Money;
use serde::{Deserialize, Serialize};

/// Capital raised through `raise_funding` calls required before a
/// Series B round is entertained. The founding seed round on the
/// opening balance sheet does not count.
pub const SERIES_B_PRIOR_RAISE: Money = 2_000_000.0;

/// Probability that a grant application is approved.
pub const GRANT_APPROVAL_PROBABILITY: f64 = 0.6;

/// Where the money comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingSource {
    Angel,
    VcA,
    VcB,
    Grant,
    Debt,
}

/// The terms attached to one funding source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FundingTerms {
    pub amount: Money,
    /// Equity fraction given away on close.
    pub dilution: f64,
    /// Quarterly interest rate. Recorded for debt but never serviced —
    /// the simulation does not model repayment.
    pub debt_rate: f64,
}

impl FundingSource {
    pub const ALL: [FundingSource; 5] = [
        FundingSource::Angel,
        FundingSource::VcA,
        FundingSource::VcB,
        FundingSource::Grant,
        FundingSource::Debt,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Angel => "Angel Investment",
            Self::VcA => "VC Series A",
            Self::VcB => "VC Series B",
            Self::Grant => "Government Grant",
            Self::Debt => "Debt Financing",
        }
    }

    pub fn terms(&self) -> FundingTerms {
        match self {
            Self::Angel => FundingTerms {
                amount: 500_000.0,
                dilution: 0.08,
                debt_rate: 0.0,
            },
            Self::VcA => FundingTerms {
                amount: 3_000_000.0,
                dilution: 0.20,
                debt_rate: 0.0,
            },
            Self::VcB => FundingTerms {
                amount: 8_000_000.0,
                dilution: 0.25,
                debt_rate: 0.0,
            },
            Self::Grant => FundingTerms {
                amount: 750_000.0,
                dilution: 0.0,
                debt_rate: 0.0,
            },
            Self::Debt => FundingTerms {
                amount: 2_000_000.0,
                dilution: 0.0,
                debt_rate: 0.02,
            },
        }
    }
}
