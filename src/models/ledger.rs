//! Member ledger rows and per-member recurring revenue.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerKind {
    /// Money received from a member.
    Payment,
    /// A charge accrued against a member's account.
    Purchase,
}

/// One ledger line for the monthly revenue/AR rollup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: LedgerKind,
    pub date: NaiveDate,
    pub amount: f64,
}

/// A member's recurring charge for one billing period.
///
/// The per-member input to the MRR bridge: one row per member per period,
/// with `recurring_charge` the membership dues billed that period and
/// `paused` set when the membership is on hold (charge suspended but the
/// member not departed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRevenueRow {
    pub member_id: i64,
    pub recurring_charge: f64,
    #[serde(default)]
    pub paused: bool,
}

impl MemberRevenueRow {
    pub fn new(member_id: i64, recurring_charge: f64) -> Self {
        Self {
            member_id,
            recurring_charge,
            paused: false,
        }
    }

    pub fn paused(member_id: i64) -> Self {
        Self {
            member_id,
            recurring_charge: 0.0,
            paused: true,
        }
    }

    /// Active means billed a non-zero charge and not on hold.
    pub fn is_active(&self) -> bool {
        self.recurring_charge > 0.0 && !self.paused
    }
}
