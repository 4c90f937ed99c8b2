use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the escrow contract
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Admin,
    Initialized,
    Paused,
    Token,
    TotalEscrowed,
    Project(String),
    Milestone(String, u32),
    Contribution(String, Address),
}

/// Per-project escrow aggregate
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectEscrow {
    /// Address that receives milestone payouts.
    pub recipient: Address,
    /// Cumulative amount contributed to this project. Never decreases.
    pub total_funded: i128,
    /// Cumulative amount paid out via verified milestones.
    pub released: i128,
    /// Number of milestone records created for this project.
    pub milestones_count: u32,
    /// False once a refund window has been opened; never set back to true.
    pub active: bool,
    /// Ledger sequence at which the refund window opened, if any.
    pub refund_window_start: Option<u32>,
}

/// A single milestone within a project
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Milestone {
    pub description: String,
    /// Informational funding target; not enforced.
    pub target_amount: i128,
    /// Share of total_funded paid out on verification, 0-100.
    pub release_percentage: u32,
    /// One-way false -> true.
    pub verified: bool,
    pub verifier: Option<Address>,
    /// Ledger sequence at verification time.
    pub verified_at: Option<u32>,
}

/// Milestone parameters supplied at project creation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneInput {
    pub description: String,
    pub target_amount: i128,
    pub release_percentage: u32,
}

/// Per-contributor funding state for a project
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    /// Cumulative contributed amount. Only increases via funding.
    pub amount: i128,
    /// Ledger sequence of the most recent contribution.
    pub last_contribution_at: u32,
    /// One-way false -> true.
    pub refunded: bool,
}
