use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotAuthorized = 1,
    ProjectNotFoundOrInactive = 2,
    MilestoneNotVerified = 3,
    InsufficientFunds = 4,
    AlreadyReleased = 5,
    Paused = 6,
    InvalidAmount = 7,
    InvalidRecipient = 8,
    MaxMilestonesExceeded = 9,
    InvalidMilestoneIndex = 10,
    RefundNotAllowed = 11,
    ContractNotInitialized = 12,
    AlreadyInitialized = 13,
    InvalidPercentage = 14,
    ProjectAlreadyExists = 15,
}
