use soroban_sdk::{contracterror, contracttype};

pub(crate) const INSTANCE_TTL_THRESHOLD: u32 = 17280 * 7; // ~7 days of ledgers
pub(crate) const INSTANCE_TTL_EXTEND: u32 = 17280 * 30; // ~30 days of ledgers

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Campaign,
    Token,
}

/// Lifecycle of a campaign. Numeric codes are part of the public interface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum CampaignState {
    Ongoing = 0,
    Failed = 1,
    Succeeded = 2,
    PaidOut = 3,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundingError {
    InvalidAmount = 1,
    DeadlinePassed = 2,
    FundingStillOpen = 3,
    InvalidStateForOperation = 4,
    NothingToWithdraw = 5,
    TransferFailed = 6,
    ArithmeticOverflow = 7,
    NotInitialized = 8,
}
