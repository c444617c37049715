//! Campaign state machine and fund accounting.
//!
//! Nothing in here reads the ledger clock, moves tokens or publishes events.
//! Callers pass the current time in, execute the returned [`TransferRequest`]s
//! themselves and publish the returned [`CampaignFinished`] payloads.

use soroban_sdk::{contracttype, Address, Env, Map, String};

use crate::storage_types::{CampaignState, CrowdfundingError};
use crate::utils::has_passed;

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub name: String,
    pub target_amount: i128,
    pub deadline: u64,
    pub beneficiary: Address,
    pub state: CampaignState,
    pub total_collected: i128,
    pub contributions: Map<Address, i128>,
}

/// Value the caller must move out of the contract on the campaign's behalf.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TransferRequest {
    pub recipient: Address,
    pub amount: i128,
}

/// Emitted once, when the funding period is resolved.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignFinished {
    pub total_collected: i128,
    pub succeeded: bool,
}

impl Campaign {
    pub fn create(
        env: &Env,
        name: String,
        target_amount: i128,
        duration_secs: u64,
        beneficiary: Address,
        created_at: u64,
    ) -> Result<Self, CrowdfundingError> {
        if target_amount <= 0 {
            return Err(CrowdfundingError::InvalidAmount);
        }

        let deadline = created_at
            .checked_add(duration_secs)
            .ok_or(CrowdfundingError::ArithmeticOverflow)?;

        Ok(Self {
            name,
            target_amount,
            deadline,
            beneficiary,
            state: CampaignState::Ongoing,
            total_collected: 0,
            contributions: Map::new(env),
        })
    }

    pub fn contribute(
        &mut self,
        amount: i128,
        contributor: &Address,
        now: u64,
    ) -> Result<(), CrowdfundingError> {
        self.require_state(CampaignState::Ongoing)?;

        if amount <= 0 {
            return Err(CrowdfundingError::InvalidAmount);
        }
        if has_passed(self.deadline, now) {
            return Err(CrowdfundingError::DeadlinePassed);
        }

        let balance = self
            .amounts(contributor)
            .checked_add(amount)
            .ok_or(CrowdfundingError::ArithmeticOverflow)?;
        let total = self
            .total_collected
            .checked_add(amount)
            .ok_or(CrowdfundingError::ArithmeticOverflow)?;

        self.contributions.set(contributor.clone(), balance);
        self.total_collected = total;
        Ok(())
    }

    /// Closes the funding period once the deadline is behind `now`.
    ///
    /// Both outcomes produce a [`CampaignFinished`] carrying the total as it
    /// stood at resolution.
    pub fn resolve(&mut self, now: u64) -> Result<CampaignFinished, CrowdfundingError> {
        self.require_state(CampaignState::Ongoing)?;

        if !has_passed(self.deadline, now) {
            return Err(CrowdfundingError::FundingStillOpen);
        }

        let succeeded = self.total_collected >= self.target_amount;
        self.state = if succeeded {
            CampaignState::Succeeded
        } else {
            CampaignState::Failed
        };

        Ok(CampaignFinished {
            total_collected: self.total_collected,
            succeeded,
        })
    }

    /// Marks the campaign paid out and returns the beneficiary transfer.
    ///
    /// The state flips before the transfer happens; hand the request back to
    /// [`Campaign::rollback`] if the transfer does not go through.
    pub fn collect(&mut self) -> Result<TransferRequest, CrowdfundingError> {
        self.require_state(CampaignState::Succeeded)?;

        self.state = CampaignState::PaidOut;
        Ok(TransferRequest {
            recipient: self.beneficiary.clone(),
            amount: self.total_collected,
        })
    }

    /// Zeroes the contributor's balance and returns the refund transfer.
    ///
    /// As with [`Campaign::collect`], a failed transfer must be rolled back.
    pub fn withdraw(&mut self, contributor: &Address) -> Result<TransferRequest, CrowdfundingError> {
        self.require_state(CampaignState::Failed)?;

        let amount = self.amounts(contributor);
        if amount <= 0 {
            return Err(CrowdfundingError::NothingToWithdraw);
        }

        self.contributions.set(contributor.clone(), 0);
        Ok(TransferRequest {
            recipient: contributor.clone(),
            amount,
        })
    }

    /// Undoes the bookkeeping of a payout whose transfer failed.
    ///
    /// A request that no pending payout could have produced is rejected with
    /// `InvalidStateForOperation` and leaves the campaign untouched.
    pub fn rollback(&mut self, request: &TransferRequest) -> Result<(), CrowdfundingError> {
        match self.state {
            CampaignState::PaidOut
                if request.recipient == self.beneficiary
                    && request.amount == self.total_collected =>
            {
                self.state = CampaignState::Succeeded;
                Ok(())
            }
            CampaignState::Failed if request.amount > 0 => {
                let balance = self
                    .amounts(&request.recipient)
                    .checked_add(request.amount)
                    .ok_or(CrowdfundingError::ArithmeticOverflow)?;
                self.contributions.set(request.recipient.clone(), balance);
                Ok(())
            }
            _ => Err(CrowdfundingError::InvalidStateForOperation),
        }
    }

    pub fn name(&self) -> String {
        self.name.clone()
    }

    pub fn target_amount(&self) -> i128 {
        self.target_amount
    }

    pub fn funding_deadline(&self) -> u64 {
        self.deadline
    }

    pub fn beneficiary(&self) -> Address {
        self.beneficiary.clone()
    }

    pub fn state(&self) -> CampaignState {
        self.state
    }

    pub fn total_collected(&self) -> i128 {
        self.total_collected
    }

    pub fn amounts(&self, contributor: &Address) -> i128 {
        self.contributions.get(contributor.clone()).unwrap_or(0)
    }

    fn require_state(&self, expected: CampaignState) -> Result<(), CrowdfundingError> {
        if self.state != expected {
            return Err(CrowdfundingError::InvalidStateForOperation);
        }
        Ok(())
    }
}
