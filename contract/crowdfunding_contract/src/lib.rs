#![no_std]

mod campaign;
mod events;
mod storage;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, panic_with_error, token, Address, Env, String};

pub use campaign::{Campaign, CampaignFinished, TransferRequest};
pub use storage_types::{CampaignState, CrowdfundingError};
use utils::{get_current_timestamp, minutes_to_seconds};

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Open a campaign that accepts `token` until `duration_minutes` from now
    pub fn __constructor(
        env: Env,
        name: String,
        target_amount: i128,
        duration_minutes: u64,
        beneficiary: Address,
        token: Address,
    ) {
        let duration_secs = minutes_to_seconds(duration_minutes)
            .unwrap_or_else(|| panic_with_error!(&env, CrowdfundingError::ArithmeticOverflow));
        let campaign = Campaign::create(
            &env,
            name,
            target_amount,
            duration_secs,
            beneficiary,
            get_current_timestamp(&env),
        )
        .unwrap_or_else(|err| panic_with_error!(&env, err));

        storage::set_campaign(&env, &campaign);
        storage::set_token(&env, &token);
    }

    /// Pledge `amount` of the campaign token before the deadline
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<(), CrowdfundingError> {
        contributor.require_auth();

        let mut campaign = storage::get_campaign(&env)?;
        let token_address = storage::get_token(&env)?;

        campaign.contribute(amount, &contributor, get_current_timestamp(&env))?;

        let token_client = token::Client::new(&env, &token_address);
        token_client.transfer(&contributor, &env.current_contract_address(), &amount);

        storage::set_campaign(&env, &campaign);

        events::emit_contributed(
            &env,
            events::ContributionEvent {
                contributor,
                amount,
                total_collected: campaign.total_collected(),
            },
        );

        Ok(())
    }

    /// Close the funding period once the deadline has passed
    pub fn finish_crowdfunding(env: Env) -> Result<CampaignState, CrowdfundingError> {
        let mut campaign = storage::get_campaign(&env)?;

        let finished = campaign.resolve(get_current_timestamp(&env))?;
        storage::set_campaign(&env, &campaign);

        log!(&env, "campaign resolved", finished.total_collected, finished.succeeded);
        events::emit_campaign_finished(&env, finished);

        Ok(campaign.state())
    }

    /// Release the collected funds to the beneficiary. Open to any caller.
    pub fn collect(env: Env) -> Result<i128, CrowdfundingError> {
        let mut campaign = storage::get_campaign(&env)?;
        let token_address = storage::get_token(&env)?;

        let request = campaign.collect()?;
        Self::settle(&env, &mut campaign, &token_address, &request)?;

        events::emit_paid_out(
            &env,
            events::PaidOutEvent {
                beneficiary: request.recipient,
                amount: request.amount,
            },
        );

        Ok(request.amount)
    }

    /// Refund the contributor's balance after a failed campaign
    pub fn withdraw(env: Env, contributor: Address) -> Result<i128, CrowdfundingError> {
        contributor.require_auth();

        let mut campaign = storage::get_campaign(&env)?;
        let token_address = storage::get_token(&env)?;

        let request = campaign.withdraw(&contributor)?;
        Self::settle(&env, &mut campaign, &token_address, &request)?;

        events::emit_refunded(
            &env,
            events::RefundEvent {
                contributor,
                amount: request.amount,
            },
        );

        Ok(request.amount)
    }

    pub fn name(env: Env) -> Result<String, CrowdfundingError> {
        Ok(storage::get_campaign(&env)?.name())
    }

    pub fn target_amount(env: Env) -> Result<i128, CrowdfundingError> {
        Ok(storage::get_campaign(&env)?.target_amount())
    }

    pub fn funding_deadline(env: Env) -> Result<u64, CrowdfundingError> {
        Ok(storage::get_campaign(&env)?.funding_deadline())
    }

    pub fn beneficiary(env: Env) -> Result<Address, CrowdfundingError> {
        Ok(storage::get_campaign(&env)?.beneficiary())
    }

    pub fn state(env: Env) -> Result<CampaignState, CrowdfundingError> {
        Ok(storage::get_campaign(&env)?.state())
    }

    pub fn total_collected(env: Env) -> Result<i128, CrowdfundingError> {
        Ok(storage::get_campaign(&env)?.total_collected())
    }

    /// Amount still owed to `contributor`
    pub fn amounts(env: Env, contributor: Address) -> Result<i128, CrowdfundingError> {
        Ok(storage::get_campaign(&env)?.amounts(&contributor))
    }

    pub fn token(env: Env) -> Result<Address, CrowdfundingError> {
        storage::get_token(&env)
    }

    pub fn campaign(env: Env) -> Result<Campaign, CrowdfundingError> {
        storage::get_campaign(&env)
    }
}

impl CrowdfundingContract {
    // The payout is recorded before the token call and restored if it fails.
    fn settle(
        env: &Env,
        campaign: &mut Campaign,
        token_address: &Address,
        request: &TransferRequest,
    ) -> Result<(), CrowdfundingError> {
        storage::set_campaign(env, campaign);

        let token_client = token::Client::new(env, token_address);
        let result = token_client.try_transfer(
            &env.current_contract_address(),
            &request.recipient,
            &request.amount,
        );

        if !matches!(result, Ok(Ok(()))) {
            log!(env, "transfer failed", request.recipient, request.amount);
            campaign.rollback(request)?;
            storage::set_campaign(env, campaign);
            return Err(CrowdfundingError::TransferFailed);
        }

        Ok(())
    }
}
