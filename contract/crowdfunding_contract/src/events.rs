use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::campaign::CampaignFinished;

#[contracttype]
#[derive(Clone)]
pub struct ContributionEvent {
    pub contributor: Address,
    pub amount: i128,
    pub total_collected: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct PaidOutEvent {
    pub beneficiary: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct RefundEvent {
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_contributed(env: &Env, event: ContributionEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign"), Symbol::new(env, "contributed")),
        event,
    );
}

/// Payload is `(total_collected, succeeded)`.
pub fn emit_campaign_finished(env: &Env, event: CampaignFinished) {
    env.events().publish(
        (Symbol::new(env, "campaign"), Symbol::new(env, "finished")),
        (event.total_collected, event.succeeded),
    );
}

pub fn emit_paid_out(env: &Env, event: PaidOutEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign"), Symbol::new(env, "paid_out")),
        event,
    );
}

pub fn emit_refunded(env: &Env, event: RefundEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign"), Symbol::new(env, "refunded")),
        event,
    );
}
