use soroban_sdk::Env;

/// Convert minutes to seconds
pub fn minutes_to_seconds(minutes: u64) -> Option<u64> {
    minutes.checked_mul(60)
}

/// Get current timestamp
pub fn get_current_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Check if `deadline` is strictly behind `now`
pub fn has_passed(deadline: u64, now: u64) -> bool {
    now > deadline
}
