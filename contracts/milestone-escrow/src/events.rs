use soroban_sdk::{contracttype, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractInitializedEvent {
    pub admin: Address,
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractPausedEvent {
    pub admin: Address,
    pub is_paused: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectCreatedEvent {
    pub project_id: String,
    pub recipient: Address,
    pub milestones_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowFundedEvent {
    pub project_id: String,
    pub contributor: Address,
    pub amount: i128,
    pub total_funded: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneReleasedEvent {
    pub project_id: String,
    pub milestone_index: u32,
    pub verifier: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundWindowOpenedEvent {
    pub project_id: String,
    pub window_start: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundClaimedEvent {
    pub project_id: String,
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_contract_initialized(env: &Env, admin: Address, token: Address) {
    let event = ContractInitializedEvent { admin: admin.clone(), token };
    env.events().publish(("contract_initialized", admin), event);
}

pub fn emit_contract_paused(env: &Env, admin: Address, is_paused: bool) {
    let event = ContractPausedEvent { admin: admin.clone(), is_paused };
    env.events().publish(("contract_paused", admin), event);
}

pub fn emit_project_created(env: &Env, project_id: String, recipient: Address, milestones_count: u32) {
    let event = ProjectCreatedEvent {
        project_id: project_id.clone(),
        recipient: recipient.clone(),
        milestones_count,
    };
    env.events().publish(("project_created", project_id, recipient), event);
}

pub fn emit_escrow_funded(env: &Env, project_id: String, contributor: Address, amount: i128, total_funded: i128) {
    let event = EscrowFundedEvent {
        project_id: project_id.clone(),
        contributor: contributor.clone(),
        amount,
        total_funded,
    };
    env.events().publish(("escrow_funded", project_id, contributor), event);
}

pub fn emit_milestone_released(env: &Env, project_id: String, milestone_index: u32, verifier: Address, amount: i128) {
    let event = MilestoneReleasedEvent {
        project_id: project_id.clone(),
        milestone_index,
        verifier: verifier.clone(),
        amount,
    };
    env.events().publish(("milestone_released", project_id, milestone_index), event);
}

pub fn emit_refund_window_opened(env: &Env, project_id: String, window_start: u32) {
    let event = RefundWindowOpenedEvent { project_id: project_id.clone(), window_start };
    env.events().publish(("refund_window_opened", project_id), event);
}

pub fn emit_refund_claimed(env: &Env, project_id: String, contributor: Address, amount: i128) {
    let event = RefundClaimedEvent {
        project_id: project_id.clone(),
        contributor: contributor.clone(),
        amount,
    };
    env.events().publish(("refund_claimed", project_id, contributor), event);
}
