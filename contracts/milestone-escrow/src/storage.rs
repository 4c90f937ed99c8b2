use crate::types::{Contribution, Milestone, ProjectEscrow, StorageKey};
use soroban_sdk::{Address, Env, String};

// TTL constants for persistent records
const DAY_IN_LEDGERS: u32 = 17280; // ~5 second block time
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

// ========== Initialization ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&StorageKey::Initialized, &true);
}

// ========== Admin ==========

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
}

// ========== Paused State ==========

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&StorageKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&StorageKey::Paused, &paused);
}

// ========== Escrow Token ==========

pub fn get_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Token)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&StorageKey::Token, token);
}

// ========== Total Escrowed ==========

pub fn get_total_escrowed(env: &Env) -> i128 {
    env.storage().instance().get(&StorageKey::TotalEscrowed).unwrap_or(0)
}

pub fn add_total_escrowed(env: &Env, amount: i128) {
    let total = get_total_escrowed(env) + amount;
    env.storage().instance().set(&StorageKey::TotalEscrowed, &total);
}

// ========== Projects ==========

pub fn has_project(env: &Env, project_id: &String) -> bool {
    let key = StorageKey::Project(project_id.clone());
    env.storage().persistent().has(&key)
}

pub fn get_project(env: &Env, project_id: &String) -> Option<ProjectEscrow> {
    let key = StorageKey::Project(project_id.clone());
    let project = env.storage().persistent().get::<_, ProjectEscrow>(&key);
    if project.is_some() {
        env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    project
}

pub fn set_project(env: &Env, project_id: &String, project: &ProjectEscrow) {
    let key = StorageKey::Project(project_id.clone());
    env.storage().persistent().set(&key, project);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Milestones ==========

pub fn get_milestone(env: &Env, project_id: &String, index: u32) -> Option<Milestone> {
    let key = StorageKey::Milestone(project_id.clone(), index);
    let milestone = env.storage().persistent().get::<_, Milestone>(&key);
    if milestone.is_some() {
        env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    milestone
}

pub fn set_milestone(env: &Env, project_id: &String, index: u32, milestone: &Milestone) {
    let key = StorageKey::Milestone(project_id.clone(), index);
    env.storage().persistent().set(&key, milestone);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Contributions ==========

pub fn get_contribution(env: &Env, project_id: &String, contributor: &Address) -> Option<Contribution> {
    let key = StorageKey::Contribution(project_id.clone(), contributor.clone());
    let contribution = env.storage().persistent().get::<_, Contribution>(&key);
    if contribution.is_some() {
        env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    contribution
}

pub fn set_contribution(env: &Env, project_id: &String, contributor: &Address, contribution: &Contribution) {
    let key = StorageKey::Contribution(project_id.clone(), contributor.clone());
    env.storage().persistent().set(&key, contribution);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
