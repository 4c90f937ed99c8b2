#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env, String, Vec};

mod errors;
mod events;
mod storage;
mod types;

use errors::Error;
use types::{Contribution, Milestone, MilestoneInput, ProjectEscrow};

/// Maximum number of milestones per project.
pub const MAX_MILESTONES: u32 = 10;

/// Refund claims are accepted for this many ledgers after the window opens.
pub const REFUND_WINDOW_LEDGERS: u32 = 144;

#[contract]
pub struct MilestoneEscrow;

#[contractimpl]
impl MilestoneEscrow {
    // ========== INITIALIZATION ==========

    /// Initialize the contract with the administrator and the escrow token.
    /// Callable exactly once.
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        storage::set_initialized(&env);
        storage::set_admin(&env, &admin);
        storage::set_token(&env, &token);
        storage::set_paused(&env, false);

        events::emit_contract_initialized(&env, admin, token);

        Ok(())
    }

    // ========== EMERGENCY CONTROL ==========

    /// Pause all mutating operations (admin only). Re-pausing is a no-op.
    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;

        storage::set_paused(&env, true);

        events::emit_contract_paused(&env, caller, true);

        Ok(())
    }

    /// Resume operations (admin only). Re-unpausing is a no-op.
    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;

        storage::set_paused(&env, false);

        events::emit_contract_paused(&env, caller, false);

        Ok(())
    }

    // ========== PROJECT LIFECYCLE ==========

    /// Create a project escrow with its milestone schedule (admin only).
    ///
    /// Milestone records are created in input order, all unverified. Any
    /// release percentage above 100 fails the whole call before a single
    /// record is written.
    pub fn create_project_escrow(
        env: Env,
        caller: Address,
        project_id: String,
        recipient: Address,
        milestones: Vec<MilestoneInput>,
    ) -> Result<(), Error> {
        Self::require_not_paused(&env)?;
        Self::require_admin(&env, &caller)?;

        if storage::has_project(&env, &project_id) {
            return Err(Error::ProjectAlreadyExists);
        }

        if milestones.len() > MAX_MILESTONES {
            return Err(Error::MaxMilestonesExceeded);
        }

        for input in milestones.iter() {
            if input.release_percentage > 100 {
                return Err(Error::InvalidPercentage);
            }
        }

        let project = ProjectEscrow {
            recipient: recipient.clone(),
            total_funded: 0,
            released: 0,
            milestones_count: milestones.len(),
            active: true,
            refund_window_start: None,
        };
        storage::set_project(&env, &project_id, &project);

        for (index, input) in milestones.iter().enumerate() {
            let milestone = Milestone {
                description: input.description,
                target_amount: input.target_amount,
                release_percentage: input.release_percentage,
                verified: false,
                verifier: None,
                verified_at: None,
            };
            storage::set_milestone(&env, &project_id, index as u32, &milestone);
        }

        events::emit_project_created(&env, project_id, recipient, project.milestones_count);

        Ok(())
    }

    /// Contribute funds to an active project.
    ///
    /// Transfers `amount` of the escrow token from the contributor into the
    /// pool. There is no cap against milestone targets; over-funding is
    /// permitted.
    pub fn fund_escrow(
        env: Env,
        contributor: Address,
        project_id: String,
        amount: i128,
    ) -> Result<(), Error> {
        Self::require_not_paused(&env)?;

        contributor.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let mut project = storage::get_project(&env, &project_id)
            .ok_or(Error::ProjectNotFoundOrInactive)?;
        if !project.active {
            return Err(Error::ProjectNotFoundOrInactive);
        }

        let token_addr = storage::get_token(&env).ok_or(Error::ProjectNotFoundOrInactive)?;
        let token_client = token::Client::new(&env, &token_addr);
        token_client.transfer(&contributor, &env.current_contract_address(), &amount);

        project.total_funded += amount;
        storage::set_project(&env, &project_id, &project);
        storage::add_total_escrowed(&env, amount);

        let mut contribution = storage::get_contribution(&env, &project_id, &contributor)
            .unwrap_or(Contribution {
                amount: 0,
                last_contribution_at: 0,
                refunded: false,
            });
        contribution.amount += amount;
        contribution.last_contribution_at = env.ledger().sequence();
        storage::set_contribution(&env, &project_id, &contributor, &contribution);

        events::emit_escrow_funded(&env, project_id, contributor, amount, project.total_funded);

        Ok(())
    }

    /// Verify a milestone and release its share of the pool (admin only).
    ///
    /// The payout is `total_funded * release_percentage / 100`, computed
    /// against the project's funding at verification time, so contributions
    /// made after creation raise the payout of milestones not yet verified.
    /// Returns the released amount.
    pub fn verify_and_release(
        env: Env,
        caller: Address,
        project_id: String,
        milestone_index: u32,
        verifier: Address,
    ) -> Result<i128, Error> {
        Self::require_not_paused(&env)?;
        Self::require_admin(&env, &caller)?;

        let mut project = storage::get_project(&env, &project_id)
            .ok_or(Error::ProjectNotFoundOrInactive)?;
        if !project.active {
            return Err(Error::ProjectNotFoundOrInactive);
        }

        if milestone_index >= project.milestones_count {
            return Err(Error::InvalidMilestoneIndex);
        }
        let mut milestone = storage::get_milestone(&env, &project_id, milestone_index)
            .ok_or(Error::InvalidMilestoneIndex)?;

        if milestone.verified {
            return Err(Error::AlreadyReleased);
        }

        let release_amount = project.total_funded * (milestone.release_percentage as i128) / 100;

        let token_addr = storage::get_token(&env).ok_or(Error::ProjectNotFoundOrInactive)?;
        let token_client = token::Client::new(&env, &token_addr);
        if token_client.balance(&env.current_contract_address()) < release_amount {
            return Err(Error::InsufficientFunds);
        }

        milestone.verified = true;
        milestone.verifier = Some(verifier.clone());
        milestone.verified_at = Some(env.ledger().sequence());
        storage::set_milestone(&env, &project_id, milestone_index, &milestone);

        project.released += release_amount;
        storage::set_project(&env, &project_id, &project);

        // Transfer last. If it fails after the balance pre-check passed, the
        // host rolls the whole invocation back.
        if release_amount > 0 {
            token_client.transfer(&env.current_contract_address(), &project.recipient, &release_amount);
        }

        events::emit_milestone_released(&env, project_id, milestone_index, verifier, release_amount);

        Ok(release_amount)
    }

    /// Deactivate an abandoned project and open its refund window (admin only).
    /// One-way: nothing ever reactivates a project afterwards.
    pub fn initiate_refund_window(env: Env, caller: Address, project_id: String) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;

        let mut project = storage::get_project(&env, &project_id)
            .ok_or(Error::ProjectNotFoundOrInactive)?;
        if !project.active {
            return Err(Error::ProjectNotFoundOrInactive);
        }
        if project.refund_window_start.is_some() {
            return Err(Error::RefundNotAllowed);
        }

        let window_start = env.ledger().sequence();
        project.active = false;
        project.refund_window_start = Some(window_start);
        storage::set_project(&env, &project_id, &project);

        events::emit_refund_window_opened(&env, project_id, window_start);

        Ok(())
    }

    /// Claim back the caller's full cumulative contribution while the refund
    /// window is open. At most one claim per contributor per project.
    /// Returns the refunded amount.
    pub fn claim_refund(env: Env, contributor: Address, project_id: String) -> Result<i128, Error> {
        Self::require_not_paused(&env)?;

        contributor.require_auth();

        let project = storage::get_project(&env, &project_id)
            .ok_or(Error::ProjectNotFoundOrInactive)?;

        let window_start = match project.refund_window_start {
            Some(start) if !project.active => start,
            _ => return Err(Error::RefundNotAllowed),
        };
        if env.ledger().sequence() >= window_start + REFUND_WINDOW_LEDGERS {
            return Err(Error::RefundNotAllowed);
        }

        let mut contribution = storage::get_contribution(&env, &project_id, &contributor)
            .ok_or(Error::RefundNotAllowed)?;
        if contribution.refunded || contribution.amount <= 0 {
            return Err(Error::RefundNotAllowed);
        }

        let token_addr = storage::get_token(&env).ok_or(Error::RefundNotAllowed)?;
        let token_client = token::Client::new(&env, &token_addr);
        if token_client.balance(&env.current_contract_address()) < contribution.amount {
            return Err(Error::InsufficientFunds);
        }

        contribution.refunded = true;
        storage::set_contribution(&env, &project_id, &contributor, &contribution);

        token_client.transfer(&env.current_contract_address(), &contributor, &contribution.amount);

        events::emit_refund_claimed(&env, project_id, contributor, contribution.amount);

        Ok(contribution.amount)
    }

    // ========== VIEWS ==========

    /// Get a project escrow record, or None if unknown.
    pub fn get_project_escrow(env: Env, project_id: String) -> Option<ProjectEscrow> {
        storage::get_project(&env, &project_id)
    }

    /// Get a milestone record, or None if unknown.
    pub fn get_milestone(env: Env, project_id: String, index: u32) -> Option<Milestone> {
        storage::get_milestone(&env, &project_id, index)
    }

    /// Get a contributor's record for a project, or None if unknown.
    pub fn get_contribution(env: Env, project_id: String, contributor: Address) -> Option<Contribution> {
        storage::get_contribution(&env, &project_id, &contributor)
    }

    /// Total amount ever escrowed across all projects.
    pub fn get_total_escrowed(env: Env) -> i128 {
        storage::get_total_escrowed(&env)
    }

    /// Current pool balance held by the contract.
    pub fn get_contract_balance(env: Env) -> i128 {
        match storage::get_token(&env) {
            Some(token_addr) => {
                token::Client::new(&env, &token_addr).balance(&env.current_contract_address())
            }
            None => 0,
        }
    }

    /// Check if the contract is paused.
    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    /// Get the administrator address.
    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env).ok_or(Error::NotAuthorized)
    }

    // ========== INTERNAL HELPERS ==========

    fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        let admin = storage::get_admin(env).ok_or(Error::NotAuthorized)?;
        if *caller != admin {
            return Err(Error::NotAuthorized);
        }
        Ok(())
    }

    fn require_not_paused(env: &Env) -> Result<(), Error> {
        if storage::is_paused(env) {
            return Err(Error::Paused);
        }
        Ok(())
    }
}
