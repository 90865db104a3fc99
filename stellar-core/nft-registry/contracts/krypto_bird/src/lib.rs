#![no_std]

mod events;
mod storage;


use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, String};

pub use events::{ApprovalEvent, TransferEvent};
pub use storage::TokenRecord;

#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[contracterror]
#[repr(u32)]
pub enum ContractError {
    DuplicateContent = 1,
    IndexOutOfRange = 2,
    TokenNotFound = 3,
    NotOwner = 4,
    NotAuthorized = 5,
}

/// Append-only NFT registry. Every token carries a unique URI and
/// identities are handed out sequentially starting at 1.
#[contract]
pub struct KryptoBird;

#[contractimpl]
impl KryptoBird {
    /// Deploy with an immutable collection name and symbol.
    pub fn __constructor(env: Env, name: String, symbol: String) {
        storage::set_name(&env, &name);
        storage::set_symbol(&env, &symbol);
        storage::set_total_supply(&env, 0);
        storage::extend_instance(&env);
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    pub fn name(env: Env) -> String {
        storage::get_name(&env)
    }

    pub fn symbol(env: Env) -> String {
        storage::get_symbol(&env)
    }

    /// URI of the token with the given identity
    pub fn token_uri(env: Env, token_id: u32) -> Result<String, ContractError> {
        Ok(Self::record(env, token_id)?.token_uri)
    }

    /// Full mint record of a token
    pub fn record(env: Env, token_id: u32) -> Result<TokenRecord, ContractError> {
        storage::get_record(&env, token_id).ok_or(ContractError::TokenNotFound)
    }

    /// Whether a URI has already been minted
    pub fn exists(env: Env, token_uri: String) -> bool {
        storage::has_token_uri(&env, &token_uri)
    }

    // ========================================================================
    // Minting
    // ========================================================================

    /// Mint a new token for `to`. The URI must not have been minted before,
    /// by anyone. Returns the assigned identity.
    pub fn mint(env: Env, to: Address, token_uri: String) -> Result<u32, ContractError> {
        to.require_auth();

        if storage::has_token_uri(&env, &token_uri) {
            return Err(ContractError::DuplicateContent);
        }

        let token_id = storage::get_total_supply(&env) + 1;
        let record = TokenRecord {
            token_id,
            token_uri: token_uri.clone(),
            minter: to.clone(),
            minted_at: env.ledger().timestamp(),
        };

        storage::set_record(&env, &record);
        storage::set_token_uri(&env, &token_uri, token_id);
        storage::set_total_supply(&env, token_id);
        storage::extend_instance(&env);

        storage::set_owner(&env, token_id, &to);
        let mut owned = storage::get_owned_tokens(&env, &to);
        owned.push_back(token_id);
        storage::set_owned_tokens(&env, &to, &owned);

        events::transfer(&env, None, &to, token_id);
        log!(&env, "minted token", token_id, to);

        Ok(token_id)
    }

    // ========================================================================
    // Enumeration
    // ========================================================================

    pub fn total_supply(env: Env) -> u32 {
        storage::get_total_supply(&env)
    }

    /// URI of the token at a zero-based mint position
    pub fn krypto_birdz(env: Env, index: u32) -> Result<String, ContractError> {
        let token_id = Self::token_by_index(env.clone(), index)?;
        Self::token_uri(env, token_id)
    }

    /// Identity of the token at a zero-based mint position
    pub fn token_by_index(env: Env, index: u32) -> Result<u32, ContractError> {
        if index >= storage::get_total_supply(&env) {
            return Err(ContractError::IndexOutOfRange);
        }
        Ok(index + 1)
    }

    pub fn token_of_owner_by_index(
        env: Env,
        owner: Address,
        index: u32,
    ) -> Result<u32, ContractError> {
        storage::get_owned_tokens(&env, &owner)
            .get(index)
            .ok_or(ContractError::IndexOutOfRange)
    }

    // ========================================================================
    // Ownership
    // ========================================================================

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, ContractError> {
        storage::get_owner(&env, token_id).ok_or(ContractError::TokenNotFound)
    }

    pub fn balance_of(env: Env, owner: Address) -> u32 {
        storage::get_owned_tokens(&env, &owner).len()
    }

    /// Set or clear the address allowed to move `token_id` for its owner
    pub fn approve(
        env: Env,
        owner: Address,
        approved: Option<Address>,
        token_id: u32,
    ) -> Result<(), ContractError> {
        owner.require_auth();

        if Self::owner_of(env.clone(), token_id)? != owner {
            return Err(ContractError::NotOwner);
        }

        match &approved {
            Some(spender) => storage::set_approved(&env, token_id, spender),
            None => storage::remove_approved(&env, token_id),
        }

        storage::extend_instance(&env);
        events::approve(&env, &owner, approved, token_id);
        Ok(())
    }

    pub fn get_approved(env: Env, token_id: u32) -> Result<Option<Address>, ContractError> {
        Self::owner_of(env.clone(), token_id)?;
        Ok(storage::get_approved(&env, token_id))
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), ContractError> {
        from.require_auth();

        if Self::owner_of(env.clone(), token_id)? != from {
            return Err(ContractError::NotOwner);
        }

        Self::move_token(&env, &from, &to, token_id);
        Ok(())
    }

    /// Transfer on behalf of the owner. `spender` must be the owner or the
    /// approved address of the token.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), ContractError> {
        spender.require_auth();

        let owner = Self::owner_of(env.clone(), token_id)?;
        if owner != from {
            return Err(ContractError::NotOwner);
        }

        if spender != owner && storage::get_approved(&env, token_id) != Some(spender.clone()) {
            return Err(ContractError::NotAuthorized);
        }

        Self::move_token(&env, &from, &to, token_id);
        Ok(())
    }

    // ========================================================================
    // Helper Functions
    // ========================================================================

    fn move_token(env: &Env, from: &Address, to: &Address, token_id: u32) {
        storage::extend_instance(env);
        storage::remove_approved(env, token_id);

        let mut from_tokens = storage::get_owned_tokens(env, from);
        if let Some(position) = from_tokens.first_index_of(token_id) {
            from_tokens.remove(position);
        }
        storage::set_owned_tokens(env, from, &from_tokens);

        let mut to_tokens = storage::get_owned_tokens(env, to);
        to_tokens.push_back(token_id);
        storage::set_owned_tokens(env, to, &to_tokens);

        storage::set_owner(env, token_id, to);

        events::transfer(env, Some(from.clone()), to, token_id);
        log!(env, "transferred token", token_id, from.clone(), to.clone());
    }
}
