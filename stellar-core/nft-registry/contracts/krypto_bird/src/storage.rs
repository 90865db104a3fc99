use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

/// Immutable record written once per successful mint.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenRecord {
    pub token_id: u32,
    pub token_uri: String,
    pub minter: Address,
    pub minted_at: u64,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Record(u32),
    UriIndex(String),
    Owner(u32),
    OwnedTokens(Address),
    Approved(u32),
}

const NAME: Symbol = symbol_short!("name");
const SYMBOL: Symbol = symbol_short!("symbol");
const SUPPLY: Symbol = symbol_short!("supply");

const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_name(env: &Env) -> String {
    env.storage().instance().get(&NAME).unwrap()
}

pub fn set_name(env: &Env, name: &String) {
    env.storage().instance().set(&NAME, name);
}

pub fn get_symbol(env: &Env) -> String {
    env.storage().instance().get(&SYMBOL).unwrap()
}

pub fn set_symbol(env: &Env, symbol: &String) {
    env.storage().instance().set(&SYMBOL, symbol);
}

pub fn get_total_supply(env: &Env) -> u32 {
    env.storage().instance().get(&SUPPLY).unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: u32) {
    env.storage().instance().set(&SUPPLY, &supply);
}

pub fn get_record(env: &Env, token_id: u32) -> Option<TokenRecord> {
    let key = DataKey::Record(token_id);
    let record = env.storage().persistent().get(&key);
    if record.is_some() {
        extend_persistent(env, &key);
    }
    record
}

pub fn set_record(env: &Env, record: &TokenRecord) {
    let key = DataKey::Record(record.token_id);
    env.storage().persistent().set(&key, record);
    extend_persistent(env, &key);
}

pub fn has_token_uri(env: &Env, token_uri: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::UriIndex(token_uri.clone()))
}

pub fn set_token_uri(env: &Env, token_uri: &String, token_id: u32) {
    let key = DataKey::UriIndex(token_uri.clone());
    env.storage().persistent().set(&key, &token_id);
    extend_persistent(env, &key);
}

pub fn get_owner(env: &Env, token_id: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Owner(token_id))
}

pub fn set_owner(env: &Env, token_id: u32, owner: &Address) {
    let key = DataKey::Owner(token_id);
    env.storage().persistent().set(&key, owner);
    extend_persistent(env, &key);
}

pub fn get_owned_tokens(env: &Env, owner: &Address) -> Vec<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::OwnedTokens(owner.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn set_owned_tokens(env: &Env, owner: &Address, tokens: &Vec<u32>) {
    let key = DataKey::OwnedTokens(owner.clone());
    if tokens.is_empty() {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, tokens);
        extend_persistent(env, &key);
    }
}

pub fn get_approved(env: &Env, token_id: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Approved(token_id))
}

pub fn set_approved(env: &Env, token_id: u32, approved: &Address) {
    let key = DataKey::Approved(token_id);
    env.storage().persistent().set(&key, approved);
    extend_persistent(env, &key);
}

pub fn remove_approved(env: &Env, token_id: u32) {
    env.storage()
        .persistent()
        .remove(&DataKey::Approved(token_id));
}
