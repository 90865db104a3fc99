use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

pub const TRANSFER: Symbol = symbol_short!("transfer");
pub const APPROVE: Symbol = symbol_short!("approve");

/// Ownership change of a single token. `from` is `None` when the token is minted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferEvent {
    pub from: Option<Address>,
    pub to: Address,
    pub token_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovalEvent {
    pub owner: Address,
    pub approved: Option<Address>,
    pub token_id: u32,
}

pub fn transfer(env: &Env, from: Option<Address>, to: &Address, token_id: u32) {
    let event = TransferEvent {
        from,
        to: to.clone(),
        token_id,
    };
    env.events().publish((TRANSFER, to.clone()), event);
}

pub fn approve(env: &Env, owner: &Address, approved: Option<Address>, token_id: u32) {
    let event = ApprovalEvent {
        owner: owner.clone(),
        approved,
        token_id,
    };
    env.events().publish((APPROVE, owner.clone()), event);
}
