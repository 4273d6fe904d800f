use soroban_sdk::{symbol_short, Address, Env, String};
use crate::types::TokenMetadata;

// ============================================================================
// CONSTANTES
// ============================================================================

/// Decimais fixos do VT
pub const DECIMALS: u32 = 6;

/// Supply máximo: 1 milhão VT com 6 decimais
pub const MAX_SUPPLY: u128 = 1_000_000_000_000; // 1M × 10^6

/// Supply em circulação no deploy
pub const INITIAL_SUPPLY: u128 = 0;

/// Limite de nome/símbolo (string-ascii 32 do SIP-010)
pub const MAX_NAME_LEN: u32 = 32;
pub const MAX_SYMBOL_LEN: u32 = 32;

/// Limite da URI (string-utf8 256 do SIP-010)
pub const MAX_URI_LEN: u32 = 256;

/// TTL para storage crítico (1 ano em ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// TTL
// ============================================================================

/// Faz bump do TTL da instance storage. Só é chamado em escritas,
/// as consultas de leitura não tocam em nada.
pub fn bump_critical_storage(env: &Env) {
    env.storage().instance().extend_ttl(
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

// ============================================================================
// OWNER
// ============================================================================

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&symbol_short!("owner"))
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&symbol_short!("owner"))
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&symbol_short!("owner"), owner);
}

// ============================================================================
// METADATA
// ============================================================================

pub fn get_metadata(env: &Env) -> Option<TokenMetadata> {
    env.storage().instance().get(&symbol_short!("metadata"))
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&symbol_short!("metadata"), metadata);
}

// ============================================================================
// TOKEN URI
// ============================================================================

pub fn get_token_uri(env: &Env) -> Option<String> {
    env.storage().instance().get(&symbol_short!("uri"))
}

pub fn set_token_uri(env: &Env, uri: &Option<String>) {
    match uri {
        Some(value) => env.storage().instance().set(&symbol_short!("uri"), value),
        None => env.storage().instance().remove(&symbol_short!("uri")),
    }
}

// ============================================================================
// SUPPLY
// ============================================================================

pub fn get_current_supply(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&symbol_short!("supply"))
        .unwrap_or(INITIAL_SUPPLY)
}

pub fn set_current_supply(env: &Env, amount: u128) {
    env.storage().instance().set(&symbol_short!("supply"), &amount);
}
