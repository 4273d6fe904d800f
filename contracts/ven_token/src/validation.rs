use soroban_sdk::{Address, Env, String};
use crate::storage;
use crate::types::VenError;

// ============================================================================
// VALIDAÇÕES
// ============================================================================

/// Garante que `initialize` só roda uma vez
pub fn require_not_initialized(env: &Env) -> Result<(), VenError> {
    if storage::has_owner(env) {
        return Err(VenError::AlreadyInitialized);
    }
    Ok(())
}

/// Owner gravado, ou `NotInitialized`
pub fn require_owner(env: &Env) -> Result<Address, VenError> {
    storage::get_owner(env).ok_or(VenError::NotInitialized)
}

/// Valida se o caller é o owner
pub fn require_is_owner(env: &Env, caller: &Address) -> Result<(), VenError> {
    let owner = require_owner(env)?;
    if caller != &owner {
        return Err(VenError::Unauthorized);
    }
    Ok(())
}

/// Nome/símbolo: não vazio e dentro do limite
pub fn require_valid_metadata_text(value: &String, max_len: u32) -> Result<(), VenError> {
    let len = value.len();
    if len == 0 || len > max_len {
        return Err(VenError::InvalidMetadata);
    }
    Ok(())
}

/// Nome/símbolo do SIP-010: além dos limites, só bytes ASCII
pub fn require_valid_ascii_text(value: &String, max_len: u32) -> Result<(), VenError> {
    require_valid_metadata_text(value, max_len)?;

    let len = value.len() as usize;
    let mut buf = [0u8; storage::MAX_NAME_LEN as usize];
    if len > buf.len() {
        return Err(VenError::InvalidMetadata);
    }
    value.copy_into_slice(&mut buf[..len]);
    if !buf[..len].is_ascii() {
        return Err(VenError::InvalidMetadata);
    }
    Ok(())
}

/// URI opcional; se presente, 1..=MAX_URI_LEN bytes
pub fn require_valid_uri(uri: &Option<String>) -> Result<(), VenError> {
    match uri {
        Some(value) => require_valid_metadata_text(value, storage::MAX_URI_LEN),
        None => Ok(()),
    }
}
