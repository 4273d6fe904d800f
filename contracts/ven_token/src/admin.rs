use crate::events;
use crate::storage;
use crate::types::VenError;
use crate::validation;
use soroban_sdk::{Address, Env, String};

// ============================================================================
// ADMIN OPS - METADADOS E OWNERSHIP
// ============================================================================

/// Configura (ou remove, com `None`) a URI do token.
/// Só o owner atual pode chamar.
pub fn set_token_uri(
    env: &Env,
    caller: &Address,
    uri: Option<String>,
) -> Result<(), VenError> {
    // CHECKS
    caller.require_auth();
    validation::require_is_owner(env, caller)?;
    validation::require_valid_uri(&uri)?;

    // EFFECTS
    storage::set_token_uri(env, &uri);
    storage::bump_critical_storage(env);

    // INTERACTIONS
    events::emit_token_uri_updated(env, &uri);

    Ok(())
}

/// Passa o contrato para `new_owner`.
/// O novo owner aparece em `get_contract_info` a partir daí.
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), VenError> {
    caller.require_auth();
    validation::require_is_owner(env, caller)?;

    storage::set_owner(env, new_owner);
    storage::bump_critical_storage(env);

    events::emit_ownership_transferred(env, caller, new_owner);

    Ok(())
}
