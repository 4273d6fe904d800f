use soroban_sdk::{symbol_short, Address, Env, String};

//
// EVENTOS DO TOKEN
//

// Deploy/inicialização: owner + supply inicial
pub fn emit_initialized(env: &Env, owner: &Address, supply: u128) {
    env.events().publish(
        (symbol_short!("init"), owner),
        supply,
    );
}

// URI configurada (None = removida)
pub fn emit_token_uri_updated(env: &Env, uri: &Option<String>) {
    env.events().publish(
        (symbol_short!("set_uri"),),
        uri.clone(),
    );
}

// Troca de owner
pub fn emit_ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
    env.events().publish(
        (symbol_short!("owner"), previous, new_owner),
        true,
    );
}

//
// TESTES
//
