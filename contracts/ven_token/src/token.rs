use soroban_sdk::{contract, contractimpl, Address, Env, String};
use crate::admin;
use crate::events;
use crate::storage;
use crate::types::{ContractInfo, TokenMetadata, VenError};
use crate::validation;

/// Funções que só leem estado. Qualquer chamada fora desta lista
/// é tratada como escrita.
pub const READ_ONLY_FUNCTIONS: [&str; 6] = [
    "get_name",
    "get_symbol",
    "get_decimals",
    "get_token_uri",
    "get_total_supply",
    "get_contract_info",
];

//
// CONTRATO PRINCIPAL - VEN TOKEN
//

#[contract]
pub struct VenToken;

#[contractimpl]
impl VenToken {

    //
    // INICIALIZAÇÃO
    //

    /// Inicializa o contrato VenToken.
    ///
    /// # Parâmetros
    /// - `owner`: Endereço do dono do contrato (o deployer)
    /// - `name`: Nome do token (ex: "VEN Token")
    /// - `symbol`: Símbolo do token (ex: "VT")
    ///
    /// # Erros
    /// - `AlreadyInitialized`: Se o contrato já foi inicializado
    /// - `InvalidMetadata`: Nome ou símbolo vazio, maior que 32 ou não ASCII
    pub fn initialize(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
    ) -> Result<(), VenError> {
        // CHECKS
        validation::require_not_initialized(&env)?;
        validation::require_valid_ascii_text(&name, storage::MAX_NAME_LEN)?;
        validation::require_valid_ascii_text(&symbol, storage::MAX_SYMBOL_LEN)?;

        // EFFECTS
        storage::set_owner(&env, &owner);
        storage::set_metadata(
            &env,
            &TokenMetadata {
                name,
                symbol,
                decimals: storage::DECIMALS, // Fixo em 6 decimais
            },
        );
        storage::set_current_supply(&env, storage::INITIAL_SUPPLY);
        storage::set_token_uri(&env, &None);
        storage::bump_critical_storage(&env);

        // INTERACTIONS
        events::emit_initialized(&env, &owner, storage::INITIAL_SUPPLY);

        Ok(())
    }

    //
    // CONSULTAS (somente leitura)
    // Não escrevem storage, não fazem bump de TTL, não emitem eventos.
    //

    /// Retorna o nome do token.
    pub fn get_name(env: Env) -> Result<String, VenError> {
        Ok(Self::metadata(&env)?.name)
    }

    /// Retorna o símbolo do token.
    pub fn get_symbol(env: Env) -> Result<String, VenError> {
        Ok(Self::metadata(&env)?.symbol)
    }

    /// Retorna o número de decimais.
    pub fn get_decimals(env: Env) -> Result<u32, VenError> {
        Ok(Self::metadata(&env)?.decimals)
    }

    /// Retorna a URI do token, `None` enquanto o owner não configurar.
    pub fn get_token_uri(env: Env) -> Result<Option<String>, VenError> {
        validation::require_owner(&env)?;
        Ok(storage::get_token_uri(&env))
    }

    /// Retorna o supply em circulação.
    pub fn get_total_supply(env: Env) -> Result<u128, VenError> {
        validation::require_owner(&env)?;
        Ok(storage::get_current_supply(&env))
    }

    /// Snapshot agregado: metadados, supplies e owner.
    pub fn get_contract_info(env: Env) -> Result<ContractInfo, VenError> {
        let contract_owner = validation::require_owner(&env)?;
        let metadata = Self::metadata(&env)?;

        Ok(ContractInfo {
            name: metadata.name,
            symbol: metadata.symbol,
            decimals: metadata.decimals,
            max_supply: storage::MAX_SUPPLY,
            current_supply: storage::get_current_supply(&env),
            contract_owner,
        })
    }

    //
    // FUNÇÕES ADMINISTRATIVAS (apenas owner)
    //

    /// Configura ou remove a URI do token.
    pub fn set_token_uri(
        env: Env,
        caller: Address,
        uri: Option<String>,
    ) -> Result<(), VenError> {
        admin::set_token_uri(&env, &caller, uri)
    }

    /// Transfere o ownership do contrato.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), VenError> {
        admin::transfer_ownership(&env, &caller, &new_owner)
    }
}

impl VenToken {
    fn metadata(env: &Env) -> Result<TokenMetadata, VenError> {
        storage::get_metadata(env).ok_or(VenError::NotInitialized)
    }
}

//
// TESTES UNITÁRIOS
//
