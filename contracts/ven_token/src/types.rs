use soroban_sdk::{contracterror, contracttype, Address, String};

// ============================================================================
// ERROS DO CONTRATO
// ============================================================================
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VenError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,

    // Nome/símbolo vazio ou longo demais, URI fora do limite
    InvalidMetadata = 4,
}

// ============================================================================
// METADADOS DO TOKEN
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

// ============================================================================
// SNAPSHOT AGREGADO (get_contract_info)
// ============================================================================

/// Visão somente-leitura de tudo que o contrato expõe sobre o token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub max_supply: u128,
    pub current_supply: u128,
    pub contract_owner: Address,
}
