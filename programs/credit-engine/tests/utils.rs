// Test utilities for the credit engine program
//
// Drives both programs: the hackathon registry provides verifier
// sets, the engine extends credit and disburses through the vault.

use litesvm::LiteSVM;
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;

use solana_system_interface::program::ID as system_program;

// Program IDs matching declare_id!
pub const ENGINE_PROGRAM_ID: Pubkey = Pubkey::new_from_array(credit_engine::ID.to_bytes());
pub const REGISTRY_PROGRAM_ID: Pubkey =
    Pubkey::new_from_array(hackathon_registry::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;

// PDA Seeds (must match constants.rs of both programs)
pub const ENGINE: &[u8] = b"engine";
pub const VAULT_AUTHORITY: &[u8] = b"vault_authority";
pub const CREDIT_LINE: &[u8] = b"credit_line";
pub const PROJECT: &[u8] = b"project";
pub const SCORE_WEIGHTS: &[u8] = b"score_weights";
pub const IDENTITY: &[u8] = b"identity";
pub const REGISTRY: &[u8] = b"registry";
pub const HACKATHON: &[u8] = b"hackathon";
pub const HACKATHON_NAME: &[u8] = b"hackathon_name";

pub const DECIMALS: u8 = 6;

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

// Setup LiteSVM with both programs
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    svm.add_program(
        REGISTRY_PROGRAM_ID,
        include_bytes!("../../../target/deploy/hackathon_registry.so"),
    );
    svm.add_program(
        ENGINE_PROGRAM_ID,
        include_bytes!("../../../target/deploy/credit_engine.so"),
    );
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Sign and send a single-instruction transaction
pub fn send_ix(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
) -> Result<(), Box<dyn std::error::Error>> {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[payer],
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx)
        .map(|_| ())
        .map_err(|e| format!("{:?}", e.err).into())
}

// ======================== PDA DERIVATION ========================

pub fn derive_engine_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ENGINE], &ENGINE_PROGRAM_ID)
}

pub fn derive_vault_authority_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_AUTHORITY], &ENGINE_PROGRAM_ID)
}

pub fn derive_credit_line_pda(developer: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CREDIT_LINE, developer.as_ref()], &ENGINE_PROGRAM_ID)
}

pub fn derive_project_pda(project_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PROJECT, &project_id.to_le_bytes()],
        &ENGINE_PROGRAM_ID,
    )
}

pub fn derive_score_weights_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SCORE_WEIGHTS], &ENGINE_PROGRAM_ID)
}

pub fn derive_identity_pda(developer: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[IDENTITY, developer.as_ref()], &ENGINE_PROGRAM_ID)
}

pub fn derive_registry_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REGISTRY], &REGISTRY_PROGRAM_ID)
}

pub fn derive_hackathon_pda(hackathon_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[HACKATHON, &hackathon_id.to_le_bytes()],
        &REGISTRY_PROGRAM_ID,
    )
}

pub fn derive_hackathon_name_pda(name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[HACKATHON_NAME, name.as_bytes()],
        &REGISTRY_PROGRAM_ID,
    )
}

pub fn vault_address(funding_mint: &Pubkey) -> Pubkey {
    let (vault_authority, _) = derive_vault_authority_pda();
    get_associated_token_address(&vault_authority, funding_mint)
}

// ======================== ACCOUNT READERS ========================

// Parsed mirror of the CreditLine account
// Layout: 8 disc | 32 developer | 8 limit | 8 used | 8 repaid | 8 reputation | 1 verified | 1 active | 1 bump
#[derive(Debug)]
pub struct CreditLineData {
    pub developer: Pubkey,
    pub total_limit: u64,
    pub used_amount: u64,
    pub total_repaid: u64,
    pub reputation: u64,
    pub verified: bool,
    pub active: bool,
}

pub fn read_credit_line(svm: &LiteSVM, credit_line: &Pubkey) -> CreditLineData {
    let data = svm
        .get_account(credit_line)
        .expect("Credit line should exist")
        .data;
    CreditLineData {
        developer: Pubkey::new_from_array(data[8..40].try_into().unwrap()),
        total_limit: u64::from_le_bytes(data[40..48].try_into().unwrap()),
        used_amount: u64::from_le_bytes(data[48..56].try_into().unwrap()),
        total_repaid: u64::from_le_bytes(data[56..64].try_into().unwrap()),
        reputation: u64::from_le_bytes(data[64..72].try_into().unwrap()),
        verified: data[72] != 0,
        active: data[73] != 0,
    }
}

#[derive(Debug)]
pub struct MilestoneData {
    pub description: String,
    pub amount: u64,
    pub completed: bool,
    pub approvals: Vec<Pubkey>,
}

#[derive(Debug)]
pub struct ProjectData {
    pub project_id: u64,
    pub hackathon: Pubkey,
    pub hackathon_id: u64,
    pub developer: Pubkey,
    pub name: String,
    pub metadata_url: String,
    pub funding_amount: u64,
    pub milestones: Vec<MilestoneData>,
    pub milestones_completed: u8,
    pub active: bool,
}

// Parse a Project account (borsh layout, skipping the discriminator)
pub fn read_project(svm: &LiteSVM, project: &Pubkey) -> ProjectData {
    let data = svm
        .get_account(project)
        .expect("Project should exist")
        .data;
    let mut pos = 8usize;

    let read_u64 = |data: &[u8], pos: &mut usize| {
        let v = u64::from_le_bytes(data[*pos..*pos + 8].try_into().unwrap());
        *pos += 8;
        v
    };
    let read_pubkey = |data: &[u8], pos: &mut usize| {
        let v = Pubkey::new_from_array(data[*pos..*pos + 32].try_into().unwrap());
        *pos += 32;
        v
    };
    let read_string = |data: &[u8], pos: &mut usize| {
        let len = u32::from_le_bytes(data[*pos..*pos + 4].try_into().unwrap()) as usize;
        *pos += 4;
        let s = String::from_utf8(data[*pos..*pos + len].to_vec()).unwrap();
        *pos += len;
        s
    };

    let project_id = read_u64(&data, &mut pos);
    let hackathon = read_pubkey(&data, &mut pos);
    let hackathon_id = read_u64(&data, &mut pos);
    let developer = read_pubkey(&data, &mut pos);
    let name = read_string(&data, &mut pos);
    let metadata_url = read_string(&data, &mut pos);
    let funding_amount = read_u64(&data, &mut pos);

    let milestone_count = u32::from_le_bytes(data[pos..pos + 4].try_into().unwrap()) as usize;
    pos += 4;
    let mut milestones = Vec::with_capacity(milestone_count);
    for _ in 0..milestone_count {
        let description = read_string(&data, &mut pos);
        let amount = read_u64(&data, &mut pos);
        let completed = data[pos] != 0;
        pos += 1;
        let approvals_len =
            u32::from_le_bytes(data[pos..pos + 4].try_into().unwrap()) as usize;
        pos += 4;
        let approvals = (0..approvals_len)
            .map(|_| read_pubkey(&data, &mut pos))
            .collect();
        milestones.push(MilestoneData {
            description,
            amount,
            completed,
            approvals,
        });
    }

    let milestones_completed = data[pos];
    pos += 1;
    let active = data[pos] != 0;

    ProjectData {
        project_id,
        hackathon,
        hackathon_id,
        developer,
        name,
        metadata_url,
        funding_amount,
        milestones,
        milestones_completed,
        active,
    }
}

// Read the credit parameters from the engine config
// Layout: 8 disc | 32 admin | 32 treasury | 32 registry | 32 mint | 8 base | 8 mult | 8 max | 8 count | 1 paused | ...
pub fn read_credit_parameters(svm: &LiteSVM) -> (u64, u64, u64) {
    let (config, _) = derive_engine_pda();
    let data = svm.get_account(&config).expect("Config should exist").data;
    (
        u64::from_le_bytes(data[136..144].try_into().unwrap()),
        u64::from_le_bytes(data[144..152].try_into().unwrap()),
        u64::from_le_bytes(data[152..160].try_into().unwrap()),
    )
}

pub fn get_project_count(svm: &LiteSVM) -> u64 {
    let (config, _) = derive_engine_pda();
    let data = svm.get_account(&config).expect("Config should exist").data;
    u64::from_le_bytes(data[160..168].try_into().unwrap())
}

// ======================== REGISTRY INSTRUCTION BUILDERS ========================

pub fn build_initialize_registry_ix(admin: &Pubkey) -> Instruction {
    let (registry_config, _) = derive_registry_pda();

    Instruction {
        program_id: REGISTRY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(registry_config, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("initialize_registry").to_vec(),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn build_create_hackathon_ix(
    creator: &Pubkey,
    hackathon_id: u64,
    name: &str,
    organizer: &Pubkey,
    initial_verifiers: &[Pubkey],
    required_signatures: u8,
    start_time: i64,
    end_time: i64,
) -> Instruction {
    let (registry_config, _) = derive_registry_pda();
    let (hackathon, _) = derive_hackathon_pda(hackathon_id);
    let (hackathon_name, _) = derive_hackathon_name_pda(name);

    let mut data = anchor_discriminator("create_hackathon").to_vec();
    data.extend_from_slice(&(name.len() as u32).to_le_bytes());
    data.extend_from_slice(name.as_bytes());
    data.extend_from_slice(organizer.as_ref());
    data.extend_from_slice(&(initial_verifiers.len() as u32).to_le_bytes());
    for v in initial_verifiers {
        data.extend_from_slice(v.as_ref());
    }
    data.push(required_signatures);
    data.extend_from_slice(&start_time.to_le_bytes());
    data.extend_from_slice(&end_time.to_le_bytes());

    Instruction {
        program_id: REGISTRY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*creator, true),
            AccountMeta::new(registry_config, false),
            AccountMeta::new(hackathon, false),
            AccountMeta::new(hackathon_name, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_set_hackathon_status_ix(
    authority: &Pubkey,
    hackathon_id: u64,
    active: bool,
) -> Instruction {
    let (registry_config, _) = derive_registry_pda();
    let (hackathon, _) = derive_hackathon_pda(hackathon_id);

    let mut data = anchor_discriminator("set_hackathon_status").to_vec();
    data.push(active as u8);

    Instruction {
        program_id: REGISTRY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new_readonly(registry_config, false),
            AccountMeta::new(hackathon, false),
        ],
        data,
    }
}

// ======================== ENGINE INSTRUCTION BUILDERS ========================

pub fn build_initialize_engine_ix(
    admin: &Pubkey,
    treasury: &Pubkey,
    funding_mint: &Pubkey,
    base_amount: u64,
    per_point_multiplier: u64,
    max_amount: u64,
) -> Instruction {
    let (config, _) = derive_engine_pda();
    let (score_weights, _) = derive_score_weights_pda();
    let (vault_authority, _) = derive_vault_authority_pda();

    let mut data = anchor_discriminator("initialize_engine").to_vec();
    data.extend_from_slice(treasury.as_ref());
    data.extend_from_slice(&base_amount.to_le_bytes());
    data.extend_from_slice(&per_point_multiplier.to_le_bytes());
    data.extend_from_slice(&max_amount.to_le_bytes());

    Instruction {
        program_id: ENGINE_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(config, false),
            AccountMeta::new(score_weights, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new_readonly(*funding_mint, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_initialize_treasury_ix(payer: &Pubkey, funding_mint: &Pubkey) -> Instruction {
    let (config, _) = derive_engine_pda();
    let (vault_authority, _) = derive_vault_authority_pda();
    let vault = vault_address(funding_mint);

    Instruction {
        program_id: ENGINE_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new_readonly(*funding_mint, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("initialize_treasury").to_vec(),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn build_request_funding_ix(
    developer: &Pubkey,
    hackathon: &Pubkey,
    project_id: u64,
    reputation_score: u64,
    name: &str,
    metadata_url: &str,
    descriptions: &[&str],
    amounts: &[u64],
) -> Instruction {
    let (config, _) = derive_engine_pda();
    let (credit_line, _) = derive_credit_line_pda(developer);
    let (project, _) = derive_project_pda(project_id);

    let mut data = anchor_discriminator("request_funding").to_vec();
    data.extend_from_slice(&reputation_score.to_le_bytes());
    data.extend_from_slice(&(name.len() as u32).to_le_bytes());
    data.extend_from_slice(name.as_bytes());
    data.extend_from_slice(&(metadata_url.len() as u32).to_le_bytes());
    data.extend_from_slice(metadata_url.as_bytes());
    data.extend_from_slice(&(descriptions.len() as u32).to_le_bytes());
    for d in descriptions {
        data.extend_from_slice(&(d.len() as u32).to_le_bytes());
        data.extend_from_slice(d.as_bytes());
    }
    data.extend_from_slice(&(amounts.len() as u32).to_le_bytes());
    for a in amounts {
        data.extend_from_slice(&a.to_le_bytes());
    }

    Instruction {
        program_id: ENGINE_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*developer, true),
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(*hackathon, false),
            AccountMeta::new(credit_line, false),
            AccountMeta::new(project, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_approve_milestone_ix(
    verifier: &Pubkey,
    hackathon: &Pubkey,
    project_id: u64,
    developer: &Pubkey,
    funding_mint: &Pubkey,
    milestone_index: u8,
) -> Instruction {
    let (config, _) = derive_engine_pda();
    let (project, _) = derive_project_pda(project_id);
    let (credit_line, _) = derive_credit_line_pda(developer);
    let (vault_authority, _) = derive_vault_authority_pda();
    let vault = vault_address(funding_mint);
    let developer_token_account = get_associated_token_address(developer, funding_mint);

    let mut data = anchor_discriminator("approve_milestone").to_vec();
    data.push(milestone_index);

    Instruction {
        program_id: ENGINE_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*verifier, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new_readonly(*hackathon, false),
            AccountMeta::new(project, false),
            AccountMeta::new(credit_line, false),
            AccountMeta::new_readonly(*developer, false),
            AccountMeta::new_readonly(*funding_mint, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new(vault, false),
            AccountMeta::new(developer_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_repay_loan_ix(
    developer: &Pubkey,
    funding_mint: &Pubkey,
    amount: u64,
) -> Instruction {
    let (config, _) = derive_engine_pda();
    let (credit_line, _) = derive_credit_line_pda(developer);
    let (vault_authority, _) = derive_vault_authority_pda();
    let vault = vault_address(funding_mint);
    let developer_token_account = get_associated_token_address(developer, funding_mint);

    let mut data = anchor_discriminator("repay_loan").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: ENGINE_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*developer, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(credit_line, false),
            AccountMeta::new_readonly(*funding_mint, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new(vault, false),
            AccountMeta::new(developer_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

pub fn build_update_credit_parameters_ix(
    admin: &Pubkey,
    base_amount: u64,
    per_point_multiplier: u64,
    max_amount: u64,
) -> Instruction {
    let (config, _) = derive_engine_pda();

    let mut data = anchor_discriminator("update_credit_parameters").to_vec();
    data.extend_from_slice(&base_amount.to_le_bytes());
    data.extend_from_slice(&per_point_multiplier.to_le_bytes());
    data.extend_from_slice(&max_amount.to_le_bytes());

    Instruction {
        program_id: ENGINE_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(config, false),
        ],
        data,
    }
}

pub fn build_set_factor_weight_ix(admin: &Pubkey, name: &str, weight: u16) -> Instruction {
    let (config, _) = derive_engine_pda();
    let (score_weights, _) = derive_score_weights_pda();

    let mut data = anchor_discriminator("set_factor_weight").to_vec();
    data.extend_from_slice(&(name.len() as u32).to_le_bytes());
    data.extend_from_slice(name.as_bytes());
    data.extend_from_slice(&weight.to_le_bytes());

    Instruction {
        program_id: ENGINE_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(score_weights, false),
        ],
        data,
    }
}

pub fn build_link_identity_ix(developer: &Pubkey, handle: &str, timestamp: i64) -> Instruction {
    let (identity_link, _) = derive_identity_pda(developer);
    let (credit_line, _) = derive_credit_line_pda(developer);

    let mut data = anchor_discriminator("link_identity").to_vec();
    data.extend_from_slice(&(handle.len() as u32).to_le_bytes());
    data.extend_from_slice(handle.as_bytes());
    data.extend_from_slice(&timestamp.to_le_bytes());

    Instruction {
        program_id: ENGINE_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*developer, true),
            AccountMeta::new(identity_link, false),
            AccountMeta::new(credit_line, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_withdraw_funds_ix(
    treasury: &Pubkey,
    funding_mint: &Pubkey,
    amount: u64,
) -> Instruction {
    let (config, _) = derive_engine_pda();
    let (vault_authority, _) = derive_vault_authority_pda();
    let vault = vault_address(funding_mint);
    let treasury_token_account = get_associated_token_address(treasury, funding_mint);

    let mut data = anchor_discriminator("withdraw_funds").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: ENGINE_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*treasury, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new_readonly(*funding_mint, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new(vault, false),
            AccountMeta::new(treasury_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

pub fn build_update_registry_ix(admin: &Pubkey, new_registry: &Pubkey) -> Instruction {
    let (config, _) = derive_engine_pda();

    let mut data = anchor_discriminator("update_registry").to_vec();
    data.extend_from_slice(new_registry.as_ref());

    Instruction {
        program_id: ENGINE_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(config, false),
        ],
        data,
    }
}

pub fn build_update_funding_token_ix(admin: &Pubkey, new_mint: &Pubkey) -> Instruction {
    let (config, _) = derive_engine_pda();

    let mut data = anchor_discriminator("update_funding_token").to_vec();
    data.extend_from_slice(new_mint.as_ref());

    Instruction {
        program_id: ENGINE_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(config, false),
        ],
        data,
    }
}

pub fn build_engine_toggle_pause_ix(admin: &Pubkey) -> Instruction {
    let (config, _) = derive_engine_pda();

    Instruction {
        program_id: ENGINE_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(config, false),
        ],
        data: anchor_discriminator("toggle_pause").to_vec(),
    }
}
