use anchor_lang::{
    prelude::*,
    solana_program::{program::invoke, system_instruction},
};
use anchor_spl::token_interface::{
    token_metadata_initialize, TokenInterface, TokenMetadataInitialize,
};
use spl_token_2022::{
    extension::{metadata_pointer, ExtensionType},
    instruction::{
        initialize_mint2, initialize_non_transferable_mint, initialize_permanent_delegate,
    },
    pod::PodMint,
};

use crate::{
    constants::{
        MINT_AUTHORITY_SEED, NAME_AND_URI_MAX_LENGTH, STABLE_TOKEN_DECIMALS, SYMBOL_MAX_LENGTH,
    },
    errors::StableEscrowError,
    events::StableMintCreated,
    pda::{self, SigningCapability},
    utils::fund_rent_shortfall,
};

/// Extensions carried by the stable mint.
/// NonTransferable keeps every token in the depositor's wallet, PermanentDelegate lets the
/// mint authority PDA burn from it.
const STABLE_MINT_EXTENSIONS: [ExtensionType; 3] = [
    ExtensionType::NonTransferable,
    ExtensionType::PermanentDelegate,
    ExtensionType::MetadataPointer,
];

/// Checks the on-mint metadata fits the limits of the stable mint
pub fn validate_metadata(name: &str, symbol: &str, uri: &str) -> Result<()> {
    require!(
        name.len() <= NAME_AND_URI_MAX_LENGTH
            && uri.len() <= NAME_AND_URI_MAX_LENGTH
            && symbol.len() <= SYMBOL_MAX_LENGTH,
        StableEscrowError::MetadataFieldTooLong
    );
    Ok(())
}

/// Deploys the Token-2022 stable mint controlled by the mint authority PDA
#[derive(Accounts)]
pub struct InitializeStableMint<'info> {
    /// The payer account funding the mint account creation
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The new mint account to be initialized
    #[account(mut)]
    pub stable_mint: Signer<'info>,

    /// The mint authority PDA that will control the mint and act as its permanent delegate
    /// # PDA Seeds
    /// - MINT_AUTHORITY_SEED
    ///
    /// CHECK: Re-derived from `authority_bump` in the instruction handler
    pub mint_authority: UncheckedAccount<'info>,

    /// The system program
    pub system_program: Program<'info, System>,

    /// The token program (Token-2022)
    #[account(address = spl_token_2022::ID)]
    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> InitializeStableMint<'info> {
    /// Allocates the mint account, funds it and hands it to the token program
    fn create_mint_account(&self, space: usize, rent: &Rent) -> Result<()> {
        let mint = self.stable_mint.to_account_info();
        let token_program = self.token_program.key();

        invoke(
            &system_instruction::allocate(mint.key, space as u64),
            &[mint.clone()],
        )?;
        fund_rent_shortfall(&self.payer, &mint, &self.system_program, rent, space)?;
        invoke(
            &system_instruction::assign(mint.key, &token_program),
            &[mint, self.system_program.to_account_info()],
        )?;

        Ok(())
    }

    /// Writes the extension headers. Token-2022 requires them before `InitializeMint2`.
    fn initialize_extensions(&self) -> Result<()> {
        let token_program = self.token_program.key();
        let mint = self.stable_mint.key();
        let authority = self.mint_authority.key();

        let instructions = [
            initialize_non_transferable_mint(&token_program, &mint)?,
            initialize_permanent_delegate(&token_program, &mint, &authority)?,
            metadata_pointer::instruction::initialize(
                &token_program,
                &mint,
                Some(authority),
                Some(mint),
            )?,
        ];

        for ix in instructions.iter() {
            invoke(ix, &[self.stable_mint.to_account_info()])?;
        }

        Ok(())
    }

    fn initialize_metadata(
        &self,
        authority: &SigningCapability,
        name: String,
        symbol: String,
        uri: String,
    ) -> Result<()> {
        let seeds = authority.signer_seeds();

        token_metadata_initialize(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TokenMetadataInitialize {
                    program_id: self.token_program.to_account_info(),
                    mint: self.stable_mint.to_account_info(),
                    metadata: self.stable_mint.to_account_info(),
                    mint_authority: self.mint_authority.to_account_info(),
                    update_authority: self.mint_authority.to_account_info(),
                },
                &[&seeds[..]],
            ),
            name,
            symbol,
            uri,
        )
    }

    /// Creates the non-transferable stable mint, with the mint authority PDA as both
    /// mint authority and permanent delegate, and no freeze authority.
    /// # Arguments
    /// * `authority_bump` - The bump of the mint authority PDA
    /// * `name` - The name of the token
    /// * `symbol` - The symbol of the token
    /// * `uri` - The metadata URI for the token
    /// # Returns
    /// * `Result<()>` - Ok if the mint is successfully initialized, Err otherwise
    pub fn initialize_stable_mint(
        &mut self,
        authority_bump: u8,
        name: String,
        symbol: String,
        uri: String,
    ) -> Result<()> {
        let authority = pda::derive_and_sign(
            MINT_AUTHORITY_SEED,
            authority_bump,
            &crate::ID,
            self.mint_authority.key,
        )?;
        validate_metadata(&name, &symbol, &uri)?;

        let space = ExtensionType::try_calculate_account_len::<PodMint>(&STABLE_MINT_EXTENSIONS)?;
        let rent = Rent::get()?;

        self.create_mint_account(space, &rent)?;
        self.initialize_extensions()?;

        invoke(
            &initialize_mint2(
                &self.token_program.key(),
                &self.stable_mint.key(),
                &self.mint_authority.key(),
                None,
                STABLE_TOKEN_DECIMALS,
            )?,
            &[self.stable_mint.to_account_info()],
        )?;

        self.initialize_metadata(&authority, name, symbol, uri)?;

        // The metadata TLV entry grew the account past the initial reserve
        let size = self.stable_mint.data_len();
        fund_rent_shortfall(
            &self.payer,
            &self.stable_mint,
            &self.system_program,
            &rent,
            size,
        )?;

        msg!("Stable mint {} created", self.stable_mint.key());

        emit!(StableMintCreated {
            stable_mint: self.stable_mint.key(),
        });

        Ok(())
    }
}
