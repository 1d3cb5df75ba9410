use anchor_lang::prelude::*;

#[error_code]
pub enum MarketError {
    // Validation
    #[msg("Must provide collateral for initial liquidity")]
    MustProvideETHForInitialLiquidity,
    #[msg("Initial probability must be between 1 and 99")]
    InvalidProbability,
    #[msg("Percentage to lock must be between 1 and 99 and fit the supply")]
    InvalidPercentageToLock,
    #[msg("Initial token value must be greater than 0")]
    InvalidInitialTokenValue,
    #[msg("Question exceeds maximum length")]
    QuestionTooLong,
    #[msg("Outcome label exceeds maximum length")]
    LabelTooLong,
    #[msg("Amount must be greater than 0")]
    AmountMustBeGreaterThanZero,
    #[msg("Invalid option")]
    InvalidOption,

    // Authorization
    #[msg("Only the oracle can report")]
    OnlyOracleCanReport,
    #[msg("Only the owner can call this")]
    OnlyOwner,
    #[msg("Liquidity provider can't buy tokens")]
    LiquidityProviderCantBuyTokens,
    #[msg("Liquidity provider can't sell tokens")]
    LiquidityProviderCantSellTokens,

    // State conflict
    #[msg("Prediction already reported")]
    PredictionAlreadyResolved,
    #[msg("Prediction not reported yet")]
    PredictionNotResolved,
    #[msg("Market already settled by the liquidity provider")]
    MarketAlreadySettled,

    // Resource insufficiency
    #[msg("Insufficient liquidity")]
    InsufficientLiquidity,
    #[msg("Insufficient token reserve")]
    InsufficientTokenReserve,
    #[msg("Sell amount exceeds circulating token supply")]
    InsufficientTokenBalance,
    #[msg("Insufficient token balance")]
    InsufficientBalance,
    #[msg("Insufficient allowance")]
    InsufficientAllowance,
    #[msg("Must send exact collateral amount")]
    MustSendExactETHAmount,
    #[msg("No winning tokens to redeem")]
    NoTokensToRedeem,
    #[msg("Insufficient winning tokens")]
    InsufficientWinningTokens,
    #[msg("Probability is undefined while no tokens are sold")]
    ProbabilityUndefined,

    // Transfer failure
    #[msg("Collateral transfer failed")]
    ETHTransferFailed,

    #[msg("Arithmetic overflow")]
    MathOverflow,
}
