multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use allowed_assets::LimitKind;
use multiversx_sc::api::{ED25519_SIGNATURE_BYTE_LEN, KECCAK256_RESULT_LEN};

pub const DOMAIN_NAME: &[u8] = b"Treasury";
pub const DOMAIN_VERSION: &[u8] = b"1";

pub const TYPED_DATA_PREFIX: &[u8] = b"\x19\x01";

pub const DOMAIN_TYPE: &[u8] =
    b"EIP712Domain(string name,string version,string chainId,address verifyingContract)";
pub const WITHDRAW_BY_SIGN_TYPE: &[u8] = b"WithdrawBySign(string token,uint256 amount,address user,uint64 userId,address sender,uint64 nonce,uint64 deadline)";
pub const SELL_BY_SIGN_TYPE: &[u8] = b"SellBySign(string token,uint256 amount,address user,uint64 userId,address sender,uint64 nonce,uint64 deadline)";
pub const SWAP_BY_SIGN_TYPE: &[u8] = b"SwapTokensBySign(string inputToken,string outputToken,uint256 amount,address user,uint64 userId,address sender,uint64 nonce,uint64 deadline)";

pub type MessageHash<M> = ManagedByteArray<M, KECCAK256_RESULT_LEN>;
pub type Signature<M> = ManagedByteArray<M, ED25519_SIGNATURE_BYTE_LEN>;

// Each kind keeps its own replay counter per user
#[derive(TypeAbi, TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ActionKind {
    Withdraw,
    Sell,
    Swap,
}

impl ActionKind {
    pub fn type_string(&self) -> &'static [u8] {
        match self {
            ActionKind::Withdraw => WITHDRAW_BY_SIGN_TYPE,
            ActionKind::Sell => SELL_BY_SIGN_TYPE,
            ActionKind::Swap => SWAP_BY_SIGN_TYPE,
        }
    }

    pub fn limit_kind(&self) -> LimitKind {
        match self {
            ActionKind::Withdraw => LimitKind::Withdraw,
            ActionKind::Sell | ActionKind::Swap => LimitKind::Swap,
        }
    }
}

/// How the caller of a fund movement proved it may perform it.
pub enum Authorization<M: ManagedTypeApi> {
    /// The caller is the configured authorizer itself.
    Authorizer,
    /// The caller presents a message the authorizer signed off-chain.
    Signed {
        nonce: u64,
        deadline: u64,
        message_hash: MessageHash<M>,
        signature: Signature<M>,
    },
}
