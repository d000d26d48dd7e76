multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[derive(TypeAbi, TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum TransactionStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(TypeAbi, TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub enum TransactionAction<M: ManagedTypeApi> {
    Withdraw {
        token: EgldOrEsdtTokenIdentifier<M>,
        amount: BigUint<M>,
        recipient: ManagedAddress<M>,
    },
    SwapTokens {
        token_in: TokenIdentifier<M>,
        token_out: TokenIdentifier<M>,
        amount: BigUint<M>,
        recipient: ManagedAddress<M>,
    },
}

#[derive(TypeAbi, TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Transaction<M: ManagedTypeApi> {
    pub action: TransactionAction<M>,
    pub proposer: ManagedAddress<M>,
    pub status: TransactionStatus,
    pub confirmations: u32,
    pub rejections: u32,
}

impl<M: ManagedTypeApi> Transaction<M> {
    pub fn ballots(&self) -> u32 {
        self.confirmations + self.rejections
    }

    pub fn is_pending(&self) -> bool {
        self.status == TransactionStatus::Pending
    }
}
