multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::constants::{TransactionAction, TransactionStatus};

#[derive(TypeAbi, TopEncode)]
pub struct TransactionResolvedEventData {
    pub status: TransactionStatus,
    pub confirmations: u32,
    pub rejections: u32,
}

#[derive(TypeAbi, TopEncode)]
pub struct SwapTokensEventData<M: ManagedTypeApi> {
    pub trx_id: u64,
    pub amount_in: BigUint<M>,
    pub amount_out: BigUint<M>,
}

#[multiversx_sc::module]
pub trait Events {
    #[event("transaction_created_event")]
    fn transaction_created_event(
        &self,
        #[indexed] trx_id: u64,
        #[indexed] proposer: &ManagedAddress,
        action: &TransactionAction<Self::Api>,
    );

    #[event("vote_event")]
    fn vote_event(
        &self,
        #[indexed] trx_id: u64,
        #[indexed] admin: &ManagedAddress,
        approve: bool,
    );

    #[event("transaction_resolved_event")]
    fn transaction_resolved_event(
        &self,
        #[indexed] trx_id: u64,
        data: TransactionResolvedEventData,
    );

    #[event("withdraw_event")]
    fn withdraw_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] trx_id: u64,
        amount: &BigUint,
    );

    #[event("swap_tokens_event")]
    fn swap_tokens_event(
        &self,
        #[indexed] token_in: &TokenIdentifier,
        #[indexed] token_out: &TokenIdentifier,
        #[indexed] recipient: &ManagedAddress,
        data: SwapTokensEventData<Self::Api>,
    );

    #[event("admin_added_event")]
    fn admin_added_event(&self, #[indexed] admin: &ManagedAddress, quorum: u32);

    #[event("admin_removed_event")]
    fn admin_removed_event(&self, #[indexed] admin: &ManagedAddress, quorum: u32);

    #[event("quorum_updated_event")]
    fn quorum_updated_event(&self, quorum: u32);
}
