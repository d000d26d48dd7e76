multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[derive(TypeAbi, TopEncode)]
pub struct SwapEventData<M: ManagedTypeApi> {
    pub amount_in: BigUint<M>,
    pub amount_out: BigUint<M>,
}

#[derive(TypeAbi, TopEncode)]
pub struct RescueEventData<M: ManagedTypeApi> {
    pub token: EgldOrEsdtTokenIdentifier<M>,
    pub amount: BigUint<M>,
}

#[multiversx_sc::module]
pub trait Events {
    fn emit_swap_tokens_event(
        &self,
        token_in: &TokenIdentifier,
        token_out: &TokenIdentifier,
        user: &ManagedAddress,
        user_id: u64,
        amount_in: &BigUint,
        amount_out: &BigUint,
    ) {
        self.swap_tokens_event(
            token_in,
            token_out,
            user,
            user_id,
            SwapEventData {
                amount_in: amount_in.clone(),
                amount_out: amount_out.clone(),
            },
        );
    }

    #[event("withdraw_event")]
    fn withdraw_event(
        &self,
        #[indexed] token: &TokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] user_id: u64,
        amount: &BigUint,
    );

    #[event("sell_tokens_event")]
    fn sell_tokens_event(
        &self,
        #[indexed] token: &TokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] user_id: u64,
        data: SwapEventData<Self::Api>,
    );

    #[event("swap_tokens_event")]
    fn swap_tokens_event(
        &self,
        #[indexed] token_in: &TokenIdentifier,
        #[indexed] token_out: &TokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] user_id: u64,
        data: SwapEventData<Self::Api>,
    );

    #[event("purchase_tokens_event")]
    fn purchase_tokens_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] user_id: u64,
        data: SwapEventData<Self::Api>,
    );

    #[event("authorizer_updated_event")]
    fn authorizer_updated_event(
        &self,
        #[indexed] old_authorizer: &ManagedAddress,
        #[indexed] new_authorizer: &ManagedAddress,
    );

    #[event("rescue_event")]
    fn rescue_event(&self, #[indexed] recipient: &ManagedAddress, data: RescueEventData<Self::Api>);
}
