#![no_std]

multiversx_sc::imports!();

pub mod router_proxy {
    multiversx_sc::imports!();

    #[multiversx_sc::proxy]
    pub trait RouterProxy {
        #[view(getAmountsOut)]
        fn get_amounts_out(
            &self,
            amount_in: &BigUint,
            path: &ManagedVec<TokenIdentifier>,
        ) -> ManagedVec<BigUint>;

        #[payable("*")]
        #[endpoint(swapExactIn)]
        fn swap_exact_in(
            &self,
            token_out: &TokenIdentifier,
            amount_out_min: &BigUint,
            to: &ManagedAddress,
        ) -> BigUint;
    }
}

/// Thin wrapper over the external router. Limits and balances are checked by the caller.
#[multiversx_sc::module]
pub trait SwapAdapter {
    fn init_router(&self, router: ManagedAddress) {
        require!(
            !router.is_zero() && self.blockchain().is_smart_contract(&router),
            "Not contract"
        );

        self.router().set_if_empty(router);
    }

    fn quote_swap(
        &self,
        token_in: &TokenIdentifier,
        token_out: &TokenIdentifier,
        amount_in: &BigUint,
    ) -> BigUint {
        let mut path = ManagedVec::new();
        path.push(token_in.clone());
        path.push(token_out.clone());

        let amounts: ManagedVec<BigUint> = self
            .router_proxy(self.router().get())
            .get_amounts_out(amount_in, path.clone())
            .execute_on_dest_context();

        require!(amounts.len() == path.len(), "Invalid quote");

        amounts.get(amounts.len() - 1).clone_value()
    }

    fn swap_exact_in(
        &self,
        token_in: &TokenIdentifier,
        token_out: &TokenIdentifier,
        amount_in: &BigUint,
        amount_out_min: &BigUint,
        recipient: &ManagedAddress,
    ) -> BigUint {
        require!(token_in != token_out, "Same token");

        let own_address = self.blockchain().get_sc_address();
        let out_token = EgldOrEsdtTokenIdentifier::esdt(token_out.clone());
        let balance_before = self.blockchain().get_sc_balance(&out_token, 0);

        let reported_amount_out: BigUint = self
            .router_proxy(self.router().get())
            .swap_exact_in(token_out, amount_out_min, recipient)
            .with_esdt_transfer(EsdtTokenPayment::new(token_in.clone(), 0, amount_in.clone()))
            .execute_on_dest_context();

        // Output kept in custody is measured, not taken from the router's word
        let amount_out = if recipient == &own_address {
            self.blockchain().get_sc_balance(&out_token, 0) - balance_before
        } else {
            reported_amount_out
        };

        require!(&amount_out >= amount_out_min, "Insufficient output amount");

        amount_out
    }

    /// Swaps at the router's current quote, which doubles as the minimum output.
    fn swap_at_quote(
        &self,
        token_in: &TokenIdentifier,
        token_out: &TokenIdentifier,
        amount_in: &BigUint,
        recipient: &ManagedAddress,
    ) -> BigUint {
        let amount_out_min = self.quote_swap(token_in, token_out, amount_in);

        self.swap_exact_in(token_in, token_out, amount_in, &amount_out_min, recipient)
    }

    #[view(getRouter)]
    #[storage_mapper("router")]
    fn router(&self) -> SingleValueMapper<ManagedAddress>;

    #[proxy]
    fn router_proxy(&self, sc_address: ManagedAddress) -> router_proxy::Proxy<Self::Api>;
}
