#![no_std]

multiversx_sc::imports!();

/// Balances held by the contract and the project/stable token pair it is built around.
#[multiversx_sc::module]
pub trait Custody {
    fn init_custody(&self, project_token: TokenIdentifier, stable_token: TokenIdentifier) {
        require!(
            project_token.is_valid_esdt_identifier()
                && stable_token.is_valid_esdt_identifier()
                && project_token != stable_token,
            "Not contract"
        );

        self.project_token().set_if_empty(project_token);
        self.stable_token().set_if_empty(stable_token);
    }

    #[payable("*")]
    #[endpoint]
    fn replenish(&self, user_id: u64) {
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(amount > 0, "Zero amount");

        self.replenish_event(&token, &self.blockchain().get_caller(), user_id, &amount);
    }

    fn custody_balance(&self, token: &EgldOrEsdtTokenIdentifier) -> BigUint {
        self.blockchain().get_sc_balance(token, 0)
    }

    fn require_custody_balance(&self, token: &EgldOrEsdtTokenIdentifier, amount: &BigUint) {
        require!(
            &self.custody_balance(token) >= amount,
            "Not enough token balance"
        );
    }

    fn transfer_out(
        &self,
        recipient: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        self.send().direct(recipient, token, 0, amount);
    }

    #[view(projectTokenBalance)]
    fn project_token_balance(&self) -> BigUint {
        self.custody_balance(&EgldOrEsdtTokenIdentifier::esdt(self.project_token().get()))
    }

    #[view(stableTokenBalance)]
    fn stable_token_balance(&self) -> BigUint {
        self.custody_balance(&EgldOrEsdtTokenIdentifier::esdt(self.stable_token().get()))
    }

    #[view(nativeBalance)]
    fn native_balance(&self) -> BigUint {
        self.custody_balance(&EgldOrEsdtTokenIdentifier::egld())
    }

    #[event("replenish_event")]
    fn replenish_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] sender: &ManagedAddress,
        #[indexed] user_id: u64,
        amount: &BigUint,
    );

    #[view(getProjectToken)]
    #[storage_mapper("project_token")]
    fn project_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getStableToken)]
    #[storage_mapper("stable_token")]
    fn stable_token(&self) -> SingleValueMapper<TokenIdentifier>;
}
