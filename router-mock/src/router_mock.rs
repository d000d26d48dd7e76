#![no_std]

multiversx_sc::imports!();

// Stands in for the exchange router in tests. Every hop converts at the same fixed rate.
#[multiversx_sc::contract]
pub trait RouterMock {
    #[init]
    fn init(&self, rate_numerator: BigUint, rate_denominator: BigUint) {
        require!(
            rate_numerator > 0 && rate_denominator > 0,
            "Invalid rate"
        );

        self.rate_numerator().set(rate_numerator);
        self.rate_denominator().set(rate_denominator);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // Liquidity for the output side of swaps
    #[payable("*")]
    #[endpoint]
    fn deposit(&self) {}

    #[view(getAmountsOut)]
    fn get_amounts_out(
        &self,
        amount_in: BigUint,
        path: ManagedVec<TokenIdentifier>,
    ) -> ManagedVec<BigUint> {
        require!(path.len() >= 2, "Invalid path");

        let mut amounts = ManagedVec::new();
        let mut amount = amount_in;

        amounts.push(amount.clone());
        for _ in 1..path.len() {
            amount = self.amount_out(&amount);
            amounts.push(amount.clone());
        }

        amounts
    }

    #[payable("*")]
    #[endpoint(swapExactIn)]
    fn swap_exact_in(
        &self,
        token_out: TokenIdentifier,
        amount_out_min: BigUint,
        to: ManagedAddress,
    ) -> BigUint {
        let (token_in, amount_in) = self.call_value().single_fungible_esdt();

        require!(token_in != token_out, "Same token");

        let amount_out = self.amount_out(&amount_in);

        require!(amount_out >= amount_out_min, "Insufficient output amount");

        self.send().direct_esdt(&to, &token_out, 0, &amount_out);

        amount_out
    }

    fn amount_out(&self, amount_in: &BigUint) -> BigUint {
        amount_in * &self.rate_numerator().get() / self.rate_denominator().get()
    }

    #[view(getRateNumerator)]
    #[storage_mapper("rate_numerator")]
    fn rate_numerator(&self) -> SingleValueMapper<BigUint>;

    #[view(getRateDenominator)]
    #[storage_mapper("rate_denominator")]
    fn rate_denominator(&self) -> SingleValueMapper<BigUint>;
}
