#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[derive(TypeAbi, TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AllowedAsset<M: ManagedTypeApi> {
    pub allowed: bool,
    // Zero means no ceiling
    pub swap_limit: BigUint<M>,
    pub withdraw_limit: BigUint<M>,
}

#[derive(TypeAbi, TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq)]
pub enum LimitKind {
    Swap,
    Withdraw,
}

/// Per-asset movement policy shared by both treasury contracts.
///
/// Every outbound transfer or swap must pass `require_within_limit` first.
#[multiversx_sc::module]
pub trait AllowedAssets {
    #[only_owner]
    #[endpoint(updateAllowedAsset)]
    fn update_allowed_asset(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        allowed: bool,
        swap_limit: BigUint,
        withdraw_limit: BigUint,
    ) {
        require!(token.is_valid(), "Not contract");

        let asset = AllowedAsset {
            allowed,
            swap_limit,
            withdraw_limit,
        };

        self.allowed_asset_updated_event(&token, &asset);

        self.allowed_assets(&token).set(asset);
    }

    fn require_within_limit(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        limit_kind: LimitKind,
    ) {
        let allowed_asset_mapper = self.allowed_assets(token);

        require!(!allowed_asset_mapper.is_empty(), "Token not allowed");

        let asset = allowed_asset_mapper.get();

        require!(asset.allowed, "Token not allowed");

        let limit = match limit_kind {
            LimitKind::Swap => asset.swap_limit,
            LimitKind::Withdraw => asset.withdraw_limit,
        };

        require!(limit == 0 || amount <= &limit, "Limit exceeded");
    }

    #[view(isAllowed)]
    fn is_allowed(&self, token: &EgldOrEsdtTokenIdentifier) -> bool {
        let allowed_asset_mapper = self.allowed_assets(token);

        !allowed_asset_mapper.is_empty() && allowed_asset_mapper.get().allowed
    }

    #[view(swapLimit)]
    fn swap_limit(&self, token: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let allowed_asset_mapper = self.allowed_assets(token);

        if allowed_asset_mapper.is_empty() {
            return BigUint::zero();
        }

        allowed_asset_mapper.get().swap_limit
    }

    #[view(withdrawLimit)]
    fn withdraw_limit(&self, token: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let allowed_asset_mapper = self.allowed_assets(token);

        if allowed_asset_mapper.is_empty() {
            return BigUint::zero();
        }

        allowed_asset_mapper.get().withdraw_limit
    }

    #[event("allowed_asset_updated_event")]
    fn allowed_asset_updated_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        data: &AllowedAsset<Self::Api>,
    );

    #[view(getAllowedAsset)]
    #[storage_mapper("allowed_assets")]
    fn allowed_assets(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<AllowedAsset<Self::Api>>;
}
