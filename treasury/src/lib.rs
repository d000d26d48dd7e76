#![no_std]

multiversx_sc::imports!();

pub mod constants;
pub mod events;
pub mod signature;

use crate::constants::{ActionKind, Authorization, Signature};

/// Custody controlled by a single authorizer.
///
/// The authorizer either moves funds directly or signs a message off-chain that the named
/// sender redeems through one of the `*BySign` endpoints. Every signed message carries the
/// current replay counter of its (kind, user) pair and is therefore redeemable exactly once,
/// in issue order.
#[multiversx_sc::contract]
pub trait Treasury:
    events::Events
    + signature::SignatureModule
    + allowed_assets::AllowedAssets
    + custody::Custody
    + swap_adapter::SwapAdapter
{
    #[init]
    fn init(
        &self,
        router: ManagedAddress,
        project_token: TokenIdentifier,
        stable_token: TokenIdentifier,
        authorizer: ManagedAddress,
        chain_id: ManagedBuffer,
    ) {
        require!(!authorizer.is_zero(), "Zero address");
        require!(!chain_id.is_empty(), "Invalid chain id");

        self.init_router(router);
        self.init_custody(project_token, stable_token);

        self.authorizer().set(authorizer);
        self.chain_id().set(chain_id);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Signed functions

    #[endpoint(withdrawBySign)]
    fn withdraw_by_sign(
        &self,
        token: TokenIdentifier,
        amount: BigUint,
        user: ManagedAddress,
        user_id: u64,
        deadline: u64,
        nonce: u64,
        signature: Signature<Self::Api>,
    ) {
        let message_hash = self.withdraw_message_hash(
            &token,
            &amount,
            &user,
            user_id,
            &self.blockchain().get_caller(),
            nonce,
            deadline,
        );

        self.withdraw_raw(
            Authorization::Signed {
                nonce,
                deadline,
                message_hash,
                signature,
            },
            token,
            amount,
            user,
            user_id,
        );
    }

    #[endpoint(sellBySign)]
    fn sell_by_sign(
        &self,
        token: TokenIdentifier,
        amount: BigUint,
        user: ManagedAddress,
        user_id: u64,
        deadline: u64,
        nonce: u64,
        signature: Signature<Self::Api>,
    ) -> BigUint {
        let message_hash = self.sell_message_hash(
            &token,
            &amount,
            &user,
            user_id,
            &self.blockchain().get_caller(),
            nonce,
            deadline,
        );

        self.sell_raw(
            Authorization::Signed {
                nonce,
                deadline,
                message_hash,
                signature,
            },
            token,
            amount,
            user,
            user_id,
        )
    }

    #[endpoint(swapBySign)]
    fn swap_by_sign(
        &self,
        token_in: TokenIdentifier,
        token_out: TokenIdentifier,
        amount: BigUint,
        user: ManagedAddress,
        user_id: u64,
        deadline: u64,
        nonce: u64,
        signature: Signature<Self::Api>,
    ) -> BigUint {
        let message_hash = self.swap_message_hash(
            &token_in,
            &token_out,
            &amount,
            &user,
            user_id,
            &self.blockchain().get_caller(),
            nonce,
            deadline,
        );

        self.swap_raw(
            Authorization::Signed {
                nonce,
                deadline,
                message_hash,
                signature,
            },
            token_in,
            token_out,
            amount,
            user,
            user_id,
        )
    }

    /// Authorizer functions

    #[endpoint]
    fn withdraw(&self, token: TokenIdentifier, amount: BigUint, user: ManagedAddress, user_id: u64) {
        self.withdraw_raw(Authorization::Authorizer, token, amount, user, user_id);
    }

    #[endpoint(sellTokens)]
    fn sell_tokens(
        &self,
        token: TokenIdentifier,
        amount: BigUint,
        user: ManagedAddress,
        user_id: u64,
    ) -> BigUint {
        self.sell_raw(Authorization::Authorizer, token, amount, user, user_id)
    }

    #[endpoint(swapTokens)]
    fn swap_tokens(
        &self,
        token_in: TokenIdentifier,
        token_out: TokenIdentifier,
        amount: BigUint,
        user: ManagedAddress,
        user_id: u64,
    ) -> BigUint {
        self.swap_raw(
            Authorization::Authorizer,
            token_in,
            token_out,
            amount,
            user,
            user_id,
        )
    }

    #[endpoint(purchaseTokens)]
    fn purchase_tokens(&self, amount: BigUint, user: ManagedAddress, user_id: u64) -> BigUint {
        let stable_token = self.stable_token().get();
        let project_token = self.project_token().get();

        self.authorize(
            Authorization::Authorizer,
            ActionKind::Swap,
            &user,
            &EgldOrEsdtTokenIdentifier::esdt(stable_token.clone()),
            &amount,
        );

        let amount_out = self.swap_at_quote(
            &stable_token,
            &project_token,
            &amount,
            &self.blockchain().get_sc_address(),
        );

        self.purchase_tokens_event(
            &user,
            user_id,
            events::SwapEventData {
                amount_in: amount,
                amount_out: amount_out.clone(),
            },
        );

        amount_out
    }

    /// Owner functions

    #[only_owner]
    #[endpoint(updateAuthorizer)]
    fn update_authorizer(&self, authorizer: ManagedAddress) {
        require!(!authorizer.is_zero(), "Zero address");

        let old_authorizer = self.authorizer().get();

        require!(old_authorizer != authorizer, "Same authorizer");

        self.authorizer_updated_event(&old_authorizer, &authorizer);

        self.authorizer().set(authorizer);
    }

    #[only_owner]
    #[endpoint]
    fn rescue(&self, recipient: ManagedAddress, token: TokenIdentifier, amount: BigUint) {
        self.rescue_raw(recipient, EgldOrEsdtTokenIdentifier::esdt(token), amount);
    }

    #[only_owner]
    #[endpoint(rescueNative)]
    fn rescue_native(&self, recipient: ManagedAddress, amount: BigUint) {
        self.rescue_raw(recipient, EgldOrEsdtTokenIdentifier::egld(), amount);
    }

    /// Internal functions

    fn withdraw_raw(
        &self,
        authorization: Authorization<Self::Api>,
        token: TokenIdentifier,
        amount: BigUint,
        user: ManagedAddress,
        user_id: u64,
    ) {
        let custody_token = EgldOrEsdtTokenIdentifier::esdt(token.clone());

        self.authorize(
            authorization,
            ActionKind::Withdraw,
            &user,
            &custody_token,
            &amount,
        );

        self.transfer_out(&user, &custody_token, &amount);

        self.withdraw_event(&token, &user, user_id, &amount);
    }

    fn sell_raw(
        &self,
        authorization: Authorization<Self::Api>,
        token: TokenIdentifier,
        amount: BigUint,
        user: ManagedAddress,
        user_id: u64,
    ) -> BigUint {
        let stable_token = self.stable_token().get();

        self.authorize(
            authorization,
            ActionKind::Sell,
            &user,
            &EgldOrEsdtTokenIdentifier::esdt(token.clone()),
            &amount,
        );

        let amount_out = self.swap_at_quote(
            &token,
            &stable_token,
            &amount,
            &self.blockchain().get_sc_address(),
        );

        self.sell_tokens_event(
            &token,
            &user,
            user_id,
            events::SwapEventData {
                amount_in: amount,
                amount_out: amount_out.clone(),
            },
        );

        amount_out
    }

    fn swap_raw(
        &self,
        authorization: Authorization<Self::Api>,
        token_in: TokenIdentifier,
        token_out: TokenIdentifier,
        amount: BigUint,
        user: ManagedAddress,
        user_id: u64,
    ) -> BigUint {
        self.authorize(
            authorization,
            ActionKind::Swap,
            &user,
            &EgldOrEsdtTokenIdentifier::esdt(token_in.clone()),
            &amount,
        );

        let amount_out = self.swap_at_quote(
            &token_in,
            &token_out,
            &amount,
            &self.blockchain().get_sc_address(),
        );

        self.emit_swap_tokens_event(&token_in, &token_out, &user, user_id, &amount, &amount_out);

        amount_out
    }

    /// Checks shared by the signed and the authorizer paths, in the order failures are reported.
    /// A signed call consumes its replay counter only once every check has passed.
    fn authorize(
        &self,
        authorization: Authorization<Self::Api>,
        kind: ActionKind,
        user: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        if let Authorization::Authorizer = authorization {
            require!(
                self.blockchain().get_caller() == self.authorizer().get(),
                "Not authorized"
            );
        }

        require!(*amount > 0, "Zero amount");
        require!(!user.is_zero(), "Zero address");

        let consumed_nonce = match authorization {
            Authorization::Authorizer => None,
            Authorization::Signed {
                nonce,
                deadline,
                message_hash,
                signature,
            } => {
                require!(
                    self.blockchain().get_block_timestamp() <= deadline,
                    "Expired"
                );
                require!(self.nonces(kind, user).get() == nonce, "Invalid nonce");

                self.crypto().verify_ed25519(
                    self.authorizer().get().as_managed_buffer(),
                    message_hash.as_managed_buffer(),
                    signature.as_managed_buffer(),
                );

                Some(nonce)
            }
        };

        self.require_within_limit(token, amount, kind.limit_kind());
        self.require_custody_balance(token, amount);

        if let Some(nonce) = consumed_nonce {
            self.nonces(kind, user).set(nonce + 1);
        }
    }

    fn rescue_raw(
        &self,
        recipient: ManagedAddress,
        token: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) {
        require!(amount > 0, "Zero amount");
        require!(!recipient.is_zero(), "Zero address");

        self.require_custody_balance(&token, &amount);

        self.transfer_out(&recipient, &token, &amount);

        self.rescue_event(&recipient, events::RescueEventData { token, amount });
    }

    #[view(getAuthorizer)]
    #[storage_mapper("authorizer")]
    fn authorizer(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getNonce)]
    #[storage_mapper("nonces")]
    fn nonces(&self, kind: ActionKind, user: &ManagedAddress) -> SingleValueMapper<u64>;
}
