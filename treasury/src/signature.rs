multiversx_sc::imports!();

use crate::constants::{
    ActionKind, MessageHash, DOMAIN_NAME, DOMAIN_TYPE, DOMAIN_VERSION, TYPED_DATA_PREFIX,
};

/// Typed, domain-separated hashing of authorization messages.
///
/// `hash = keccak256(0x1901 || domain_separator || keccak256(struct))`, where the struct is the
/// type hash followed by its fields. Addresses are appended raw, integers as 8 big-endian bytes,
/// and token identifiers and amounts as their keccak256 hash, so every field has a fixed width.
#[multiversx_sc::module]
pub trait SignatureModule {
    #[view(getWithdrawMessageHash)]
    fn withdraw_message_hash(
        &self,
        token: &TokenIdentifier,
        amount: &BigUint,
        user: &ManagedAddress,
        user_id: u64,
        sender: &ManagedAddress,
        nonce: u64,
        deadline: u64,
    ) -> MessageHash<Self::Api> {
        let mut encoded = self.struct_header(ActionKind::Withdraw);

        self.append_hashed(&mut encoded, token.as_managed_buffer());
        self.append_message_tail(&mut encoded, amount, user, user_id, sender, nonce, deadline);

        self.typed_message_hash(&encoded)
    }

    #[view(getSellMessageHash)]
    fn sell_message_hash(
        &self,
        token: &TokenIdentifier,
        amount: &BigUint,
        user: &ManagedAddress,
        user_id: u64,
        sender: &ManagedAddress,
        nonce: u64,
        deadline: u64,
    ) -> MessageHash<Self::Api> {
        let mut encoded = self.struct_header(ActionKind::Sell);

        self.append_hashed(&mut encoded, token.as_managed_buffer());
        self.append_message_tail(&mut encoded, amount, user, user_id, sender, nonce, deadline);

        self.typed_message_hash(&encoded)
    }

    #[view(getSwapMessageHash)]
    fn swap_message_hash(
        &self,
        token_in: &TokenIdentifier,
        token_out: &TokenIdentifier,
        amount: &BigUint,
        user: &ManagedAddress,
        user_id: u64,
        sender: &ManagedAddress,
        nonce: u64,
        deadline: u64,
    ) -> MessageHash<Self::Api> {
        let mut encoded = self.struct_header(ActionKind::Swap);

        self.append_hashed(&mut encoded, token_in.as_managed_buffer());
        self.append_hashed(&mut encoded, token_out.as_managed_buffer());
        self.append_message_tail(&mut encoded, amount, user, user_id, sender, nonce, deadline);

        self.typed_message_hash(&encoded)
    }

    #[view(getDomainSeparator)]
    fn domain_separator(&self) -> MessageHash<Self::Api> {
        let mut encoded = ManagedBuffer::new();

        self.append_hashed(&mut encoded, &ManagedBuffer::new_from_bytes(DOMAIN_TYPE));
        self.append_hashed(&mut encoded, &ManagedBuffer::new_from_bytes(DOMAIN_NAME));
        self.append_hashed(&mut encoded, &ManagedBuffer::new_from_bytes(DOMAIN_VERSION));
        self.append_hashed(&mut encoded, &self.chain_id().get());
        encoded.append(self.blockchain().get_sc_address().as_managed_buffer());

        self.crypto().keccak256(encoded)
    }

    fn typed_message_hash(&self, encoded_struct: &ManagedBuffer) -> MessageHash<Self::Api> {
        let mut encoded = ManagedBuffer::new_from_bytes(TYPED_DATA_PREFIX);

        encoded.append(self.domain_separator().as_managed_buffer());
        encoded.append(self.crypto().keccak256(encoded_struct).as_managed_buffer());

        self.crypto().keccak256(encoded)
    }

    fn struct_header(&self, kind: ActionKind) -> ManagedBuffer {
        let mut encoded = ManagedBuffer::new();

        self.append_hashed(&mut encoded, &ManagedBuffer::new_from_bytes(kind.type_string()));

        encoded
    }

    fn append_message_tail(
        &self,
        encoded: &mut ManagedBuffer,
        amount: &BigUint,
        user: &ManagedAddress,
        user_id: u64,
        sender: &ManagedAddress,
        nonce: u64,
        deadline: u64,
    ) {
        self.append_hashed(encoded, &amount.to_bytes_be_buffer());
        encoded.append(user.as_managed_buffer());
        encoded.append_bytes(&user_id.to_be_bytes());
        encoded.append(sender.as_managed_buffer());
        encoded.append_bytes(&nonce.to_be_bytes());
        encoded.append_bytes(&deadline.to_be_bytes());
    }

    fn append_hashed(&self, encoded: &mut ManagedBuffer, data: &ManagedBuffer) {
        encoded.append(self.crypto().keccak256(data).as_managed_buffer());
    }

    #[view(getChainId)]
    #[storage_mapper("chain_id")]
    fn chain_id(&self) -> SingleValueMapper<ManagedBuffer>;
}
