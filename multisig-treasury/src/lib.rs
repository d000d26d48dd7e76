#![no_std]

multiversx_sc::imports!();

pub mod constants;
pub mod events;

use allowed_assets::LimitKind;

use crate::constants::{Transaction, TransactionAction, TransactionStatus};
use crate::events::{SwapTokensEventData, TransactionResolvedEventData};

/// Custody controlled by an administrator committee.
///
/// Any administrator may propose a withdrawal or swap and is counted as its first "yes".
/// Once `quorum` ballots are cast the transaction is finalized: approved and executed in the
/// same call only if every ballot was "yes", rejected otherwise. A "no" cast before the quorum
/// is reached does not end the vote early. The asset policy is consulted again on execution.
#[multiversx_sc::contract]
pub trait MultisigTreasury:
    events::Events
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
        quorum: u32,
        admins: MultiValueEncoded<ManagedAddress>,
    ) {
        require!(!admins.is_empty(), "Zero length");
        require!(quorum > 0, "Must be greater than zero");

        self.init_router(router);
        self.init_custody(project_token, stable_token);

        for admin in admins.into_iter() {
            require!(!admin.is_zero(), "Admin can't be zero address");
            require!(self.admins().insert(admin), "Duplicate admin");
        }

        self.quorum().set(quorum);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(proposeWithdrawal)]
    fn propose_withdrawal(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        recipient: ManagedAddress,
        is_native: bool,
    ) -> u64 {
        let proposer = self.require_admin();

        require!(amount > 0, "Zero amount");

        let token = if is_native {
            EgldOrEsdtTokenIdentifier::egld()
        } else {
            require!(token.is_esdt() && token.is_valid(), "Zero address");

            token
        };

        require!(!recipient.is_zero(), "Zero address");

        self.require_within_limit(&token, &amount, LimitKind::Withdraw);
        self.require_custody_balance(&token, &amount);

        self.create_transaction(
            proposer,
            TransactionAction::Withdraw {
                token,
                amount,
                recipient,
            },
        )
    }

    #[endpoint(proposeSwap)]
    fn propose_swap(
        &self,
        token_in: TokenIdentifier,
        token_out: TokenIdentifier,
        amount: BigUint,
        recipient: ManagedAddress,
    ) -> u64 {
        let proposer = self.require_admin();

        require!(amount > 0, "Zero amount");
        require!(
            token_in.is_valid_esdt_identifier()
                && token_out.is_valid_esdt_identifier()
                && !recipient.is_zero(),
            "Zero address"
        );
        require!(token_in != token_out, "Same token");

        let custody_token = EgldOrEsdtTokenIdentifier::esdt(token_in.clone());

        self.require_within_limit(&custody_token, &amount, LimitKind::Swap);
        self.require_custody_balance(&custody_token, &amount);

        self.create_transaction(
            proposer,
            TransactionAction::SwapTokens {
                token_in,
                token_out,
                amount,
                recipient,
            },
        )
    }

    #[endpoint]
    fn vote(&self, trx_id: u64, approve: bool) {
        let admin = self.require_admin();

        let transaction_mapper = self.transactions(trx_id);

        require!(!transaction_mapper.is_empty(), "Transaction not created");

        let mut transaction = transaction_mapper.get();

        require!(transaction.is_pending(), "Transaction completed");
        require!(self.voters(trx_id).insert(admin.clone()), "Already voted");

        if approve {
            transaction.confirmations += 1;
        } else {
            transaction.rejections += 1;
        }

        self.vote_event(trx_id, &admin, approve);

        self.resolve_transaction(trx_id, transaction);
    }

    #[only_owner]
    #[endpoint(addAdministrator)]
    fn add_administrator(&self, admin: ManagedAddress) {
        require!(!admin.is_zero(), "Zero address");
        require!(self.admins().insert(admin.clone()), "Already an admin");

        let quorum = self.quorum().update(|quorum| {
            *quorum += 1;
            *quorum
        });

        self.admin_added_event(&admin, quorum);
    }

    #[only_owner]
    #[endpoint(removeAdministrator)]
    fn remove_administrator(&self, admin: ManagedAddress) {
        require!(self.admins().contains(&admin), "Not an admin");
        require!(self.admins().len() > 1, "Last admin");

        self.admins().remove(&admin);

        let quorum = self.quorum().update(|quorum| {
            if *quorum > 1 {
                *quorum -= 1;
            }
            *quorum
        });

        self.admin_removed_event(&admin, quorum);
    }

    #[only_owner]
    #[endpoint(updateQuorum)]
    fn update_quorum(&self, quorum: u32) {
        require!(quorum > 0, "Invalid quorum");

        self.quorum_updated_event(quorum);

        self.quorum().set(quorum);
    }

    fn create_transaction(
        &self,
        proposer: ManagedAddress,
        action: TransactionAction<Self::Api>,
    ) -> u64 {
        let trx_id = self.trx_counter().update(|counter| {
            let trx_id = *counter;
            *counter += 1;
            trx_id
        });

        self.voters(trx_id).insert(proposer.clone());

        self.transaction_created_event(trx_id, &proposer, &action);

        let transaction = Transaction {
            action,
            proposer,
            status: TransactionStatus::Pending,
            confirmations: 1,
            rejections: 0,
        };

        self.resolve_transaction(trx_id, transaction);

        trx_id
    }

    fn resolve_transaction(&self, trx_id: u64, mut transaction: Transaction<Self::Api>) {
        if transaction.ballots() >= self.quorum().get() {
            if transaction.rejections == 0 {
                transaction.status = TransactionStatus::Approved;

                self.execute_action(trx_id, &transaction.action);
            } else {
                transaction.status = TransactionStatus::Rejected;
            }

            self.transaction_resolved_event(
                trx_id,
                TransactionResolvedEventData {
                    status: transaction.status,
                    confirmations: transaction.confirmations,
                    rejections: transaction.rejections,
                },
            );
        }

        self.transactions(trx_id).set(transaction);
    }

    fn execute_action(&self, trx_id: u64, action: &TransactionAction<Self::Api>) {
        match action {
            TransactionAction::Withdraw {
                token,
                amount,
                recipient,
            } => {
                self.require_within_limit(token, amount, LimitKind::Withdraw);

                self.transfer_out(recipient, token, amount);

                self.withdraw_event(token, recipient, trx_id, amount);
            }
            TransactionAction::SwapTokens {
                token_in,
                token_out,
                amount,
                recipient,
            } => {
                self.require_within_limit(
                    &EgldOrEsdtTokenIdentifier::esdt(token_in.clone()),
                    amount,
                    LimitKind::Swap,
                );

                // Output stays in custody, the recipient is recorded for accounting
                let amount_out = self.swap_at_quote(
                    token_in,
                    token_out,
                    amount,
                    &self.blockchain().get_sc_address(),
                );

                self.swap_tokens_event(
                    token_in,
                    token_out,
                    recipient,
                    SwapTokensEventData {
                        trx_id,
                        amount_in: amount.clone(),
                        amount_out,
                    },
                );
            }
        }
    }

    fn require_admin(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();

        require!(self.admins().contains(&caller), "Not an admin");

        caller
    }

    #[view(getAdmins)]
    fn get_admins(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut admins = MultiValueEncoded::new();

        for admin in self.admins().iter() {
            admins.push(admin);
        }

        admins
    }

    #[view(hasVoted)]
    fn has_voted(&self, trx_id: u64, address: &ManagedAddress) -> bool {
        self.voters(trx_id).contains(address)
    }

    #[storage_mapper("admins")]
    fn admins(&self) -> SetMapper<ManagedAddress>;

    #[view(getQuorum)]
    #[storage_mapper("quorum")]
    fn quorum(&self) -> SingleValueMapper<u32>;

    #[view(getTrxCounter)]
    #[storage_mapper("trx_counter")]
    fn trx_counter(&self) -> SingleValueMapper<u64>;

    #[view(getTransaction)]
    #[storage_mapper("transactions")]
    fn transactions(&self, trx_id: u64) -> SingleValueMapper<Transaction<Self::Api>>;

    #[storage_mapper("voters")]
    fn voters(&self, trx_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
