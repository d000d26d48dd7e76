fn main() {
    multiversx_sc_meta::cli_main::<multisig_treasury::AbiProvider>();
}
