fn main() {
    multiversx_sc_meta::cli_main::<treasury::AbiProvider>();
}
