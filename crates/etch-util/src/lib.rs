pub mod result_ext;

uniffi::setup_scaffolding!();

mod ffi {
    #[uniffi::export]
    fn hex_encode(bytes: Vec<u8>) -> String {
        hex::encode(bytes)
    }

    #[uniffi::export]
    fn hex_decode(hex: &str) -> Option<Vec<u8>> {
        hex::decode(hex).ok()
    }
}
