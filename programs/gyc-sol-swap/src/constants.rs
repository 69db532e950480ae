pub const CONFIG_SEED: &[u8] = b"gyc-sol-swap";
