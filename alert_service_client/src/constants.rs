pub const INTERNAL_AUTH_KEY_HEADER_KEY: &str = "x-internal-auth-key";
