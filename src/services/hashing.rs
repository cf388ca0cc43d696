use anyhow::anyhow;
use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};

/// Iteration count for new hashes, from `HASH_COST`. The default of 4
/// mirrors the original deployment; raise it for production traffic.
pub fn hash_cost() -> u32 {
    std::env::var("HASH_COST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(4)
}

pub fn hash_password(password: &str, cost: u32) -> anyhow::Result<String> {
    let params = Params::new(Params::DEFAULT_M_COST, cost, Params::DEFAULT_P_COST, None)
        .map_err(|e| anyhow!("Invalid hash parameters: {}", e))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let salt = SaltString::generate(&mut OsRng);
    let hashed = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("Failed to hash password: {}", e))?;

    Ok(hashed.to_string())
}

/// The PHC string carries its own parameters, so verification works for
/// hashes produced under any cost setting.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
