use anyhow::{Error, Result};
use argon2::{
    password_hash::{self, rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};

/// Slow salted password hashing for the admin credential.
pub struct Argon2Hash {
    argon2: Argon2<'static>,
}

impl Argon2Hash {
    pub fn new(algorithm: &str, version: &str) -> Result<Self> {
        dv_log::info(Some("⚡"), "[Argon2Hash] Initializing component");

        let algorithm = match algorithm {
            "Argon2d" => Algorithm::Argon2d,
            "Argon2i" => Algorithm::Argon2i,
            "Argon2id" => Algorithm::Argon2id,
            _ => return Err(Error::msg(format!("Unknown argon2 algorithm '{algorithm}'"))),
        };

        let version = match version {
            "V0x10" => Version::V0x10,
            "V0x13" => Version::V0x13,
            _ => return Err(Error::msg(format!("Unknown argon2 version '{version}'"))),
        };

        Ok(Self {
            argon2: Argon2::new(algorithm, version, Params::DEFAULT),
        })
    }

    /// Returns the PHC string, which embeds the algorithm, parameters and salt.
    pub fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Ok(self.argon2.hash_password(password.as_bytes(), &salt)?.to_string())
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        let hash = PasswordHash::new(hash)?;
        match self.argon2.verify_password(password.as_bytes(), &hash) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Argon2Hash;

    fn hasher() -> Argon2Hash {
        Argon2Hash::new("Argon2id", "V0x13").expect("valid argon2 settings")
    }

    #[test]
    fn hash_then_verify() {
        let hasher = hasher();
        let hash = hasher.hash_password("s3cret-admin").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify_password("s3cret-admin", &hash).unwrap());
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hasher = hasher();
        let hash = hasher.hash_password("s3cret-admin").unwrap();

        assert!(!hasher.verify_password("S3cret-admin", &hash).unwrap());
        assert!(!hasher.verify_password("", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_a_fresh_salt() {
        let hasher = hasher();
        let first = hasher.hash_password("repeat").unwrap();
        let second = hasher.hash_password("repeat").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify_password("repeat", &first).unwrap());
        assert!(hasher.verify_password("repeat", &second).unwrap());
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        assert!(hasher().verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn non_ascii_password_verifies() {
        let hasher = hasher();
        let hash = hasher.hash_password("كلمة-سر").unwrap();

        assert!(hasher.verify_password("كلمة-سر", &hash).unwrap());
    }

    #[test]
    fn unknown_settings_are_rejected() {
        assert!(Argon2Hash::new("Scrypt", "V0x13").is_err());
        assert!(Argon2Hash::new("Argon2id", "V0x99").is_err());
    }
}
