use std::time;

use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{claim::Claim, kind::JwtTokenKind};

/// Issues and verifies HS256 session tokens for the admin dashboard.
pub struct JwtToken {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_duration: u64,
}

impl JwtToken {
    pub fn new(secret: &str, expiry_duration: &u64) -> Self {
        dv_log::info(Some("⚡"), "[JwtToken] Initializing component");

        let secret = secret.as_bytes();
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            header: Header::default(),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            expiry_duration: *expiry_duration,
        }
    }

    pub fn expiry_duration(&self) -> &u64 {
        &self.expiry_duration
    }

    pub fn encode(&self, id: &Uuid, kind: &JwtTokenKind) -> Result<String> {
        let now = now_secs()?;
        let claim = Claim::new(id, kind, &now, &(now + self.expiry_duration));

        Ok(encode(&self.header, &claim, &self.encoding_key)?)
    }

    /// Checks signature and expiry.
    pub fn decode(&self, token: &str) -> Result<Claim> {
        Ok(decode::<Claim>(token, &self.decoding_key, &self.validation)?.claims)
    }

    pub fn need_renew(&self, claim: &Claim) -> Result<bool> {
        Ok(claim.exp().saturating_sub(self.expiry_duration / 2) < now_secs()?)
    }

    pub fn renew(&self, claim: &Claim) -> Result<String> {
        self.encode(claim.id(), claim.kind())
    }
}

fn now_secs() -> Result<u64> {
    Ok(time::SystemTime::now()
        .duration_since(time::UNIX_EPOCH)?
        .as_secs())
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use uuid::Uuid;

    use super::{now_secs, JwtToken};
    use crate::{claim::Claim, kind::JwtTokenKind};

    const SECRET: &str = "test-secret-that-is-long-enough";

    #[test]
    fn encode_then_decode() {
        let jwt = JwtToken::new(SECRET, &3600);
        let id = Uuid::now_v7();

        let token = jwt.encode(&id, &JwtTokenKind::Admin).unwrap();
        let claim = jwt.decode(&token).unwrap();

        assert_eq!(claim.id(), &id);
        assert_eq!(claim.kind(), &JwtTokenKind::Admin);
        assert_eq!(*claim.exp() - *claim.iat(), 3600);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = JwtToken::new("another-secret", &3600);
        let verifier = JwtToken::new(SECRET, &3600);

        let token = issuer.encode(&Uuid::now_v7(), &JwtTokenKind::Admin).unwrap();

        assert!(verifier.decode(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = JwtToken::new(SECRET, &3600);
        let now = now_secs().unwrap();
        let claim = Claim::new(&Uuid::now_v7(), &JwtTokenKind::Admin, &(now - 600), &(now - 300));
        let token = encode(
            &Header::default(),
            &claim,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(jwt.decode(&token).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        let jwt = JwtToken::new(SECRET, &3600);
        assert!(jwt.decode("not.a.token").is_err());
    }

    #[test]
    fn renew_only_past_half_life() {
        let jwt = JwtToken::new(SECRET, &3600);
        let now = now_secs().unwrap();
        let id = Uuid::now_v7();

        let fresh = Claim::new(&id, &JwtTokenKind::Admin, &now, &(now + 3600));
        let aging = Claim::new(&id, &JwtTokenKind::Admin, &(now - 2400), &(now + 1200));

        assert!(!jwt.need_renew(&fresh).unwrap());
        assert!(jwt.need_renew(&aging).unwrap());
        assert!(jwt.decode(&jwt.renew(&aging).unwrap()).is_ok());
    }
}
