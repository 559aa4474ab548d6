use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::kind::JwtTokenKind;

#[derive(Deserialize, Serialize, Debug)]
pub struct Claim {
    id: Uuid,
    kind: JwtTokenKind,
    iat: u64,
    exp: u64,
}

impl Claim {
    pub fn new(id: &Uuid, kind: &JwtTokenKind, iat: &u64, exp: &u64) -> Self {
        Self {
            id: *id,
            kind: *kind,
            iat: *iat,
            exp: *exp,
        }
    }

    /// Id of the admin credential the token was issued for.
    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn kind(&self) -> &JwtTokenKind {
        &self.kind
    }

    pub fn iat(&self) -> &u64 {
        &self.iat
    }

    pub fn exp(&self) -> &u64 {
        &self.exp
    }
}
