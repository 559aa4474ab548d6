use std::{sync::Arc, time::Duration};

use anyhow::Result;
use dv_dao::Db;
use dv_hash_argon2::argon2::Argon2Hash;
use dv_storage::ObjectStorage;
use dv_token_jwt::token::JwtToken;

pub struct ApiRestCtx {
    hash: ApiRestHashCtx,
    token: ApiRestTokenCtx,
    dao: ApiRestDaoCtx,
    storage: ApiRestStorageCtx,
    ingest: ApiRestIngestCtx,
}

impl ApiRestCtx {
    pub fn new(
        hash: ApiRestHashCtx,
        token: ApiRestTokenCtx,
        dao: ApiRestDaoCtx,
        storage: ApiRestStorageCtx,
        ingest: ApiRestIngestCtx,
    ) -> Self {
        Self {
            hash,
            token,
            dao,
            storage,
            ingest,
        }
    }

    pub fn hash(&self) -> &ApiRestHashCtx {
        &self.hash
    }

    pub fn token(&self) -> &ApiRestTokenCtx {
        &self.token
    }

    pub fn dao(&self) -> &ApiRestDaoCtx {
        &self.dao
    }

    pub fn storage(&self) -> &ApiRestStorageCtx {
        &self.storage
    }

    pub fn ingest(&self) -> &ApiRestIngestCtx {
        &self.ingest
    }
}

pub struct ApiRestHashCtx {
    argon2: Argon2Hash,
}

impl ApiRestHashCtx {
    pub fn new(argon2: Argon2Hash) -> Self {
        Self { argon2 }
    }

    pub fn argon2(&self) -> &Argon2Hash {
        &self.argon2
    }
}

pub struct ApiRestTokenCtx {
    jwt: JwtToken,
}

impl ApiRestTokenCtx {
    pub fn new(jwt: JwtToken) -> Self {
        Self { jwt }
    }

    pub fn jwt(&self) -> &JwtToken {
        &self.jwt
    }
}

pub struct ApiRestDaoCtx {
    db: Arc<Db>,
}

impl ApiRestDaoCtx {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }
}

pub struct ApiRestStorageCtx {
    object: ObjectStorage,
}

impl ApiRestStorageCtx {
    pub fn new(object: ObjectStorage) -> Self {
        Self { object }
    }

    pub fn object(&self) -> &ObjectStorage {
        &self.object
    }
}

/// HTTP client and limits used to rehost remote project images.
pub struct ApiRestIngestCtx {
    client: reqwest::Client,
    max_size: usize,
}

impl ApiRestIngestCtx {
    pub fn new(timeout: &u64, max_size: &usize) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(*timeout))
            .build()?;

        Ok(Self {
            client,
            max_size: *max_size,
        })
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn max_size(&self) -> &usize {
        &self.max_size
    }
}
