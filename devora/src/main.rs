use std::sync::Arc;

use anyhow::{Error, Result};
use dv_api_rest::{
    context::{
        ApiRestCtx, ApiRestDaoCtx, ApiRestHashCtx, ApiRestIngestCtx, ApiRestStorageCtx,
        ApiRestTokenCtx,
    },
    ApiRestServer,
};
use dv_dao::Db;
use dv_db_postgresql::db::PostgresDb;
use dv_db_sqlite::db::SqliteDb;
use dv_hash_argon2::argon2::Argon2Hash;
use dv_storage::ObjectStorage;
use dv_token_jwt::token::JwtToken;
use tokio_util::sync::CancellationToken;

mod config_path;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = config_path::get()?;
    let config = dv_config::from_path(&config_path)?;

    dv_log::init(config.log().display_level(), config.log().level_filter());

    dv_log::info(Some("🚀"), "[Devora] Starting");

    let argon2_hash = Argon2Hash::new(
        config.hash().argon2().algorithm(),
        config.hash().argon2().version(),
    )?;

    let jwt_token = JwtToken::new(
        config.token().jwt().secret(),
        config.token().jwt().expiry_duration(),
    );

    let db = if let Some(postgres) = config.db().postgres() {
        Arc::new(Db::PostgresqlDb(
            PostgresDb::new(
                postgres.user(),
                postgres.password(),
                postgres.host(),
                postgres.port(),
                postgres.db_name(),
                postgres.max_connections(),
            )
            .await?,
        ))
    } else if let Some(sqlite) = config.db().sqlite() {
        Arc::new(Db::SqliteDb(
            SqliteDb::new(sqlite.path(), sqlite.max_connections()).await?,
        ))
    } else {
        return Err(Error::msg("[Devora] No database configuration is specified"));
    };

    let object_storage = ObjectStorage::new(
        config.storage().path(),
        config.storage().bucket(),
        config.storage().public_url(),
    )
    .await?;

    let api_rest_server = ApiRestServer::new(
        config.api().rest().host(),
        config.api().rest().port(),
        ApiRestCtx::new(
            ApiRestHashCtx::new(argon2_hash),
            ApiRestTokenCtx::new(jwt_token),
            ApiRestDaoCtx::new(db),
            ApiRestStorageCtx::new(object_storage),
            ApiRestIngestCtx::new(config.ingest().timeout(), config.ingest().max_size())?,
        ),
    );

    run_until_shutdown(api_rest_server, CancellationToken::new()).await
}

/// Runs every component until ctrl-c or until one of them fails, in which
/// case the others are cancelled and the failure is returned.
async fn run_until_shutdown(
    api_rest_server: ApiRestServer,
    cancel_token: CancellationToken,
) -> Result<()> {
    match tokio::try_join!(
        api_rest_server.run(cancel_token.clone()),
        shutdown_on_ctrl_c(cancel_token.clone()),
    ) {
        Ok(_) => {
            dv_log::info(Some("👋"), "[Devora] Turned off");
            Ok(())
        }
        Err(err) => {
            dv_log::warn(None, "[Devora] Shutting down all running components");
            cancel_token.cancel();
            dv_log::error(Some("👋"), format!("[Devora] Turned off with error: {err}"));
            Err(err)
        }
    }
}

async fn shutdown_on_ctrl_c(cancel_token: CancellationToken) -> Result<()> {
    tokio::select! {
        res = tokio::signal::ctrl_c() => {
            res?;
            dv_log::info(Some("🛑"), "[Devora] Received shutdown signal");
            cancel_token.cancel();
        }
        _ = cancel_token.cancelled() => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{net::TcpListener, sync::Arc};

    use dv_api_rest::{
        context::{
            ApiRestCtx, ApiRestDaoCtx, ApiRestHashCtx, ApiRestIngestCtx, ApiRestStorageCtx,
            ApiRestTokenCtx,
        },
        ApiRestServer,
    };
    use dv_dao::Db;
    use dv_db_sqlite::db::SqliteDb;
    use dv_hash_argon2::argon2::Argon2Hash;
    use dv_storage::ObjectStorage;
    use dv_token_jwt::token::JwtToken;
    use tokio_util::sync::CancellationToken;

    use super::run_until_shutdown;

    async fn server(dir: &tempfile::TempDir, port: &u16) -> ApiRestServer {
        let db_path = dir.path().join("devora.db");
        let db = SqliteDb::new(db_path.to_str().unwrap(), &1).await.unwrap();
        let storage = ObjectStorage::new(
            dir.path().join("storage").to_str().unwrap(),
            "project-images",
            "http://localhost:8080",
        )
        .await
        .unwrap();

        ApiRestServer::new(
            "127.0.0.1",
            port,
            ApiRestCtx::new(
                ApiRestHashCtx::new(Argon2Hash::new("Argon2id", "V0x13").unwrap()),
                ApiRestTokenCtx::new(JwtToken::new("secret", &60)),
                ApiRestDaoCtx::new(Arc::new(Db::SqliteDb(db))),
                ApiRestStorageCtx::new(storage),
                ApiRestIngestCtx::new(&5, &1024).unwrap(),
            ),
        )
    }

    #[tokio::test]
    async fn failing_component_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let taken = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();
        let cancel_token = CancellationToken::new();

        let res = run_until_shutdown(server(&dir, &port).await, cancel_token.clone()).await;

        assert!(res.is_err());
        assert!(cancel_token.is_cancelled());
    }
}
