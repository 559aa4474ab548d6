use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use dv_dao::admin_credential::AdminCredentialDao;
use dv_error::Error;
use dv_token_jwt::kind::JwtTokenKind;

use crate::{
    context::ApiRestCtx,
    model::{
        admin_auth::{AdminAuthReqJson, AuthTokenResJson, CheckSetupResJson},
        Response, SuccessResJson,
    },
};

pub fn admin_auth_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin-auth", web::post().to(admin_auth));
}

async fn admin_auth(
    ctx: web::Data<ApiRestCtx>,
    auth: Option<BearerAuth>,
    data: web::Json<AdminAuthReqJson>,
) -> HttpResponse {
    dv_log::debug(None, format!("[ApiRest] admin-auth '{}'", data.action()));

    let res = match data.action() {
        "check-setup" => check_setup(&ctx).await,
        "setup" => setup(&ctx, data.new_password()).await,
        "login" => login(&ctx, data.password()).await,
        "refresh" => refresh(&ctx, &auth).await,
        _ => Err(Error::InvalidAction),
    };

    match res {
        Ok(res) => res,
        Err(err) => Response::error(&err),
    }
}

async fn check_setup(ctx: &ApiRestCtx) -> Result<HttpResponse, Error> {
    let credential = AdminCredentialDao::db_select(ctx.dao().db()).await?;

    Ok(Response::data(
        &StatusCode::OK,
        &CheckSetupResJson::new(&credential.is_some()),
    ))
}

async fn setup(ctx: &ApiRestCtx, new_password: &Option<String>) -> Result<HttpResponse, Error> {
    let new_password = match new_password {
        Some(new_password) => new_password,
        None => {
            return Err(Error::ValidationError(
                "newPassword is required".to_owned(),
            ))
        }
    };

    let password_hash = ctx.hash().argon2().hash_password(new_password)?;

    let created = AdminCredentialDao::new(&password_hash)
        .db_insert_if_absent(ctx.dao().db())
        .await?;
    if !created {
        return Err(Error::AlreadySetup);
    }

    dv_log::info(Some("🔐"), "[ApiRest] Admin password set up");

    Ok(Response::data(&StatusCode::OK, &SuccessResJson::new()))
}

async fn login(ctx: &ApiRestCtx, password: &Option<String>) -> Result<HttpResponse, Error> {
    let credential = match AdminCredentialDao::db_select(ctx.dao().db()).await? {
        Some(credential) => credential,
        None => return Err(Error::NotSetup),
    };

    let password = match password {
        Some(password) => password,
        None => return Err(Error::InvalidCredentials),
    };

    if !ctx
        .hash()
        .argon2()
        .verify_password(password, credential.password_hash())?
    {
        return Err(Error::InvalidCredentials);
    }

    let token = ctx
        .token()
        .jwt()
        .encode(credential.id(), &JwtTokenKind::Admin)?;

    dv_log::info(Some("🔓"), "[ApiRest] Admin logged in");

    Ok(Response::data(&StatusCode::OK, &AuthTokenResJson::new(&token)))
}

/// Hands back the presented token, or a fresh one once more than half of
/// its lifetime has passed.
async fn refresh(ctx: &ApiRestCtx, auth: &Option<BearerAuth>) -> Result<HttpResponse, Error> {
    let token = match auth {
        Some(auth) => auth.token(),
        None => return Err(Error::InvalidCredentials),
    };

    let claim = ctx
        .token()
        .jwt()
        .decode(token)
        .map_err(|_| Error::InvalidCredentials)?;

    match AdminCredentialDao::db_select(ctx.dao().db()).await? {
        Some(credential) if credential.id() == claim.id() => (),
        _ => return Err(Error::InvalidCredentials),
    }

    let token = if ctx.token().jwt().need_renew(&claim)? {
        ctx.token().jwt().renew(&claim)?
    } else {
        token.to_owned()
    };

    Ok(Response::data(&StatusCode::OK, &AuthTokenResJson::new(&token)))
}
