use actix_web::{dev::ServiceRequest, error::InternalError, web, Error as ActixError};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use dv_dao::admin_credential::AdminCredentialDao;
use dv_error::Error;
use dv_token_jwt::kind::JwtTokenKind;

use crate::{context::ApiRestCtx, model::Response};

/// Bearer validator for admin endpoints: the token must be a live admin
/// token issued for the stored credential.
pub async fn admin_validator(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (ActixError, ServiceRequest)> {
    let ctx = match req.app_data::<web::Data<ApiRestCtx>>() {
        Some(ctx) => ctx.clone(),
        None => {
            let err = Error::UnknownError("Missing API context".to_owned());
            return Err((into_actix_error(err), req));
        }
    };

    match authorize(&ctx, credentials.token()).await {
        Ok(()) => Ok(req),
        Err(err) => Err((into_actix_error(err), req)),
    }
}

async fn authorize(ctx: &ApiRestCtx, token: &str) -> Result<(), Error> {
    let claim = ctx
        .token()
        .jwt()
        .decode(token)
        .map_err(|err| Error::Unauthorized(format!("Invalid token: {err}")))?;

    if claim.kind() != &JwtTokenKind::Admin {
        return Err(Error::Unauthorized("Not an admin token".to_owned()));
    }

    match AdminCredentialDao::db_select(ctx.dao().db()).await {
        Ok(Some(credential)) if credential.id() == claim.id() => Ok(()),
        Ok(_) => Err(Error::Unauthorized(
            "Token does not belong to the admin".to_owned(),
        )),
        Err(err) => Err(Error::UnknownError(err.to_string())),
    }
}

fn into_actix_error(err: Error) -> ActixError {
    let res = Response::error(&err);
    InternalError::from_response(err, res).into()
}
