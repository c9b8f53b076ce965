//! Identity middleware.
//!
//! The API sits behind a gateway that authenticates shoppers and forwards
//! the principal in an `x-user-uuid` header. This middleware only parses
//! that header; it never authenticates.

use salvo::prelude::*;
use uuid::Uuid;

use bakeshop_app::domain::users::models::UserUuid;

use crate::extensions::*;

pub(crate) const USER_HEADER: &str = "x-user-uuid";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(user) = extract_user_uuid(req) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid x-user-uuid header"));

        return;
    };

    depot.insert_user_uuid(user);

    ctrl.call_next(req, depot, res).await;
}

fn extract_user_uuid(req: &Request) -> Option<UserUuid> {
    let value = req.headers().get(USER_HEADER)?.to_str().ok()?;
    let uuid = Uuid::try_parse(value.trim()).ok()?;

    Some(UserUuid::from_uuid(uuid))
}
