use super::*;

#[post("/stations/<id>/comments", format = "application/json", data = "<comment>")]
pub fn post_comment(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
    comment: JsonResult<json::NewComment>,
) -> Result<json::Comment> {
    let new_comment = from_json::new_comment(comment?.into_inner());
    let comment = flows::add_comment(&db, auth.user_id()?, &id.into(), new_comment)?;
    Ok(Json(comment.into()))
}

#[put(
    "/stations/<id>/comments/<cid>",
    format = "application/json",
    data = "<comment>"
)]
pub fn put_comment(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
    cid: &str,
    comment: JsonResult<json::NewComment>,
) -> Result<json::Comment> {
    let update = from_json::new_comment(comment?.into_inner());
    let comment = flows::update_comment(&db, auth.user_id()?, &id.into(), &cid.into(), update)?;
    Ok(Json(comment.into()))
}

#[delete("/stations/<id>/comments/<cid>")]
pub fn delete_comment(db: sqlite::Connections, auth: Auth, id: &str, cid: &str) -> Result<()> {
    flows::delete_comment(&db, auth.user_id()?, &id.into(), &cid.into())?;
    Ok(Json(()))
}

#[post(
    "/stations/<id>/comments/<cid>/reaction",
    format = "application/json",
    data = "<reaction>"
)]
pub fn post_comment_reaction(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
    cid: &str,
    reaction: JsonResult<json::ReactionRequest>,
) -> Result<json::Reactions> {
    let reaction = reaction?.into_inner().reaction;
    let reactions = flows::toggle_comment_reaction(
        &db,
        auth.user_id()?,
        &id.into(),
        &cid.into(),
        reaction.into(),
    )?;
    Ok(Json(reactions.into()))
}
