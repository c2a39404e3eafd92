use super::*;

impl<'a> CommentRepo for DbReadOnly<'a> {
    fn create_comment(&self, _comment: &Comment) -> Result<()> {
        unreachable!();
    }
    fn update_comment(&self, _comment: &Comment) -> Result<()> {
        unreachable!();
    }
    fn delete_comment(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn load_comment(&self, id: &Id) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_station(&self, station_id: &Id) -> Result<Vec<Comment>> {
        load_comments_of_station(&mut self.conn.borrow_mut(), station_id)
    }
}

impl<'a> CommentRepo for DbReadWrite<'a> {
    fn create_comment(&self, comment: &Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn update_comment(&self, comment: &Comment) -> Result<()> {
        update_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn delete_comment(&self, id: &Id) -> Result<()> {
        delete_comment(&mut self.conn.borrow_mut(), id)
    }

    fn load_comment(&self, id: &Id) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_station(&self, station_id: &Id) -> Result<Vec<Comment>> {
        load_comments_of_station(&mut self.conn.borrow_mut(), station_id)
    }
}

impl<'a> CommentRepo for DbConnection<'a> {
    fn create_comment(&self, comment: &Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn update_comment(&self, comment: &Comment) -> Result<()> {
        update_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn delete_comment(&self, id: &Id) -> Result<()> {
        delete_comment(&mut self.conn.borrow_mut(), id)
    }

    fn load_comment(&self, id: &Id) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_station(&self, station_id: &Id) -> Result<Vec<Comment>> {
        load_comments_of_station(&mut self.conn.borrow_mut(), station_id)
    }
}

fn new_comment(c: &Comment, station_rowid: i64) -> models::NewComment<'_> {
    models::NewComment {
        id: c.id.as_str(),
        station_rowid,
        author: c.author.as_ref().map(Id::as_str),
        text: &c.text,
        rating: c.rating.map(|r| i16::from(r.value())),
        created_at: c.created_at.as_millis(),
    }
}

fn replace_comment_reactions(
    conn: &mut SqliteConnection,
    comment_rowid: i64,
    reactions: &Reactions,
) -> Result<()> {
    use schema::comment_reaction::dsl;
    diesel::delete(dsl::comment_reaction.filter(dsl::comment_rowid.eq(comment_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let rows: Vec<_> = reaction_rows(reactions)
        .map(|(user_id, reaction)| models::NewCommentReaction {
            comment_rowid,
            user_id: user_id.as_str(),
            reaction,
        })
        .collect();
    if rows.is_empty() {
        return Ok(());
    }
    diesel::insert_into(schema::comment_reaction::table)
        .values(&rows)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn create_comment(conn: &mut SqliteConnection, c: &Comment) -> Result<()> {
    let station_rowid = resolve_station_rowid(conn, &c.station_id)?;
    diesel::insert_into(schema::station_comment::table)
        .values(&new_comment(c, station_rowid))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let rowid = resolve_comment_rowid(conn, &c.id)?;
    replace_comment_reactions(conn, rowid, &c.reactions)?;
    Ok(())
}

fn update_comment(conn: &mut SqliteConnection, c: &Comment) -> Result<()> {
    use schema::station_comment::dsl;
    let rowid = resolve_comment_rowid(conn, &c.id)?;
    let station_rowid = resolve_station_rowid(conn, &c.station_id)?;
    diesel::update(dsl::station_comment.filter(dsl::rowid.eq(rowid)))
        .set(&new_comment(c, station_rowid))
        .execute(conn)
        .map_err(from_diesel_err)?;
    replace_comment_reactions(conn, rowid, &c.reactions)?;
    Ok(())
}

fn delete_comment(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::{comment_reaction as cr, station_comment as c};
    let rowid = resolve_comment_rowid(conn, id)?;
    diesel::delete(cr::table.filter(cr::comment_rowid.eq(rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(c::table.filter(c::rowid.eq(rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_comment_entity(conn: &mut SqliteConnection, entity: models::CommentEntity) -> Result<Comment> {
    use schema::comment_reaction::dsl;
    let models::CommentEntity {
        rowid,
        id,
        station_rowid: _,
        author,
        text,
        rating,
        created_at,
        station_id,
    } = entity;
    let rating = rating
        .map(|r| {
            CommentRating::try_new(r.into()).ok_or_else(|| anyhow!("Invalid comment rating: {r}"))
        })
        .transpose()?;
    let reactions = dsl::comment_reaction
        .select((dsl::user_id, dsl::reaction))
        .filter(dsl::comment_rowid.eq(rowid))
        .order_by(dsl::rowid)
        .load::<(String, i16)>(conn)
        .map_err(from_diesel_err)?;
    Ok(Comment {
        id: id.into(),
        station_id: station_id.into(),
        author: author.map(Into::into),
        text,
        rating,
        created_at: Timestamp::from_millis(created_at),
        reactions: load_reactions(reactions),
    })
}

macro_rules! comment_columns {
    () => {
        (
            schema::station_comment::rowid,
            schema::station_comment::id,
            schema::station_comment::station_rowid,
            schema::station_comment::author,
            schema::station_comment::text,
            schema::station_comment::rating,
            schema::station_comment::created_at,
            schema::station::id,
        )
    };
}

fn load_comment(conn: &mut SqliteConnection, id: &Id) -> Result<Comment> {
    use schema::station_comment::dsl;
    let entity = dsl::station_comment
        .inner_join(schema::station::table)
        .select(comment_columns!())
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::CommentEntity>(conn)
        .map_err(from_diesel_err)?;
    load_comment_entity(conn, entity)
}

fn load_comments_of_station(conn: &mut SqliteConnection, station_id: &Id) -> Result<Vec<Comment>> {
    use schema::station_comment::dsl;
    dsl::station_comment
        .inner_join(schema::station::table)
        .select(comment_columns!())
        .filter(schema::station::id.eq(station_id.as_str()))
        .order_by((dsl::created_at, dsl::rowid))
        .load::<models::CommentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|entity| load_comment_entity(conn, entity))
        .collect()
}
