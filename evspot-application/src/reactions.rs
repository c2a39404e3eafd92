use super::*;

pub fn toggle_station_reaction(
    connections: &sqlite::Connections,
    user_id: &Id,
    station_id: &Id,
    reaction: Reaction,
) -> Result<Reactions> {
    let reactions = connections.exclusive()?.transaction(|conn| {
        usecases::toggle_station_reaction(conn, user_id, station_id, reaction)
    })?;
    Ok(reactions)
}

pub fn toggle_comment_reaction(
    connections: &sqlite::Connections,
    user_id: &Id,
    station_id: &Id,
    comment_id: &Id,
    reaction: Reaction,
) -> Result<Reactions> {
    let reactions = connections.exclusive()?.transaction(|conn| {
        usecases::toggle_comment_reaction(conn, user_id, station_id, comment_id, reaction)
    })?;
    Ok(reactions)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn toggle_station_reactions() {
        let fixture = BackendFixture::new();
        let owner = fixture.register("owner@example.com");
        let station = fixture.create_station(&owner.id, ChargerKind::Standard);
        let user = Id::new();
        let toggle = |reaction| {
            flows::toggle_station_reaction(&fixture.db_connections, &user, &station.id, reaction)
                .unwrap()
        };

        let r = toggle(Reaction::Like);
        assert_eq!((1, 0), (r.likes(), r.dislikes()));
        let r = toggle(Reaction::Dislike);
        assert_eq!((0, 1), (r.likes(), r.dislikes()));
        let r = toggle(Reaction::Dislike);
        assert_eq!((0, 0), (r.likes(), r.dislikes()));
        assert_eq!(r, fixture.station(&station.id).reactions);
    }

    #[test]
    fn comment_reaction_of_other_station() {
        let fixture = BackendFixture::new();
        let owner = fixture.register("owner@example.com");
        let station = fixture.create_station(&owner.id, ChargerKind::Standard);
        let other = fixture.create_station(&owner.id, ChargerKind::Standard);
        let comment = fixture.comment(&owner.id, &station.id, "Fine", None);

        let r = flows::toggle_comment_reaction(
            &fixture.db_connections,
            &owner.id,
            &station.id,
            &comment.id,
            Reaction::Like,
        )
        .unwrap();
        assert_eq!(1, r.likes());

        let err = flows::toggle_comment_reaction(
            &fixture.db_connections,
            &owner.id,
            &other.id,
            &comment.id,
            Reaction::Like,
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
